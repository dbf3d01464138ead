// src/render/document.rs
//! Output model shared by every renderer

use crate::templates::config::{
    ColorPalette, FontSettings, HeaderStyle, SectionKind, Spacing, DEFAULT_BACKGROUND_COLOR,
};
use crate::types::Customizations;

/// A fully laid out resume, ready to be written as HTML or plain text
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    /// Identifier of the template that produced this document
    pub template_id: String,
    pub theme: Theme,
    pub layout: PageLayout,
    pub header: Header,
    pub main: Vec<Section>,
    pub sidebar: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub text_color: String,
    pub background_color: String,
    pub font_family: String,
    pub heading_font_family: String,
    pub heading_size: f32,
    pub body_size: f32,
    pub line_height: f32,
    pub section_gap: f32,
    pub item_gap: f32,
    pub page_margin: f32,
    pub uppercase_headings: bool,
}

impl Theme {
    pub fn new(colors: &ColorPalette, fonts: &FontSettings, spacing: &Spacing) -> Self {
        Self {
            primary_color: colors.primary.clone(),
            secondary_color: colors.secondary.clone(),
            text_color: colors.text.clone(),
            background_color: colors.background.clone(),
            font_family: fonts.family.clone(),
            heading_font_family: fonts
                .heading_family
                .clone()
                .unwrap_or_else(|| fonts.family.clone()),
            heading_size: fonts.heading_size,
            body_size: fonts.body_size,
            line_height: fonts.line_height,
            section_gap: spacing.section_gap,
            item_gap: spacing.item_gap,
            page_margin: spacing.page_margin,
            uppercase_headings: false,
        }
    }

    /// Start from a palette and font pairing, defaults elsewhere
    pub fn with_palette(primary: &str, secondary: &str, text: &str, font_family: &str) -> Self {
        let colors = ColorPalette {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            text: text.to_string(),
            background: DEFAULT_BACKGROUND_COLOR.to_string(),
        };
        let fonts = FontSettings {
            family: font_family.to_string(),
            ..Default::default()
        };
        Self::new(&colors, &fonts, &Spacing::default())
    }

    pub fn heading_font(mut self, family: &str) -> Self {
        self.heading_font_family = family.to_string();
        self
    }

    pub fn sizes(mut self, heading_size: f32, body_size: f32) -> Self {
        self.heading_size = heading_size;
        self.body_size = body_size;
        self
    }

    pub fn spacing(mut self, section_gap: f32, item_gap: f32, page_margin: f32) -> Self {
        self.section_gap = section_gap;
        self.item_gap = item_gap;
        self.page_margin = page_margin;
        self
    }

    pub fn uppercase_headings(mut self) -> Self {
        self.uppercase_headings = true;
        self
    }

    /// Layer color and font overrides from the resume on top of this theme
    pub fn customized(mut self, customizations: &Customizations) -> Self {
        if let Some(color) = customizations.primary_color() {
            self.primary_color = color.to_string();
        }
        if let Some(color) = customizations.secondary_color() {
            self.secondary_color = color.to_string();
        }
        if let Some(color) = customizations.text_color() {
            self.text_color = color.to_string();
        }
        if let Some(color) = customizations.background_color() {
            self.background_color = color.to_string();
        }
        if let Some(family) = customizations.font_family() {
            self.font_family = family.to_string();
            self.heading_font_family = family.to_string();
        }
        if let Some(size) = customizations.heading_size() {
            self.heading_size = size;
        }
        if let Some(size) = customizations.body_size() {
            self.body_size = size;
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLayout {
    SingleColumn,
    /// Two columns; `sidebar_width` is a percentage of the page width
    Columns { side: SidebarSide, sidebar_width: u8 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub name: String,
    pub headline: Option<String>,
    pub contact: Vec<String>,
    pub style: HeaderStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(String),
    Entry(Entry),
    Tags(Vec<String>),
    Bullets(Vec<String>),
    /// Label/value rows, e.g. language and proficiency
    Pairs(Vec<(String, String)>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entry {
    pub heading: String,
    pub subheading: Option<String>,
    pub meta: Option<String>,
    pub description: Option<String>,
    pub bullets: Vec<String>,
}

impl Section {
    pub fn new(kind: SectionKind, title: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Document {
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.main.iter().chain(self.sidebar.iter())
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections().any(|s| s.kind == kind)
    }

    /// Section kinds in reading order (main column first)
    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections().map(|s| s.kind).collect()
    }
}
