// src/templates/config.rs
//! Declarative template descriptions used by the config-driven renderer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Customizations;

pub const DEFAULT_PRIMARY_COLOR: &str = "#000000";
pub const DEFAULT_SECONDARY_COLOR: &str = "#2563eb";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
pub const DEFAULT_FONT_FAMILY: &str = "Inter, Arial, sans-serif";
pub const DEFAULT_HEADING_SIZE: f32 = 20.0;
pub const DEFAULT_BODY_SIZE: f32 = 11.0;

// ===== Section Kinds =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
}

impl SectionKind {
    /// Standard sections in their default order
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Certifications,
        SectionKind::Languages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
            SectionKind::Languages => "languages",
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            SectionKind::Summary => "Summary",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Certifications => "Certifications",
            SectionKind::Languages => "Languages",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }
}

// ===== Layout and Styling =====

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutType {
    #[default]
    SingleColumn,
    TwoColumn,
    SidebarLeft,
    SidebarRight,
}

impl LayoutType {
    pub const ALL: [LayoutType; 4] = [
        LayoutType::SingleColumn,
        LayoutType::TwoColumn,
        LayoutType::SidebarLeft,
        LayoutType::SidebarRight,
    ];

    /// Lenient parse; anything unrecognised is treated as single column
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().replace('_', "-").as_str() {
            "two-column" | "two-columns" | "2-column" => LayoutType::TwoColumn,
            "sidebar" | "sidebar-left" | "left-sidebar" => LayoutType::SidebarLeft,
            "sidebar-right" | "right-sidebar" => LayoutType::SidebarRight,
            _ => LayoutType::SingleColumn,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutType::SingleColumn => "single-column",
            LayoutType::TwoColumn => "two-column",
            LayoutType::SidebarLeft => "sidebar-left",
            LayoutType::SidebarRight => "sidebar-right",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStyle {
    #[default]
    Left,
    Centered,
    Banner,
    Split,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub text: String,
    pub background: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary: DEFAULT_SECONDARY_COLOR.to_string(),
            text: DEFAULT_PRIMARY_COLOR.to_string(),
            background: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSettings {
    pub family: String,
    #[serde(default)]
    pub heading_family: Option<String>,
    pub heading_size: f32,
    pub body_size: f32,
    #[serde(default = "default_line_height")]
    pub line_height: f32,
}

fn default_line_height() -> f32 {
    1.4
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_string(),
            heading_family: None,
            heading_size: DEFAULT_HEADING_SIZE,
            body_size: DEFAULT_BODY_SIZE,
            line_height: default_line_height(),
        }
    }
}

/// Spacing in points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    pub section_gap: f32,
    pub item_gap: f32,
    pub page_margin: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            section_gap: 14.0,
            item_gap: 8.0,
            page_margin: 36.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    pub kind: SectionKind,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub order: u32,
    #[serde(default)]
    pub title: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl SectionConfig {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| self.kind.default_title())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Cosmetic only; never affects rendered output
    pub created_at: DateTime<Utc>,
}

fn default_category() -> String {
    "general".to_string()
}

// ===== Template Config =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub id: String,
    #[serde(default)]
    pub layout: LayoutType,
    #[serde(default)]
    pub colors: ColorPalette,
    #[serde(default)]
    pub fonts: FontSettings,
    #[serde(default)]
    pub spacing: Spacing,
    #[serde(default)]
    pub header_style: HeaderStyle,
    #[serde(default = "standard_sections")]
    pub sections: Vec<SectionConfig>,
    pub metadata: TemplateMetadata,
}

/// All standard sections, enabled, in default order
pub fn standard_sections() -> Vec<SectionConfig> {
    SectionKind::ALL
        .into_iter()
        .zip(0u32..)
        .map(|(kind, order)| SectionConfig {
            kind,
            enabled: true,
            order,
            title: None,
        })
        .collect()
}

impl TemplateConfig {
    /// Build a config on the fly for a `customizations.layout` override.
    pub fn from_customizations(layout: &str, customizations: &Customizations) -> Self {
        Self::from_customizations_at(layout, customizations, Utc::now())
    }

    /// Same as [`TemplateConfig::from_customizations`] with an explicit creation time.
    pub fn from_customizations_at(
        layout: &str,
        customizations: &Customizations,
        created_at: DateTime<Utc>,
    ) -> Self {
        let layout = LayoutType::parse(layout);

        let primary = customizations
            .primary_color()
            .unwrap_or(DEFAULT_PRIMARY_COLOR)
            .to_string();
        let colors = ColorPalette {
            secondary: customizations
                .secondary_color()
                .unwrap_or(DEFAULT_SECONDARY_COLOR)
                .to_string(),
            text: customizations
                .text_color()
                .unwrap_or(DEFAULT_PRIMARY_COLOR)
                .to_string(),
            background: customizations
                .background_color()
                .unwrap_or(DEFAULT_BACKGROUND_COLOR)
                .to_string(),
            primary,
        };

        let fonts = FontSettings {
            family: customizations
                .font_family()
                .unwrap_or(DEFAULT_FONT_FAMILY)
                .to_string(),
            heading_size: customizations.heading_size().unwrap_or(DEFAULT_HEADING_SIZE),
            body_size: customizations.body_size().unwrap_or(DEFAULT_BODY_SIZE),
            ..Default::default()
        };

        let sections = standard_sections()
            .into_iter()
            .map(|mut section| {
                section.enabled = !customizations.is_hidden(section.kind.as_str());
                section
            })
            .collect();

        Self {
            id: format!("custom-{}", layout.as_str()),
            layout,
            colors,
            fonts,
            spacing: Spacing::default(),
            header_style: match layout {
                LayoutType::SingleColumn => HeaderStyle::Centered,
                _ => HeaderStyle::Left,
            },
            sections,
            metadata: TemplateMetadata {
                name: "Custom layout".to_string(),
                description: format!("Custom {} layout", layout.as_str()),
                category: "custom".to_string(),
                tags: Vec::new(),
                created_at,
            },
        }
    }

    /// Enabled sections in render order, minus any the customizations hide
    pub fn visible_sections<'a>(
        &'a self,
        customizations: &Customizations,
    ) -> Vec<&'a SectionConfig> {
        let mut sections: Vec<&SectionConfig> = self
            .sections
            .iter()
            .filter(|s| s.enabled && !customizations.is_hidden(s.kind.as_str()))
            .collect();
        sections.sort_by_key(|s| s.order);
        sections
    }
}
