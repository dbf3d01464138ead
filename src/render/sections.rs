// src/render/sections.rs
//! Builders turning profile data into document sections.
//!
//! Every builder returns `None` when the profile has nothing to show, so a
//! template never has to special-case empty arrays.

use crate::render::document::{Block, Document, Entry, Header, PageLayout, Section, Theme};
use crate::templates::config::{HeaderStyle, SectionKind};
use crate::types::profile::{non_blank, Profile};
use crate::types::Customizations;

fn non_empty(section: Section) -> Option<Section> {
    if section.is_empty() {
        None
    } else {
        Some(section)
    }
}

fn clean_lines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_present(parts: &[Option<&str>], separator: &str) -> Option<String> {
    let present: Vec<&str> = parts.iter().flatten().copied().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(separator))
    }
}

impl Section {
    pub fn titled(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }
}

/// Default rendering for a section kind
pub fn standard(kind: SectionKind, profile: &Profile) -> Option<Section> {
    match kind {
        SectionKind::Summary => summary(profile),
        SectionKind::Experience => experience(profile),
        SectionKind::Education => education(profile),
        SectionKind::Skills => skills_tags(profile),
        SectionKind::Projects => projects(profile),
        SectionKind::Certifications => certifications(profile),
        SectionKind::Languages => languages(profile),
    }
}

pub fn summary(profile: &Profile) -> Option<Section> {
    let text = profile.summary_text()?;
    let mut section = Section::new(SectionKind::Summary, "Summary");
    section.blocks.push(Block::Paragraph(text.to_string()));
    Some(section)
}

pub fn experience(profile: &Profile) -> Option<Section> {
    experience_condensed(profile, usize::MAX)
}

/// Experience with at most `max_bullets` highlights per role
pub fn experience_condensed(profile: &Profile, max_bullets: usize) -> Option<Section> {
    let mut section = Section::new(SectionKind::Experience, "Experience");

    for job in &profile.experience {
        let position = job.position.trim();
        let company = job.company.trim();
        if position.is_empty() && company.is_empty() {
            continue;
        }

        let (heading, subheading) = match (position.is_empty(), company.is_empty()) {
            (false, false) => (position.to_string(), Some(company.to_string())),
            (false, true) => (position.to_string(), None),
            _ => (company.to_string(), None),
        };

        let mut bullets = clean_lines(&job.highlights);
        bullets.truncate(max_bullets);
        if !job.technologies.is_empty() && max_bullets == usize::MAX {
            let technologies = clean_lines(&job.technologies);
            if !technologies.is_empty() {
                bullets.push(format!("Technologies: {}", technologies.join(", ")));
            }
        }

        section.blocks.push(Block::Entry(Entry {
            heading,
            subheading,
            meta: join_present(
                &[job.date_range().as_deref(), non_blank(&job.location)],
                " | ",
            ),
            description: non_blank(&job.description).map(str::to_string),
            bullets,
        }));
    }

    non_empty(section)
}

pub fn education(profile: &Profile) -> Option<Section> {
    let mut section = Section::new(SectionKind::Education, "Education");

    for edu in &profile.education {
        let qualification = edu.qualification();
        let institution = edu.institution.trim();
        if qualification.is_empty() && institution.is_empty() {
            continue;
        }

        let heading = if qualification.is_empty() {
            institution.to_string()
        } else {
            qualification
        };
        let subheading = (!institution.is_empty() && heading != institution)
            .then(|| institution.to_string());

        let mut bullets = clean_lines(&edu.honors);
        if let Some(gpa) = non_blank(&edu.gpa) {
            bullets.insert(0, format!("GPA: {}", gpa));
        }

        section.blocks.push(Block::Entry(Entry {
            heading,
            subheading,
            meta: join_present(
                &[edu.date_range().as_deref(), non_blank(&edu.location)],
                " | ",
            ),
            description: None,
            bullets,
        }));
    }

    non_empty(section)
}

fn skill_names(profile: &Profile) -> Vec<String> {
    profile
        .skills
        .iter()
        .map(|s| s.name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn skills_tags(profile: &Profile) -> Option<Section> {
    let names = skill_names(profile);
    if names.is_empty() {
        return None;
    }
    let mut section = Section::new(SectionKind::Skills, "Skills");
    section.blocks.push(Block::Tags(names));
    Some(section)
}

/// One comma-joined line per category
pub fn skills_grouped(profile: &Profile) -> Option<Section> {
    let mut section = Section::new(SectionKind::Skills, "Skills");
    let rows: Vec<(String, String)> = profile
        .skills_by_category()
        .into_iter()
        .map(|(category, skills)| {
            let names: Vec<&str> = skills.iter().map(|s| s.name.trim()).collect();
            (
                category.unwrap_or_else(|| "General".to_string()),
                names.join(", "),
            )
        })
        .collect();

    if !rows.is_empty() {
        section.blocks.push(Block::Pairs(rows));
    }
    non_empty(section)
}

/// Skill name with its level where one is given
pub fn skills_with_levels(profile: &Profile) -> Option<Section> {
    let rows: Vec<(String, String)> = profile
        .skills
        .iter()
        .filter(|s| !s.name.trim().is_empty())
        .map(|s| {
            (
                s.name.trim().to_string(),
                non_blank(&s.level).unwrap_or_default().to_string(),
            )
        })
        .collect();

    if rows.is_empty() {
        return None;
    }
    let mut section = Section::new(SectionKind::Skills, "Skills");
    section.blocks.push(Block::Pairs(rows));
    Some(section)
}

/// Plain comma-separated list, the safest form for ATS parsers
pub fn skills_plain(profile: &Profile) -> Option<Section> {
    let names = skill_names(profile);
    if names.is_empty() {
        return None;
    }
    let mut section = Section::new(SectionKind::Skills, "Skills");
    section.blocks.push(Block::Paragraph(names.join(", ")));
    Some(section)
}

/// One skill per line, for layouts that avoid inline tags
pub fn skills_list(profile: &Profile) -> Option<Section> {
    let names = skill_names(profile);
    if names.is_empty() {
        return None;
    }
    let mut section = Section::new(SectionKind::Skills, "Skills");
    section.blocks.push(Block::Bullets(names));
    Some(section)
}

pub fn projects(profile: &Profile) -> Option<Section> {
    let mut section = Section::new(SectionKind::Projects, "Projects");

    for project in &profile.projects {
        let name = project.name.trim();
        if name.is_empty() {
            continue;
        }

        let mut bullets = clean_lines(&project.highlights);
        let technologies = clean_lines(&project.technologies);
        if !technologies.is_empty() {
            bullets.push(format!("Built with: {}", technologies.join(", ")));
        }

        section.blocks.push(Block::Entry(Entry {
            heading: name.to_string(),
            subheading: non_blank(&project.url).map(str::to_string),
            meta: project.date_range(),
            description: non_blank(&project.description).map(str::to_string),
            bullets,
        }));
    }

    non_empty(section)
}

pub fn certifications(profile: &Profile) -> Option<Section> {
    let mut section = Section::new(SectionKind::Certifications, "Certifications");

    for cert in &profile.certifications {
        let name = cert.name.trim();
        if name.is_empty() {
            continue;
        }

        let expiry = non_blank(&cert.expiry_date).map(|d| format!("expires {}", d));
        section.blocks.push(Block::Entry(Entry {
            heading: name.to_string(),
            subheading: non_blank(&cert.issuer).map(str::to_string),
            meta: join_present(&[non_blank(&cert.date), expiry.as_deref()], ", "),
            description: non_blank(&cert.credential_id).map(|id| format!("Credential ID {}", id)),
            bullets: Vec::new(),
        }));
    }

    non_empty(section)
}

pub fn languages(profile: &Profile) -> Option<Section> {
    let rows: Vec<(String, String)> = profile
        .languages
        .iter()
        .filter(|l| !l.name.trim().is_empty())
        .map(|l| {
            (
                l.name.trim().to_string(),
                non_blank(&l.proficiency).unwrap_or_default().to_string(),
            )
        })
        .collect();

    if rows.is_empty() {
        return None;
    }
    let mut section = Section::new(SectionKind::Languages, "Languages");
    section.blocks.push(Block::Pairs(rows));
    Some(section)
}

pub fn header(profile: &Profile, style: HeaderStyle) -> Header {
    Header {
        name: profile.display_name().to_string(),
        headline: profile.headline().map(str::to_string),
        contact: profile.contact_items(),
        style,
    }
}

// ===== Composer =====

/// Collects sections for a template, dropping empty and hidden ones
pub struct Composer<'a> {
    profile: &'a Profile,
    customizations: &'a Customizations,
    main: Vec<Section>,
    sidebar: Vec<Section>,
}

impl<'a> Composer<'a> {
    pub fn new(profile: &'a Profile, customizations: &'a Customizations) -> Self {
        Self {
            profile,
            customizations,
            main: Vec::new(),
            sidebar: Vec::new(),
        }
    }

    fn accept(&self, section: Option<Section>) -> Option<Section> {
        section.filter(|s| !s.is_empty() && !self.customizations.is_hidden(s.kind.as_str()))
    }

    /// Standard rendering of `kind` in the main column
    pub fn main(self, kind: SectionKind) -> Self {
        let section = standard(kind, self.profile);
        self.main_with(section)
    }

    pub fn main_with(mut self, section: Option<Section>) -> Self {
        if let Some(section) = self.accept(section) {
            self.main.push(section);
        }
        self
    }

    pub fn sidebar(self, kind: SectionKind) -> Self {
        let section = standard(kind, self.profile);
        self.sidebar_with(section)
    }

    pub fn sidebar_with(mut self, section: Option<Section>) -> Self {
        if let Some(section) = self.accept(section) {
            self.sidebar.push(section);
        }
        self
    }

    pub fn profile(&self) -> &'a Profile {
        self.profile
    }

    pub fn finish(
        self,
        template_id: &str,
        theme: Theme,
        layout: PageLayout,
        header_style: HeaderStyle,
    ) -> Document {
        // A column layout with an empty sidebar collapses to one column
        let (layout, main) = match layout {
            PageLayout::Columns { .. } if self.sidebar.is_empty() => {
                (PageLayout::SingleColumn, self.main)
            }
            layout => (layout, self.main),
        };

        Document {
            title: format!("{} - Resume", self.profile.display_name()),
            template_id: template_id.to_string(),
            theme: theme.customized(self.customizations),
            layout,
            header: header(self.profile, header_style),
            main,
            sidebar: self.sidebar,
        }
    }
}
