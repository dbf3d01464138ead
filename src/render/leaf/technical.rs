use crate::render::document::{Document, PageLayout, SidebarSide, Theme};
use crate::render::sections::{self, Composer};
use crate::templates::config::{HeaderStyle, SectionKind};
use crate::templates::registry::ResumeTemplate;
use crate::types::{Customizations, Profile};

pub struct Technical;

impl ResumeTemplate for Technical {
    fn id(&self) -> &'static str {
        "technical"
    }

    fn name(&self) -> &'static str {
        "Technical"
    }

    fn description(&self) -> &'static str {
        "Engineering layout with a tech-stack sidebar"
    }

    fn category(&self) -> &'static str {
        "modern"
    }

    fn render(&self, profile: &Profile, customizations: &Customizations) -> Document {
        let theme = Theme::with_palette(
            "#0b3d2e",
            "#16a34a",
            "#1c1c1c",
            "'IBM Plex Sans', Arial, sans-serif",
        )
        .heading_font("'JetBrains Mono', Consolas, monospace");

        Composer::new(profile, customizations)
            .sidebar_with(sections::skills_grouped(profile).map(|s| s.titled("Tech Stack")))
            .sidebar(SectionKind::Certifications)
            .sidebar(SectionKind::Languages)
            .main(SectionKind::Summary)
            .main(SectionKind::Experience)
            .main_with(sections::projects(profile).map(|s| s.titled("Open Source & Projects")))
            .main(SectionKind::Education)
            .finish(
                self.id(),
                theme,
                PageLayout::Columns {
                    side: SidebarSide::Left,
                    sidebar_width: 30,
                },
                HeaderStyle::Left,
            )
    }
}
