use crate::render::document::{Document, PageLayout, SidebarSide, Theme};
use crate::render::sections::{self, Composer};
use crate::templates::config::{HeaderStyle, SectionKind};
use crate::templates::registry::ResumeTemplate;
use crate::types::{Customizations, Profile};

/// Portfolio-first layout: projects ahead of employment history
pub struct Creative;

impl ResumeTemplate for Creative {
    fn id(&self) -> &'static str {
        "creative"
    }

    fn name(&self) -> &'static str {
        "Creative"
    }

    fn description(&self) -> &'static str {
        "Bold colors with projects up front"
    }

    fn category(&self) -> &'static str {
        "creative"
    }

    fn render(&self, profile: &Profile, customizations: &Customizations) -> Document {
        let theme = Theme::with_palette(
            "#7c3aed",
            "#ec4899",
            "#1f1f2e",
            "Poppins, 'Helvetica Neue', sans-serif",
        )
        .sizes(26.0, 10.5);

        Composer::new(profile, customizations)
            .main_with(sections::summary(profile).map(|s| s.titled("About Me")))
            .main_with(sections::projects(profile).map(|s| s.titled("Selected Work")))
            .main(SectionKind::Experience)
            .main(SectionKind::Education)
            .sidebar(SectionKind::Skills)
            .sidebar(SectionKind::Languages)
            .sidebar(SectionKind::Certifications)
            .finish(
                self.id(),
                theme,
                PageLayout::Columns {
                    side: SidebarSide::Right,
                    sidebar_width: 35,
                },
                HeaderStyle::Banner,
            )
    }
}
