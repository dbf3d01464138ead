use crate::render::document::{Document, PageLayout, SidebarSide, Theme};
use crate::render::sections::{self, Composer};
use crate::templates::config::{HeaderStyle, SectionKind};
use crate::templates::registry::ResumeTemplate;
use crate::types::{Customizations, Profile};

/// Left sidebar for skills and credentials, main column for the story
pub struct TwoColumnModern;

impl ResumeTemplate for TwoColumnModern {
    fn id(&self) -> &'static str {
        "two-column-modern"
    }

    fn name(&self) -> &'static str {
        "Two Column Modern"
    }

    fn description(&self) -> &'static str {
        "Modern two-column layout with a skills sidebar"
    }

    fn category(&self) -> &'static str {
        "modern"
    }

    fn render(&self, profile: &Profile, customizations: &Customizations) -> Document {
        let theme = Theme::with_palette(
            "#0f766e",
            "#14b8a6",
            "#1f2937",
            "'Open Sans', Arial, sans-serif",
        );

        Composer::new(profile, customizations)
            .sidebar_with(sections::skills_with_levels(profile))
            .sidebar(SectionKind::Languages)
            .sidebar(SectionKind::Certifications)
            .sidebar(SectionKind::Education)
            .main(SectionKind::Summary)
            .main(SectionKind::Experience)
            .main(SectionKind::Projects)
            .finish(
                self.id(),
                theme,
                PageLayout::Columns {
                    side: SidebarSide::Left,
                    sidebar_width: 34,
                },
                HeaderStyle::Left,
            )
    }
}
