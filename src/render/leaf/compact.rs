use crate::render::document::{Document, PageLayout, SidebarSide, Theme};
use crate::render::sections::{self, Composer};
use crate::templates::config::{HeaderStyle, SectionKind};
use crate::templates::registry::ResumeTemplate;
use crate::types::{Customizations, Profile};

/// Dense one-page layout for long careers
pub struct Compact;

impl ResumeTemplate for Compact {
    fn id(&self) -> &'static str {
        "compact"
    }

    fn name(&self) -> &'static str {
        "Compact"
    }

    fn description(&self) -> &'static str {
        "Dense layout that fits more on one page"
    }

    fn category(&self) -> &'static str {
        "minimal"
    }

    fn render(&self, profile: &Profile, customizations: &Customizations) -> Document {
        let theme = Theme::with_palette(
            "#1f2937",
            "#2563eb",
            "#111827",
            "Roboto, Arial, sans-serif",
        )
        .sizes(16.0, 9.5)
        .spacing(8.0, 4.0, 24.0);

        Composer::new(profile, customizations)
            .main(SectionKind::Summary)
            .main_with(sections::experience_condensed(profile, 2))
            .main(SectionKind::Education)
            .main(SectionKind::Projects)
            .sidebar_with(sections::skills_plain(profile))
            .sidebar(SectionKind::Languages)
            .sidebar(SectionKind::Certifications)
            .finish(
                self.id(),
                theme,
                PageLayout::Columns {
                    side: SidebarSide::Right,
                    sidebar_width: 30,
                },
                HeaderStyle::Split,
            )
    }
}
