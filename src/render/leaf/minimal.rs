use crate::render::document::{Document, PageLayout, Theme};
use crate::render::sections::{self, Composer};
use crate::templates::config::{HeaderStyle, SectionKind};
use crate::templates::registry::ResumeTemplate;
use crate::types::{Customizations, Profile};

pub struct Minimal;

impl ResumeTemplate for Minimal {
    fn id(&self) -> &'static str {
        "minimal"
    }

    fn name(&self) -> &'static str {
        "Minimal"
    }

    fn description(&self) -> &'static str {
        "Monochrome layout with generous white space"
    }

    fn category(&self) -> &'static str {
        "minimal"
    }

    fn render(&self, profile: &Profile, customizations: &Customizations) -> Document {
        let theme = Theme::with_palette(
            "#111111",
            "#6b7280",
            "#111111",
            "'Helvetica Neue', Arial, sans-serif",
        )
        .sizes(22.0, 10.5)
        .spacing(18.0, 10.0, 48.0);

        Composer::new(profile, customizations)
            .main(SectionKind::Summary)
            .main_with(sections::experience_condensed(profile, 3))
            .main(SectionKind::Education)
            .main_with(sections::skills_plain(profile))
            .main(SectionKind::Projects)
            .main(SectionKind::Certifications)
            .main(SectionKind::Languages)
            .finish(self.id(), theme, PageLayout::SingleColumn, HeaderStyle::Centered)
    }
}
