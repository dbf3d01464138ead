use crate::render::document::{Document, PageLayout, Theme};
use crate::render::sections::{self, Composer};
use crate::templates::config::{HeaderStyle, SectionKind};
use crate::templates::registry::ResumeTemplate;
use crate::types::{Customizations, Profile};

/// Traditional serif layout with centered header and small-caps style headings
pub struct Classic;

impl ResumeTemplate for Classic {
    fn id(&self) -> &'static str {
        "classic"
    }

    fn name(&self) -> &'static str {
        "Classic"
    }

    fn description(&self) -> &'static str {
        "Traditional serif resume with centered header"
    }

    fn render(&self, profile: &Profile, customizations: &Customizations) -> Document {
        let theme = Theme::with_palette(
            "#1a2a4a",
            "#4a5568",
            "#222222",
            "Georgia, 'Times New Roman', serif",
        )
        .uppercase_headings();

        Composer::new(profile, customizations)
            .main_with(sections::summary(profile).map(|s| s.titled("Professional Summary")))
            .main(SectionKind::Experience)
            .main(SectionKind::Education)
            .main_with(sections::skills_grouped(profile))
            .main(SectionKind::Certifications)
            .main(SectionKind::Projects)
            .main(SectionKind::Languages)
            .finish(self.id(), theme, PageLayout::SingleColumn, HeaderStyle::Centered)
    }
}
