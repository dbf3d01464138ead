use crate::render::document::{Document, PageLayout, Theme};
use crate::render::sections::{self, Composer};
use crate::templates::config::{HeaderStyle, SectionKind};
use crate::templates::registry::ResumeTemplate;
use crate::types::{Customizations, Profile};

pub struct Elegant;

impl ResumeTemplate for Elegant {
    fn id(&self) -> &'static str {
        "elegant"
    }

    fn name(&self) -> &'static str {
        "Elegant"
    }

    fn description(&self) -> &'static str {
        "Refined serif headings with muted accents"
    }

    fn category(&self) -> &'static str {
        "creative"
    }

    fn render(&self, profile: &Profile, customizations: &Customizations) -> Document {
        let theme = Theme::with_palette(
            "#4a1d3a",
            "#9d174d",
            "#2b2b2b",
            "Lato, 'Helvetica Neue', sans-serif",
        )
        .heading_font("'Playfair Display', Georgia, serif")
        .spacing(16.0, 9.0, 42.0)
        .uppercase_headings();

        Composer::new(profile, customizations)
            .main(SectionKind::Summary)
            .main(SectionKind::Experience)
            .main(SectionKind::Education)
            .main_with(sections::skills_with_levels(profile))
            .main(SectionKind::Projects)
            .main(SectionKind::Certifications)
            .main(SectionKind::Languages)
            .finish(self.id(), theme, PageLayout::SingleColumn, HeaderStyle::Centered)
    }
}
