use crate::render::document::{Document, PageLayout, Theme};
use crate::render::sections::{self, Composer};
use crate::templates::config::{HeaderStyle, SectionKind};
use crate::templates::registry::ResumeTemplate;
use crate::types::{Customizations, Profile};

pub struct Executive;

impl ResumeTemplate for Executive {
    fn id(&self) -> &'static str {
        "executive"
    }

    fn name(&self) -> &'static str {
        "Executive"
    }

    fn description(&self) -> &'static str {
        "Senior leadership layout, achievements first"
    }

    fn render(&self, profile: &Profile, customizations: &Customizations) -> Document {
        let theme = Theme::with_palette(
            "#2d2d2d",
            "#b8860b",
            "#2d2d2d",
            "'Source Sans Pro', Arial, sans-serif",
        )
        .heading_font("Garamond, Georgia, serif")
        .sizes(24.0, 11.0);

        Composer::new(profile, customizations)
            .main_with(sections::summary(profile).map(|s| s.titled("Executive Profile")))
            .main_with(sections::skills_grouped(profile).map(|s| s.titled("Areas of Expertise")))
            .main_with(
                sections::experience_condensed(profile, 4)
                    .map(|s| s.titled("Leadership Experience")),
            )
            .main(SectionKind::Education)
            .main(SectionKind::Certifications)
            .main(SectionKind::Languages)
            .main(SectionKind::Projects)
            .finish(self.id(), theme, PageLayout::SingleColumn, HeaderStyle::Split)
    }
}
