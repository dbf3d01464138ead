use crate::render::document::{Document, PageLayout, Theme};
use crate::render::sections::{self, Composer};
use crate::templates::config::{HeaderStyle, SectionKind};
use crate::templates::registry::ResumeTemplate;
use crate::types::{Customizations, Profile};

/// CV-style ordering: education leads
pub struct Academic;

impl ResumeTemplate for Academic {
    fn id(&self) -> &'static str {
        "academic"
    }

    fn name(&self) -> &'static str {
        "Academic"
    }

    fn description(&self) -> &'static str {
        "Academic CV with education and research first"
    }

    fn render(&self, profile: &Profile, customizations: &Customizations) -> Document {
        let theme = Theme::with_palette(
            "#3b1f0e",
            "#8b5a2b",
            "#222222",
            "'Times New Roman', Times, serif",
        );

        Composer::new(profile, customizations)
            .main_with(sections::summary(profile).map(|s| s.titled("Research Interests")))
            .main(SectionKind::Education)
            .main_with(
                sections::experience(profile)
                    .map(|s| s.titled("Research & Teaching Experience")),
            )
            .main_with(sections::projects(profile).map(|s| s.titled("Publications & Projects")))
            .main_with(
                sections::certifications(profile)
                    .map(|s| s.titled("Awards & Certifications")),
            )
            .main_with(sections::skills_grouped(profile))
            .main(SectionKind::Languages)
            .finish(self.id(), theme, PageLayout::SingleColumn, HeaderStyle::Centered)
    }
}
