use crate::render::document::{Document, PageLayout, Theme};
use crate::render::sections::{self, Composer};
use crate::templates::config::{HeaderStyle, SectionKind};
use crate::templates::registry::ResumeTemplate;
use crate::types::{Customizations, Profile};

pub struct Professional;

impl ResumeTemplate for Professional {
    fn id(&self) -> &'static str {
        "professional"
    }

    fn name(&self) -> &'static str {
        "Professional"
    }

    fn description(&self) -> &'static str {
        "Corporate layout with a colored banner header"
    }

    fn render(&self, profile: &Profile, customizations: &Customizations) -> Document {
        let theme = Theme::with_palette(
            "#0f4c81",
            "#5b7fa3",
            "#1f2933",
            "Calibri, 'Segoe UI', sans-serif",
        );

        Composer::new(profile, customizations)
            .main(SectionKind::Summary)
            .main_with(sections::skills_grouped(profile).map(|s| s.titled("Core Competencies")))
            .main_with(sections::experience(profile).map(|s| s.titled("Professional Experience")))
            .main(SectionKind::Education)
            .main(SectionKind::Certifications)
            .main(SectionKind::Projects)
            .main(SectionKind::Languages)
            .finish(self.id(), theme, PageLayout::SingleColumn, HeaderStyle::Banner)
    }
}
