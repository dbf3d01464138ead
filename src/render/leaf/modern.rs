use crate::render::document::{Document, PageLayout, Theme};
use crate::render::sections::Composer;
use crate::templates::config::{HeaderStyle, SectionKind};
use crate::templates::registry::ResumeTemplate;
use crate::types::{Customizations, Profile};

/// Default template: clean single column with a slate/blue palette
pub struct Modern;

impl ResumeTemplate for Modern {
    fn id(&self) -> &'static str {
        "modern"
    }

    fn name(&self) -> &'static str {
        "Modern"
    }

    fn description(&self) -> &'static str {
        "Clean single-column layout with blue accents"
    }

    fn category(&self) -> &'static str {
        "modern"
    }

    fn render(&self, profile: &Profile, customizations: &Customizations) -> Document {
        let theme = Theme::with_palette(
            "#1e293b",
            "#3b82f6",
            "#1f2937",
            "Inter, Helvetica, sans-serif",
        );

        Composer::new(profile, customizations)
            .main(SectionKind::Summary)
            .main(SectionKind::Experience)
            .main(SectionKind::Projects)
            .main(SectionKind::Education)
            .main(SectionKind::Skills)
            .main(SectionKind::Certifications)
            .main(SectionKind::Languages)
            .finish(self.id(), theme, PageLayout::SingleColumn, HeaderStyle::Left)
    }
}
