use crate::render::document::{Document, PageLayout, Theme};
use crate::render::sections::{self, Composer};
use crate::templates::config::{HeaderStyle, SectionKind};
use crate::templates::registry::ResumeTemplate;
use crate::types::{Customizations, Profile};

/// Single column, plain headings, no tags or grids: parses cleanly in applicant tracking systems
pub struct AtsFriendly;

impl ResumeTemplate for AtsFriendly {
    fn id(&self) -> &'static str {
        "ats-friendly"
    }

    fn name(&self) -> &'static str {
        "ATS Friendly"
    }

    fn description(&self) -> &'static str {
        "Plain structure optimized for applicant tracking systems"
    }

    fn category(&self) -> &'static str {
        "minimal"
    }

    fn render(&self, profile: &Profile, customizations: &Customizations) -> Document {
        let theme = Theme::with_palette(
            "#000000",
            "#000000",
            "#000000",
            "Arial, Helvetica, sans-serif",
        )
        .sizes(18.0, 11.0)
        .uppercase_headings();

        Composer::new(profile, customizations)
            .main(SectionKind::Summary)
            .main_with(sections::experience(profile).map(|s| s.titled("Work Experience")))
            .main(SectionKind::Education)
            .main_with(sections::skills_list(profile))
            .main(SectionKind::Certifications)
            .main(SectionKind::Projects)
            .main(SectionKind::Languages)
            .finish(self.id(), theme, PageLayout::SingleColumn, HeaderStyle::Left)
    }
}
