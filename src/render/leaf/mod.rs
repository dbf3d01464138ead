//! Built-in static templates

mod academic;
mod ats_friendly;
mod classic;
mod compact;
mod creative;
mod elegant;
mod executive;
mod minimal;
mod modern;
mod professional;
mod technical;
mod two_column_modern;

pub use academic::Academic;
pub use ats_friendly::AtsFriendly;
pub use classic::Classic;
pub use compact::Compact;
pub use creative::Creative;
pub use elegant::Elegant;
pub use executive::Executive;
pub use minimal::Minimal;
pub use modern::Modern;
pub use professional::Professional;
pub use technical::Technical;
pub use two_column_modern::TwoColumnModern;

use crate::templates::registry::ResumeTemplate;

/// Identifier of the template used when nothing else matches
pub const DEFAULT_TEMPLATE_ID: &str = "modern";

/// Alternative names accepted for built-in templates
pub const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("minimalist", "minimal"),
    ("traditional", "classic"),
    ("corporate", "professional"),
    ("ats", "ats-friendly"),
    ("two-column", "two-column-modern"),
    ("default", "modern"),
];

pub fn builtin_templates() -> Vec<Box<dyn ResumeTemplate>> {
    vec![
        Box::new(Modern),
        Box::new(Minimal),
        Box::new(Classic),
        Box::new(Professional),
        Box::new(TwoColumnModern),
        Box::new(Executive),
        Box::new(Creative),
        Box::new(Compact),
        Box::new(AtsFriendly),
        Box::new(Technical),
        Box::new(Academic),
        Box::new(Elegant),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::config::SectionKind;
    use crate::types::profile::{
        Certification, Education, Experience, Language, Project, Skill,
    };
    use crate::types::resume::ColorOverrides;
    use crate::types::{Customizations, Profile};

    fn full_profile() -> Profile {
        let mut profile = Profile {
            summary: Some("Backend engineer focused on reliability".to_string()),
            experience: vec![Experience {
                company: "Acme".to_string(),
                position: "Staff Engineer".to_string(),
                start_date: Some("2019".to_string()),
                current: true,
                highlights: vec!["Cut p99 latency by 40%".to_string()],
                ..Default::default()
            }],
            education: vec![Education {
                institution: "ETH Zurich".to_string(),
                degree: "MSc".to_string(),
                field: Some("Computer Science".to_string()),
                ..Default::default()
            }],
            skills: vec![Skill {
                name: "Rust".to_string(),
                level: Some("Expert".to_string()),
                category: Some("Languages".to_string()),
            }],
            projects: vec![Project {
                name: "tracing-lite".to_string(),
                description: Some("Structured logging".to_string()),
                ..Default::default()
            }],
            certifications: vec![Certification {
                name: "CKA".to_string(),
                ..Default::default()
            }],
            languages: vec![Language {
                name: "English".to_string(),
                proficiency: Some("Fluent".to_string()),
            }],
            ..Default::default()
        };
        profile.personal_info.full_name = Some("Grace Hopper".to_string());
        profile.contact.email = Some("grace@example.com".to_string());
        profile
    }

    #[test]
    fn test_every_template_handles_empty_profile() {
        let empty = Profile::default();
        let customizations = Customizations::default();

        for template in builtin_templates() {
            let doc = template.render(&empty, &customizations);
            assert!(doc.section_kinds().is_empty(), "{}", template.id());
            assert_eq!(doc.template_id, template.id());
            assert!(doc.to_html().contains("Your Name"));
        }
    }

    #[test]
    fn test_every_template_renders_all_sections_of_full_profile() {
        let profile = full_profile();
        let customizations = Customizations::default();

        for template in builtin_templates() {
            let doc = template.render(&profile, &customizations);
            for kind in SectionKind::ALL {
                assert!(doc.has_section(kind), "{} lacks {:?}", template.id(), kind);
            }
            let html = doc.to_html();
            assert!(html.contains("Grace Hopper"), "{}", template.id());
            assert!(html.contains("Staff Engineer"), "{}", template.id());
        }
    }

    #[test]
    fn test_every_template_honors_hidden_sections() {
        let profile = full_profile();
        let customizations = Customizations {
            hidden_sections: vec!["projects".to_string(), "summary".to_string()],
            ..Default::default()
        };

        for template in builtin_templates() {
            let doc = template.render(&profile, &customizations);
            assert!(!doc.has_section(SectionKind::Projects), "{}", template.id());
            assert!(!doc.has_section(SectionKind::Summary), "{}", template.id());
            assert!(doc.has_section(SectionKind::Experience), "{}", template.id());
        }
    }

    #[test]
    fn test_color_overrides_reach_the_theme() {
        let customizations = Customizations {
            colors: Some(ColorOverrides {
                primary: Some("#ff0000".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        for template in builtin_templates() {
            let doc = template.render(&full_profile(), &customizations);
            assert_eq!(doc.theme.primary_color, "#ff0000", "{}", template.id());
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = builtin_templates().iter().map(|t| t.id()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
