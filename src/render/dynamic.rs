// src/render/dynamic.rs
//! Generic renderer driven by a [`TemplateConfig`]

use crate::render::document::{Document, PageLayout, SidebarSide, Theme};
use crate::render::sections::{self, Composer};
use crate::templates::config::{LayoutType, SectionKind, TemplateConfig};
use crate::types::{Customizations, Profile};

/// Sections that move to the side column in multi-column layouts
fn belongs_in_sidebar(layout: LayoutType, kind: SectionKind) -> bool {
    match layout {
        LayoutType::SingleColumn => false,
        LayoutType::TwoColumn => matches!(
            kind,
            SectionKind::Education
                | SectionKind::Skills
                | SectionKind::Certifications
                | SectionKind::Languages
        ),
        LayoutType::SidebarLeft | LayoutType::SidebarRight => matches!(
            kind,
            SectionKind::Skills | SectionKind::Languages | SectionKind::Certifications
        ),
    }
}

fn page_layout(layout: LayoutType) -> PageLayout {
    match layout {
        LayoutType::SingleColumn => PageLayout::SingleColumn,
        LayoutType::TwoColumn => PageLayout::Columns {
            side: SidebarSide::Right,
            sidebar_width: 40,
        },
        LayoutType::SidebarLeft => PageLayout::Columns {
            side: SidebarSide::Left,
            sidebar_width: 32,
        },
        LayoutType::SidebarRight => PageLayout::Columns {
            side: SidebarSide::Right,
            sidebar_width: 32,
        },
    }
}

/// Render `profile` by walking the config's enabled sections in `order`.
///
/// Disabled, hidden and empty sections are skipped; no section depends on another.
pub fn render_config(
    config: &TemplateConfig,
    profile: &Profile,
    customizations: &Customizations,
) -> Document {
    let mut composer = Composer::new(profile, customizations);

    for section_config in config.visible_sections(customizations) {
        let kind = section_config.kind;
        let in_sidebar = belongs_in_sidebar(config.layout, kind);

        let section = match kind {
            SectionKind::Skills if in_sidebar => sections::skills_with_levels(profile),
            _ => sections::standard(kind, profile),
        }
        .map(|s| s.titled(section_config.display_title()));

        composer = if in_sidebar {
            composer.sidebar_with(section)
        } else {
            composer.main_with(section)
        };
    }

    let theme = Theme::new(&config.colors, &config.fonts, &config.spacing);
    composer.finish(
        &config.id,
        theme,
        page_layout(config.layout),
        config.header_style,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::profile::{Education, Experience, Project, Skill};
    use pretty_assertions::assert_eq;

    fn full_profile() -> Profile {
        let mut profile = Profile {
            summary: Some("Systems engineer".to_string()),
            experience: vec![Experience {
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                ..Default::default()
            }],
            education: vec![Education {
                institution: "MIT".to_string(),
                degree: "BSc".to_string(),
                ..Default::default()
            }],
            skills: vec![Skill {
                name: "Rust".to_string(),
                level: Some("Expert".to_string()),
                ..Default::default()
            }],
            projects: vec![Project {
                name: "resume-studio".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        profile.personal_info.full_name = Some("Ada".to_string());
        profile
    }

    #[test]
    fn test_single_column_renders_all_present_sections_in_order() {
        let customizations = Customizations::default();
        let config = TemplateConfig::from_customizations("single-column", &customizations);

        let doc = render_config(&config, &full_profile(), &customizations);
        assert_eq!(
            doc.section_kinds(),
            vec![
                SectionKind::Summary,
                SectionKind::Experience,
                SectionKind::Education,
                SectionKind::Skills,
                SectionKind::Projects,
            ]
        );
        assert_eq!(doc.layout, PageLayout::SingleColumn);
        assert_eq!(doc.template_id, "custom-single-column");
    }

    #[test]
    fn test_hidden_sections_are_excluded() {
        let customizations = Customizations {
            hidden_sections: vec!["projects".to_string()],
            ..Default::default()
        };
        let config = TemplateConfig::from_customizations("single-column", &customizations);

        let doc = render_config(&config, &full_profile(), &customizations);
        assert!(!doc.has_section(SectionKind::Projects));
        assert!(!doc.to_html().contains("section-projects"));
    }

    #[test]
    fn test_hidden_list_applies_to_stored_configs_too() {
        let config = TemplateConfig::from_customizations("two-column", &Customizations::default());
        let customizations = Customizations {
            hidden_sections: vec!["Skills".to_string()],
            ..Default::default()
        };

        let doc = render_config(&config, &full_profile(), &customizations);
        assert!(!doc.has_section(SectionKind::Skills));
        assert!(doc.has_section(SectionKind::Education));
    }

    #[test]
    fn test_two_column_splits_sections() {
        let customizations = Customizations::default();
        let config = TemplateConfig::from_customizations("two-column", &customizations);

        let doc = render_config(&config, &full_profile(), &customizations);
        let sidebar: Vec<SectionKind> = doc.sidebar.iter().map(|s| s.kind).collect();
        assert_eq!(sidebar, vec![SectionKind::Education, SectionKind::Skills]);
        assert!(matches!(doc.layout, PageLayout::Columns { .. }));
    }

    #[test]
    fn test_custom_section_titles() {
        let customizations = Customizations::default();
        let mut config = TemplateConfig::from_customizations("single-column", &customizations);
        config.sections[0].title = Some("Profile".to_string());

        let doc = render_config(&config, &full_profile(), &customizations);
        assert_eq!(doc.main[0].title, "Profile");
    }

    #[test]
    fn test_empty_profile_renders_header_only() {
        let customizations = Customizations::default();
        let config = TemplateConfig::from_customizations("sidebar-left", &customizations);

        let doc = render_config(&config, &Profile::default(), &customizations);
        assert!(doc.section_kinds().is_empty());
        assert_eq!(doc.header.name, "Your Name");
        assert!(doc.to_html().contains("Your Name"));
    }
}
