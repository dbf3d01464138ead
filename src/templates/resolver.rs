// src/templates/resolver.rs
//! Picks exactly one renderable template for a resume. Never fails: unknown
//! identifiers fall back to the default template.

use std::borrow::Cow;

use crate::app_log;
use crate::render::document::Document;
use crate::render::dynamic::render_config;
use crate::render::leaf::{self, DEFAULT_TEMPLATE_ID};
use crate::templates::config::TemplateConfig;
use crate::templates::registry::{ResumeTemplate, TemplateRegistry};
use crate::templates::store::GeneratedTemplateStore;
use crate::types::{Customizations, Profile, Resume};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Synthesized from `customizations.layout`
    LayoutOverride,
    /// Found in the generated template store
    Generated,
}

pub enum ResolvedTemplate<'a> {
    Static {
        template: &'a dyn ResumeTemplate,
        /// True when the requested id matched nothing
        fallback: bool,
    },
    Configured {
        config: Cow<'a, TemplateConfig>,
        origin: ConfigOrigin,
    },
}

impl ResolvedTemplate<'_> {
    pub fn id(&self) -> &str {
        match self {
            ResolvedTemplate::Static { template, .. } => template.id(),
            ResolvedTemplate::Configured { config, .. } => &config.id,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedTemplate::Static { fallback: true, .. })
    }

    pub fn is_config_driven(&self) -> bool {
        matches!(self, ResolvedTemplate::Configured { .. })
    }

    pub fn render(&self, profile: &Profile, customizations: &Customizations) -> Document {
        match self {
            ResolvedTemplate::Static { template, .. } => template.render(profile, customizations),
            ResolvedTemplate::Configured { config, .. } => {
                render_config(config, profile, customizations)
            }
        }
    }
}

impl std::fmt::Debug for ResolvedTemplate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolvedTemplate::Static { template, fallback } => f
                .debug_struct("Static")
                .field("id", &template.id())
                .field("fallback", fallback)
                .finish(),
            ResolvedTemplate::Configured { config, origin } => f
                .debug_struct("Configured")
                .field("id", &config.id)
                .field("origin", origin)
                .finish(),
        }
    }
}

/// A rendered document plus whether the default template stood in for an unknown id
#[derive(Debug)]
pub struct Rendered {
    pub document: Document,
    pub fallback: bool,
}

pub struct TemplateResolver {
    registry: TemplateRegistry,
    store: GeneratedTemplateStore,
    default_template: Box<dyn ResumeTemplate>,
}

impl Default for TemplateResolver {
    fn default() -> Self {
        Self::new(
            TemplateRegistry::with_builtin_templates(),
            GeneratedTemplateStore::new(),
        )
    }
}

/// Lookup key for template identifiers
pub fn normalize_id(template_id: &str) -> String {
    template_id.trim().to_lowercase()
}

impl TemplateResolver {
    pub fn new(registry: TemplateRegistry, store: GeneratedTemplateStore) -> Self {
        Self {
            registry,
            store,
            default_template: Box::new(leaf::Modern),
        }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn store(&self) -> &GeneratedTemplateStore {
        &self.store
    }

    fn default_static(&self) -> &dyn ResumeTemplate {
        self.registry
            .get(DEFAULT_TEMPLATE_ID)
            .unwrap_or(self.default_template.as_ref())
    }

    /// Layout override, then static registry, then generated store, then the default
    pub fn resolve<'a>(
        &'a self,
        template_id: &str,
        customizations: Option<&Customizations>,
    ) -> ResolvedTemplate<'a> {
        if let Some(customizations) = customizations {
            if let Some(layout) = customizations.layout_override() {
                app_log!(debug, "Layout override '{}' wins over '{}'", layout, template_id);
                return ResolvedTemplate::Configured {
                    config: Cow::Owned(TemplateConfig::from_customizations(layout, customizations)),
                    origin: ConfigOrigin::LayoutOverride,
                };
            }
        }

        let key = normalize_id(template_id);

        if let Some(template) = self.registry.get(&key) {
            return ResolvedTemplate::Static {
                template,
                fallback: false,
            };
        }

        if let Some(config) = self.store.get(&key) {
            return ResolvedTemplate::Configured {
                config: Cow::Borrowed(config),
                origin: ConfigOrigin::Generated,
            };
        }

        app_log!(
            debug,
            "Unknown template '{}', falling back to '{}'",
            template_id,
            DEFAULT_TEMPLATE_ID
        );
        ResolvedTemplate::Static {
            template: self.default_static(),
            fallback: true,
        }
    }

    /// Resolve and render in one step; a missing profile renders as empty
    pub fn render(
        &self,
        template_id: &str,
        profile: Option<&Profile>,
        customizations: Option<&Customizations>,
    ) -> Document {
        self.render_tracked(template_id, profile, customizations)
            .document
    }

    /// Like `render`, but reports whether the default template was substituted
    pub fn render_tracked(
        &self,
        template_id: &str,
        profile: Option<&Profile>,
        customizations: Option<&Customizations>,
    ) -> Rendered {
        let empty_profile = Profile::default();
        let no_customizations = Customizations::default();
        let profile = profile.unwrap_or(&empty_profile);
        let customizations = customizations.unwrap_or(&no_customizations);

        let resolved = self.resolve(template_id, Some(customizations));
        Rendered {
            document: resolved.render(profile, customizations),
            fallback: resolved.is_fallback(),
        }
    }

    /// Render a resume against the live profile, or its frozen snapshot if it has one
    pub fn render_resume(&self, resume: &Resume, live_profile: Option<&Profile>) -> Rendered {
        let empty_profile = Profile::default();
        let profile = resume.effective_profile(live_profile.unwrap_or(&empty_profile));
        self.render_tracked(
            &resume.template_id,
            Some(profile),
            resume.customizations.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::config::{LayoutType, SectionKind};
    use crate::types::profile::{Experience, Project, Skill};
    use pretty_assertions::assert_eq;

    fn resolver() -> TemplateResolver {
        TemplateResolver::new(
            TemplateRegistry::with_builtin_templates(),
            GeneratedTemplateStore::generate_catalog(),
        )
    }

    fn full_profile() -> Profile {
        let mut profile = Profile {
            summary: Some("Engineer".to_string()),
            experience: vec![Experience {
                company: "Acme".to_string(),
                position: "Developer".to_string(),
                ..Default::default()
            }],
            skills: vec![Skill {
                name: "Rust".to_string(),
                ..Default::default()
            }],
            projects: vec![Project {
                name: "Compiler".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        profile.personal_info.full_name = Some("Linus".to_string());
        profile
    }

    #[test]
    fn test_static_ids_resolve_case_insensitively() {
        let resolver = resolver();
        for template in resolver.registry().list() {
            let upper = template.id().to_uppercase();
            let resolved = resolver.resolve(&upper, None);
            assert_eq!(resolved.id(), template.id());
            assert!(!resolved.is_fallback());
        }

        assert_eq!(resolver.resolve("Modern", None).id(), "modern");
        assert_eq!(resolver.resolve("  modern ", None).id(), "modern");
    }

    #[test]
    fn test_uppercase_two_column_modern() {
        let resolver = resolver();
        let customizations = Customizations::default();
        let resolved = resolver.resolve("TWO-COLUMN-MODERN", Some(&customizations));
        assert_eq!(resolved.id(), "two-column-modern");
        assert!(!resolved.is_config_driven());
    }

    #[test]
    fn test_aliases() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("Minimalist", None).id(), "minimal");
        assert_eq!(resolver.resolve("ats", None).id(), "ats-friendly");
    }

    #[test]
    fn test_unknown_id_falls_back_to_modern() {
        let resolver = resolver();
        for id in ["nonexistent-id", "", "   ", "MODERNIST"] {
            let resolved = resolver.resolve(id, None);
            assert_eq!(resolved.id(), "modern", "{:?}", id);
            assert!(resolved.is_fallback());
        }
    }

    #[test]
    fn test_render_tracked_reports_fallback() {
        let resolver = resolver();
        let rendered = resolver.render_tracked("nonexistent-id", None, None);
        assert!(rendered.fallback);
        assert_eq!(rendered.document.template_id, "modern");

        let rendered = resolver.render_tracked("Classic", None, None);
        assert!(!rendered.fallback);
        assert_eq!(rendered.document.template_id, "classic");
    }

    #[test]
    fn test_fallback_survives_empty_registry() {
        let resolver =
            TemplateResolver::new(TemplateRegistry::empty(), GeneratedTemplateStore::new());
        let doc = resolver.render("anything", None, None);
        assert_eq!(doc.template_id, "modern");
    }

    #[test]
    fn test_generated_store_lookup() {
        let resolver = resolver();
        let resolved = resolver.resolve("Ocean-Sidebar-Left-Serif", None);
        assert!(matches!(
            resolved,
            ResolvedTemplate::Configured {
                origin: ConfigOrigin::Generated,
                ..
            }
        ));
        assert_eq!(resolved.id(), "ocean-sidebar-left-serif");
    }

    #[test]
    fn test_static_registry_checked_before_store() {
        let mut store = GeneratedTemplateStore::new();
        let mut shadow =
            TemplateConfig::from_customizations("two-column", &Customizations::default());
        shadow.id = "classic".to_string();
        store.insert(shadow);

        let resolver = TemplateResolver::new(TemplateRegistry::with_builtin_templates(), store);
        assert!(!resolver.resolve("classic", None).is_config_driven());
    }

    #[test]
    fn test_layout_override_always_wins() {
        let resolver = resolver();
        let customizations = Customizations {
            layout: Some("two-column".to_string()),
            ..Default::default()
        };

        for id in ["modern", "ocean-sidebar-left-serif", "nonexistent-id"] {
            match resolver.resolve(id, Some(&customizations)) {
                ResolvedTemplate::Configured { config, origin } => {
                    assert_eq!(origin, ConfigOrigin::LayoutOverride);
                    assert_eq!(config.layout, LayoutType::TwoColumn);
                }
                other => panic!("expected layout override for {}, got {:?}", id, other),
            }
        }
    }

    #[test]
    fn test_layout_override_with_hidden_projects() {
        let customizations = Customizations {
            layout: Some("single-column".to_string()),
            hidden_sections: vec!["projects".to_string()],
            ..Default::default()
        };

        let doc = resolver().render("modern", Some(&full_profile()), Some(&customizations));
        assert_eq!(doc.template_id, "custom-single-column");
        assert!(!doc.has_section(SectionKind::Projects));
        assert!(doc.has_section(SectionKind::Experience));
        assert!(!doc.to_html().contains("Compiler"));
    }

    #[test]
    fn test_none_profile_renders_every_kind_of_template() {
        let resolver = resolver();
        for id in ["modern", "creative", "royal-two-column-sans", "nope"] {
            let doc = resolver.render(id, None, None);
            assert!(doc.section_kinds().is_empty(), "{}", id);
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let resolver = resolver();
        let customizations = Customizations {
            layout: Some("sidebar-right".to_string()),
            ..Default::default()
        };
        let first = resolver.render("modern", Some(&full_profile()), Some(&customizations));
        let second = resolver.render("modern", Some(&full_profile()), Some(&customizations));
        assert_eq!(first.to_html(), second.to_html());
    }

    #[test]
    fn test_render_resume_uses_frozen_content() {
        let resolver = resolver();
        let mut live = full_profile();

        let mut resume = Resume::new("CV", "classic");
        resume.freeze_content(&live);
        live.personal_info.full_name = Some("Someone Else".to_string());

        let rendered = resolver.render_resume(&resume, Some(&live));
        assert!(!rendered.fallback);
        assert_eq!(rendered.document.template_id, "classic");
        assert_eq!(rendered.document.header.name, "Linus");
    }
}
