use anyhow::Result;

pub mod cli;
pub mod core;
pub mod render;
pub mod templates;
pub mod types;
pub mod utils;
pub mod web;

pub use web::start_web_server;

#[doc(hidden)]
pub use tracing as __tracing;

/// Crate-wide logging macro: `app_log!(info, "...", args)`
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        $crate::__tracing::$level!($($arg)+)
    };
}

use crate::core::ConfigManager;
use crate::templates::{GeneratedTemplateStore, TemplateRegistry, TemplateResolver};

/// Build the resolver: built-in registry plus the generated store from disk.
/// When the store directory is empty and seeding is enabled, the built-in catalog is used.
pub fn build_resolver(config: &ConfigManager) -> Result<TemplateResolver> {
    let mut store =
        GeneratedTemplateStore::load_dir(&config.environment.generated_templates_path)?;

    if store.is_empty() && config.environment.seed_catalog {
        app_log!(
            info,
            "No generated templates on disk, seeding the built-in catalog"
        );
        store.merge(GeneratedTemplateStore::generate_catalog());
    }

    Ok(TemplateResolver::new(
        TemplateRegistry::with_builtin_templates(),
        store,
    ))
}

/// Convenience function for one-shot rendering to HTML
pub fn render_html(
    template_id: &str,
    profile: Option<&types::Profile>,
    customizations: Option<&types::Customizations>,
) -> String {
    TemplateResolver::default()
        .render(template_id, profile, customizations)
        .to_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_resolver_seeds_catalog_when_dir_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ConfigManager::load_from(None, "local").unwrap();
        config.environment.generated_templates_path = dir.path().to_path_buf();

        let resolver = build_resolver(&config).unwrap();
        assert!(!resolver.store().is_empty());

        config.environment.seed_catalog = false;
        let resolver = build_resolver(&config).unwrap();
        assert!(resolver.store().is_empty());
    }

    #[test]
    fn test_render_html_falls_back() {
        let html = render_html("does-not-exist", None, None);
        assert!(html.contains("template-modern"));
    }
}
