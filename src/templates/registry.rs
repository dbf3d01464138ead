// src/templates/registry.rs
use std::collections::HashMap;

use crate::app_log;
use crate::render::document::Document;
use crate::render::leaf;
use crate::types::{Customizations, Profile};

/// A hard-coded layout: a pure function from profile to document
pub trait ResumeTemplate: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;

    fn category(&self) -> &'static str {
        "professional"
    }

    fn render(&self, profile: &Profile, customizations: &Customizations) -> Document;
}

/// Static identifier → template map, plus aliases
pub struct TemplateRegistry {
    templates: HashMap<String, Box<dyn ResumeTemplate>>,
    aliases: HashMap<String, String>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_builtin_templates()
    }
}

impl TemplateRegistry {
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Registry holding every built-in template and the known aliases
    pub fn with_builtin_templates() -> Self {
        let mut registry = Self::empty();
        for template in leaf::builtin_templates() {
            registry.register(template);
        }
        for (alias, target) in leaf::BUILTIN_ALIASES {
            registry.alias(alias, target);
        }
        app_log!(debug, "Registered {} built-in templates", registry.len());
        registry
    }

    pub fn register(&mut self, template: Box<dyn ResumeTemplate>) {
        let id = template.id().to_lowercase();
        if self.templates.insert(id.clone(), template).is_some() {
            app_log!(warn, "Template '{}' registered twice, keeping the latest", id);
        }
    }

    pub fn alias(&mut self, alias: &str, target: &str) {
        self.aliases
            .insert(alias.to_lowercase(), target.to_lowercase());
    }

    /// Look up by already-normalized key, following one level of aliasing
    pub fn get(&self, key: &str) -> Option<&dyn ResumeTemplate> {
        let target = self.aliases.get(key).map(String::as_str).unwrap_or(key);
        self.templates.get(target).map(|t| t.as_ref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Templates sorted by id
    pub fn list(&self) -> Vec<&dyn ResumeTemplate> {
        let mut templates: Vec<&dyn ResumeTemplate> =
            self.templates.values().map(|t| t.as_ref()).collect();
        templates.sort_by_key(|t| t.id());
        templates
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, t)| (a.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
