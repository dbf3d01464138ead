// src/templates/store.rs
//! Store of generated (data-only) template configurations

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::app_log;
use crate::core::FsOps;
use crate::templates::config::{
    standard_sections, ColorPalette, FontSettings, HeaderStyle, LayoutType, SectionKind, Spacing,
    TemplateConfig, TemplateMetadata, DEFAULT_BACKGROUND_COLOR,
};

// ===== Catalog ingredients =====

struct Palette {
    key: &'static str,
    category: &'static str,
    primary: &'static str,
    secondary: &'static str,
    text: &'static str,
}

const PALETTES: &[Palette] = &[
    Palette {
        key: "ocean",
        category: "professional",
        primary: "#0f4c81",
        secondary: "#5aa9e6",
        text: "#1f2933",
    },
    Palette {
        key: "forest",
        category: "professional",
        primary: "#14532d",
        secondary: "#22c55e",
        text: "#1c1917",
    },
    Palette {
        key: "slate",
        category: "minimal",
        primary: "#334155",
        secondary: "#64748b",
        text: "#0f172a",
    },
    Palette {
        key: "mono",
        category: "minimal",
        primary: "#000000",
        secondary: "#525252",
        text: "#000000",
    },
    Palette {
        key: "sunset",
        category: "creative",
        primary: "#9a3412",
        secondary: "#f97316",
        text: "#292524",
    },
    Palette {
        key: "plum",
        category: "creative",
        primary: "#581c87",
        secondary: "#c026d3",
        text: "#1e1b4b",
    },
    Palette {
        key: "royal",
        category: "modern",
        primary: "#1e3a8a",
        secondary: "#6366f1",
        text: "#111827",
    },
    Palette {
        key: "teal",
        category: "modern",
        primary: "#115e59",
        secondary: "#2dd4bf",
        text: "#134e4a",
    },
];

struct FontPairing {
    key: &'static str,
    family: &'static str,
    heading_family: Option<&'static str>,
}

const FONT_PAIRINGS: &[FontPairing] = &[
    FontPairing { key: "sans", family: "Inter, Arial, sans-serif", heading_family: None },
    FontPairing {
        key: "serif",
        family: "Georgia, 'Times New Roman', serif",
        heading_family: Some("'Playfair Display', Georgia, serif"),
    },
    FontPairing {
        key: "humanist",
        family: "'Source Sans Pro', Arial, sans-serif",
        heading_family: Some("Merriweather, Georgia, serif"),
    },
];

fn title_case(key: &str) -> String {
    key.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn catalog_entry(
    palette: &Palette,
    layout: LayoutType,
    fonts: &FontPairing,
    created_at: DateTime<Utc>,
) -> TemplateConfig {
    let id = format!("{}-{}-{}", palette.key, layout.as_str(), fonts.key);

    let header_style = match (layout, fonts.key) {
        (LayoutType::SingleColumn, "serif") => HeaderStyle::Centered,
        (LayoutType::SingleColumn, _) => HeaderStyle::Left,
        (LayoutType::TwoColumn, _) => HeaderStyle::Split,
        _ => HeaderStyle::Banner,
    };

    // Creative palettes lead with projects
    let mut sections = standard_sections();
    if palette.category == "creative" {
        for section in sections.iter_mut() {
            if section.kind == SectionKind::Projects {
                section.order = 1;
            } else if section.order >= 1 && section.order < 4 {
                section.order += 1;
            }
        }
    }

    TemplateConfig {
        id: id.clone(),
        layout,
        colors: ColorPalette {
            primary: palette.primary.to_string(),
            secondary: palette.secondary.to_string(),
            text: palette.text.to_string(),
            background: DEFAULT_BACKGROUND_COLOR.to_string(),
        },
        fonts: FontSettings {
            family: fonts.family.to_string(),
            heading_family: fonts.heading_family.map(str::to_string),
            ..Default::default()
        },
        spacing: if palette.category == "minimal" {
            Spacing {
                section_gap: 18.0,
                item_gap: 10.0,
                page_margin: 44.0,
            }
        } else {
            Spacing::default()
        },
        header_style,
        sections,
        metadata: TemplateMetadata {
            name: title_case(&id),
            description: format!(
                "{} {} layout with {} typography",
                title_case(palette.key),
                layout.as_str().replace('-', " "),
                fonts.key
            ),
            category: palette.category.to_string(),
            tags: vec![
                palette.key.to_string(),
                layout.as_str().to_string(),
                fonts.key.to_string(),
            ],
            created_at,
        },
    }
}

// ===== Store =====

/// Generated template configs keyed by lowercased identifier
#[derive(Debug, Clone, Default)]
pub struct GeneratedTemplateStore {
    templates: HashMap<String, TemplateConfig>,
}

impl GeneratedTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk catalog: every palette × layout × font pairing
    pub fn generate_catalog() -> Self {
        Self::generate_catalog_at(Utc::now())
    }

    pub fn generate_catalog_at(created_at: DateTime<Utc>) -> Self {
        let mut store = Self::new();
        for palette in PALETTES {
            for layout in LayoutType::ALL {
                for fonts in FONT_PAIRINGS {
                    store.insert(catalog_entry(palette, layout, fonts, created_at));
                }
            }
        }
        app_log!(debug, "Generated template catalog with {} entries", store.len());
        store
    }

    /// Insert or replace; returns the previous config under the same key
    pub fn insert(&mut self, config: TemplateConfig) -> Option<TemplateConfig> {
        self.templates.insert(config.id.to_lowercase(), config)
    }

    pub fn get(&self, key: &str) -> Option<&TemplateConfig> {
        self.templates.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    /// Configs in a category (case-insensitive), sorted by id
    pub fn by_category(&self, category: &str) -> Vec<&TemplateConfig> {
        let category = category.trim();
        let mut configs: Vec<&TemplateConfig> = self
            .templates
            .values()
            .filter(|c| c.metadata.category.eq_ignore_ascii_case(category))
            .collect();
        configs.sort_by(|a, b| a.id.cmp(&b.id));
        configs
    }

    pub fn categories(&self) -> Vec<String> {
        self.templates
            .values()
            .map(|c| c.metadata.category.to_lowercase())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }

    pub fn list(&self) -> Vec<&TemplateConfig> {
        let mut configs: Vec<&TemplateConfig> = self.templates.values().collect();
        configs.sort_by(|a, b| a.id.cmp(&b.id));
        configs
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn merge(&mut self, other: GeneratedTemplateStore) {
        self.templates.extend(other.templates);
    }

    // ===== Persistence =====

    /// Load every `*.toml` / `*.json` config in `dir`. Unreadable files are skipped.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut store = Self::new();

        if !dir.exists() {
            app_log!(
                warn,
                "Generated templates directory does not exist: {}",
                dir.display()
            );
            return Ok(store);
        }

        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read templates directory: {}", dir.display()))?;

        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            match Self::load_config_file(&path) {
                Ok(Some(config)) => {
                    app_log!(trace, "Loaded generated template: {}", config.id);
                    if let Some(previous) = store.insert(config) {
                        app_log!(warn, "Duplicate generated template id: {}", previous.id);
                    }
                }
                Ok(None) => {}
                Err(e) => app_log!(warn, "Failed to load template {}: {:#}", path.display(), e),
            }
        }

        app_log!(info, "Loaded {} generated templates", store.len());
        Ok(store)
    }

    fn load_config_file(path: &Path) -> Result<Option<TemplateConfig>> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        let config = match extension.as_deref() {
            Some("toml") => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config: {}", path.display()))?
            }
            Some("json") => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse config: {}", path.display()))?
            }
            _ => return Ok(None),
        };

        Ok(Some(config))
    }

    /// Write each config as `<slugified id>.toml` into `dir`; returns how many files were written.
    /// Fails before writing anything if two ids map to the same file name.
    pub async fn save_dir(&self, dir: &Path) -> Result<usize> {
        let mut files: HashMap<String, &TemplateConfig> = HashMap::new();
        for config in self.list() {
            let file_name = format!("{}.toml", slug::slugify(&config.id));
            if let Some(existing) = files.insert(file_name.clone(), config) {
                bail!(
                    "Templates '{}' and '{}' would both be saved as {}",
                    existing.id,
                    config.id,
                    file_name
                );
            }
        }

        FsOps::ensure_dir_exists(dir).await?;

        for (file_name, config) in &files {
            let content = toml::to_string(*config)
                .with_context(|| format!("Failed to serialize template: {}", config.id))?;
            FsOps::write_file_safe(&dir.join(file_name), &content).await?;
        }

        Ok(files.len())
    }
}
