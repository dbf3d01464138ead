// src/core/config_manager.rs
//! Configuration loading: optional `config.yaml` plus environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

const CONFIG_FILE: &str = "config.yaml";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment_name: String,
    pub environment: EnvironmentConfig,
    pub service: ServiceConfig,
    pub server: ServerSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentConfig {
    /// Directory holding generated template configs (`*.toml` / `*.json`)
    pub generated_templates_path: PathBuf,
    pub output_path: PathBuf,
    /// Fill the store with the built-in catalog when the directory is empty
    pub seed_catalog: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Base URL of the ATS / AI service; `None` disables those endpoints
    pub ats_service_url: Option<String>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub address: String,
    pub port: u16,
}

// ===== config.yaml layout =====

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: FileSection,
    #[serde(default)]
    production: FileSection,
}

#[derive(Debug, Default, Deserialize)]
struct FileSection {
    generated_templates_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    seed_catalog: Option<bool>,
    ats_service_url: Option<String>,
    timeout_seconds: Option<u64>,
    address: Option<String>,
    port: Option<u16>,
}

impl ConfigManager {
    /// Load using `ENVIRONMENT` and `./config.yaml` when present
    pub fn load() -> Result<Self> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string());
        let config_path = PathBuf::from(CONFIG_FILE);
        let config_path = config_path.exists().then_some(config_path);

        let mut config = Self::load_from(config_path.as_deref(), &environment)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from(config_path: Option<&Path>, environment: &str) -> Result<Self> {
        info!("Loading configuration for environment: {}", environment);

        let file = match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_yaml::from_str::<ConfigFile>(&content)
                    .with_context(|| format!("Failed to parse {}", path.display()))?
            }
            None => ConfigFile::default(),
        };

        let section = match environment {
            "production" => file.production,
            _ => file.local,
        };

        let base_dir = if environment == "production" {
            PathBuf::from("/app")
        } else {
            std::env::current_dir().context("Failed to get current directory")?
        };

        Ok(Self {
            environment_name: environment.to_string(),
            environment: EnvironmentConfig {
                generated_templates_path: resolve_path(
                    &base_dir,
                    section
                        .generated_templates_path
                        .unwrap_or_else(|| PathBuf::from("templates/generated")),
                ),
                output_path: resolve_path(
                    &base_dir,
                    section.output_path.unwrap_or_else(|| PathBuf::from("out")),
                ),
                seed_catalog: section.seed_catalog.unwrap_or(true),
            },
            service: ServiceConfig {
                ats_service_url: section.ats_service_url.filter(|url| !url.trim().is_empty()),
                timeout_seconds: section.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS),
            },
            server: ServerSettings {
                address: section
                    .address
                    .unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
                port: section.port.unwrap_or(DEFAULT_PORT),
            },
        })
    }

    /// Environment variables win over the file
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("ATS_SERVICE_URL").filter(|url| !url.trim().is_empty()) {
            self.service.ats_service_url = Some(url);
        }
        if let Some(port) = lookup("RESUME_STUDIO_PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(address) = lookup("RESUME_STUDIO_ADDRESS") {
            self.server.address = address;
        }
        if let Some(path) = lookup("GENERATED_TEMPLATES_PATH") {
            self.environment.generated_templates_path = PathBuf::from(path);
        }
    }

    pub async fn ensure_directories(&self) -> Result<()> {
        use crate::core::FsOps;

        FsOps::ensure_dir_exists(&self.environment.generated_templates_path).await?;
        FsOps::ensure_dir_exists(&self.environment.output_path).await?;
        Ok(())
    }
}

fn resolve_path(base_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}
