// src/core/fs_ops.rs
//! Async file system helpers with consistent error context

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::fs;

use crate::app_log;

pub struct FsOps;

impl FsOps {
    pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            app_log!(info, "Created directory: {}", path.display());
        }
        Ok(())
    }

    pub async fn read_file_safe(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Write a file, creating parent directories as needed
    pub async fn write_file_safe(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            Self::ensure_dir_exists(parent).await?;
        }

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        app_log!(debug, "Written file: {}", path.display());
        Ok(())
    }

    /// Read and deserialize a JSON document
    pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let content = Self::read_file_safe(path).await?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Profile;

    #[tokio::test]
    async fn test_write_creates_parents_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/profile.json");

        FsOps::write_file_safe(&path, r#"{"summary": "hi"}"#)
            .await
            .unwrap();

        let profile: Profile = FsOps::read_json(&path).await.unwrap();
        assert_eq!(profile.summary.as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn test_read_missing_file_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsOps::read_file_safe(&dir.path().join("missing.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
