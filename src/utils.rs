// src/utils.rs
use std::path::Path;

/// Normalize a display name for file system usage
pub fn normalize_file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() {
        "resume".to_string()
    } else {
        stem
    }
}

/// `<name>_<template>.<ext>`, e.g. `ada_lovelace_modern.html`
pub fn output_file_name(person_name: &str, template_id: &str, extension: &str) -> String {
    format!(
        "{}_{}.{}",
        normalize_file_stem(person_name),
        normalize_file_stem(template_id),
        extension
    )
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
