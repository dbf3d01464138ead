// src/cli.rs
use crate::app_log;
use crate::core::{ConfigManager, FsOps};
use crate::templates::GeneratedTemplateStore;
use crate::types::{Customizations, Profile};
use crate::utils::{get_file_extension, output_file_name};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-studio")]
#[command(about = "Render resumes from profile data with built-in and generated templates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP API
    Serve,
    /// Render a profile JSON file with a template
    Render {
        #[arg(long)]
        profile: PathBuf,
        #[arg(long, default_value = "modern")]
        template: String,
        /// Customizations JSON file (colors, fonts, layout, hiddenSections)
        #[arg(long)]
        customizations: Option<PathBuf>,
        /// Defaults to text for `.txt` outputs, html otherwise
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Defaults to `<name>_<template>.<ext>` in the configured output directory
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List built-in templates, aliases and generated template categories
    Templates,
    /// Write the generated template catalog as TOML files
    Catalog {
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Text,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "txt",
        }
    }

    /// Explicit flag first, then the output file extension
    fn pick(explicit: Option<OutputFormat>, output: Option<&Path>) -> OutputFormat {
        if let Some(format) = explicit {
            return format;
        }
        match output.and_then(|path| get_file_extension(&path.to_string_lossy())) {
            Some(ext) if ext == "txt" => OutputFormat::Text,
            _ => OutputFormat::Html,
        }
    }
}

pub async fn handle_command(cli: Cli, config: ConfigManager) -> Result<()> {
    match cli.command {
        Command::Serve => crate::start_web_server(config).await,

        Command::Render {
            profile,
            template,
            customizations,
            format,
            output,
        } => {
            let profile_data: Profile = FsOps::read_json(&profile).await?;
            let customizations: Customizations = match customizations {
                Some(path) => FsOps::read_json(&path).await?,
                None => Customizations::default(),
            };

            let resolver = crate::build_resolver(&config)?;
            let resolved = resolver.resolve(&template, Some(&customizations));
            if resolved.is_fallback() {
                app_log!(
                    warn,
                    "Template '{}' not found, using '{}'",
                    template,
                    resolved.id()
                );
            }

            let document = resolved.render(&profile_data, &customizations);

            let format = OutputFormat::pick(format, output.as_deref());
            let content = match format {
                OutputFormat::Html => document.to_html(),
                OutputFormat::Text => document.to_plain_text(),
            };

            let output_path = match output {
                Some(path) => path,
                None => config.environment.output_path.join(output_file_name(
                    &document.header.name,
                    &document.template_id,
                    format.extension(),
                )),
            };

            FsOps::write_file_safe(&output_path, &content)
                .await
                .with_context(|| format!("Failed to write {}", output_path.display()))?;

            app_log!(
                info,
                "Rendered '{}' with '{}' to {}",
                document.header.name,
                document.template_id,
                output_path.display()
            );
            println!("{}", output_path.display());
            Ok(())
        }

        Command::Templates => {
            let resolver = crate::build_resolver(&config)?;

            println!("Built-in templates:");
            for template in resolver.registry().list() {
                println!(
                    "  {:<20} {:<14} {}",
                    template.id(),
                    template.category(),
                    template.description()
                );
            }

            let mut aliases: Vec<_> = resolver.registry().aliases().collect();
            aliases.sort();
            println!("Aliases:");
            for (alias, target) in aliases {
                println!("  {} -> {}", alias, target);
            }

            let store = resolver.store();
            println!("Generated templates: {}", store.len());
            for category in store.categories() {
                println!("  {:<14} {}", category, store.by_category(&category).len());
            }
            Ok(())
        }

        Command::Catalog { output } => {
            let written = GeneratedTemplateStore::generate_catalog()
                .save_dir(&output)
                .await?;
            app_log!(
                info,
                "Wrote {} generated templates to {}",
                written,
                output.display()
            );
            println!("{} templates written to {}", written, output.display());
            Ok(())
        }
    }
}
