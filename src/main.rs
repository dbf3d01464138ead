use anyhow::Result;
use clap::Parser;
use resume_studio::app_log;
use resume_studio::cli::{handle_command, Cli};
use resume_studio::core::ConfigManager;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resume_studio=info,rocket::server=off")),
        )
        .init();

    let cli = Cli::parse();

    let config = ConfigManager::load()?;
    app_log!(info, "Environment: {}", config.environment_name);
    app_log!(
        info,
        "Generated templates: {}",
        config.environment.generated_templates_path.display()
    );

    handle_command(cli, config).await
}
