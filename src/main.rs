//! discovery - Discovery Intelligence Report generator
//!
//! Entry point for the discovery CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use discovery::cli::{Cli, Commands};
use discovery::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        discovery::cli::completions::print(shell);
        return Ok(());
    }

    // Load configuration only for runtime commands.
    let settings = Settings::load()?;

    // Initialize logging
    let default_level = if cli.verbose {
        "debug"
    } else {
        settings.general.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Execute command
    match cli.command {
        Commands::Generate {
            input,
            no_docx,
            output_dir,
            name,
        } => {
            discovery::cli::commands::generate_report(&settings, &input, no_docx, output_dir, name)
                .await?;
        }
        Commands::Prompt { input } => {
            discovery::cli::commands::show_prompt(&settings, &input)?;
        }
        Commands::Convert { input, output } => {
            discovery::cli::commands::convert_markdown(&input, output)?;
        }
        Commands::Config(config_cmd) => {
            discovery::cli::commands::config_command(&settings, config_cmd)?;
        }
        Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}
