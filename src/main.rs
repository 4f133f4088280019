//! StreamGrab
//!
//! An interactive command-line tool that downloads a remote video through
//! yt-dlp and ffmpeg, optionally trimming it and choosing codecs.
//!
//! # Usage
//!
//! ```bash
//! streamgrab                                   # fully interactive
//! streamgrab grab --url "https://..." --dry-run
//! streamgrab info "https://..." --output json
//! streamgrab links "https://..." -f 22
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use streamgrab::app::container::DefaultAppContainer;
use streamgrab::cli::{commands, Cli, Commands};
use streamgrab::config_initialization::initialize_configuration_hierarchy;
use streamgrab::utils::{init_logging, LoggingConfig};

/// Main entry point for the StreamGrab application
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(&LoggingConfig::new(&cli.log_level, cli.log_json))?;

    info!("Starting StreamGrab");

    let working_dir = std::env::current_dir().context("Cannot determine working directory")?;
    let config = initialize_configuration_hierarchy(&cli, &working_dir)?;
    let container = DefaultAppContainer::new(&config);

    // Execute the requested command
    match cli.command.unwrap_or_default() {
        Commands::Grab(args) => {
            info!("Executing grab command");
            commands::grab(&container, args).await?;
        }
        Commands::Info(args) => {
            info!("Executing info command");
            commands::info(&container, args).await?;
        }
        Commands::Links(args) => {
            info!("Executing links command");
            commands::links(&container, args).await?;
        }
    }

    info!("StreamGrab completed successfully");
    Ok(())
}
