//! Configuration initialization and hierarchy management

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::TomlConfigAdapter;
use crate::cli::Cli;
use crate::domain::model::{AppConfig, ConfigOverrides};

/// Resolve configuration following precedence: CLI/env > file > defaults.
///
/// Environment variables reach this point through clap's `env` fallbacks.
pub fn initialize_configuration_hierarchy(cli: &Cli, working_dir: &Path) -> Result<AppConfig> {
    info!("Initializing configuration hierarchy");

    let adapter = TomlConfigAdapter::new();
    let file_overrides = match &cli.config {
        Some(path) => adapter
            .load(path)
            .with_context(|| format!("Cannot use config file {}", path.display()))?,
        None => adapter
            .load_default(working_dir)
            .context("Cannot use default config file")?,
    };

    let config = cli_overrides(cli).apply(file_overrides.apply(AppConfig::default()));
    info!(
        extractor = %config.extractor,
        muxer = %config.muxer,
        destination = %config.destination,
        "Configuration resolved"
    );
    Ok(config)
}

fn cli_overrides(cli: &Cli) -> ConfigOverrides {
    ConfigOverrides {
        extractor: cli.extractor.clone(),
        muxer: cli.muxer.clone(),
        destination: cli.destination.clone(),
    }
}
