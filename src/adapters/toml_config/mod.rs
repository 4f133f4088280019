// TOML config adapter - Optional configuration file

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::model::ConfigOverrides;
use crate::error::{GrabError, GrabResult};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "streamgrab.toml";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    streamgrab: ConfigOverrides,
}

/// TOML configuration adapter
#[derive(Debug, Default)]
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Create new TOML config adapter
    pub fn new() -> Self {
        Self
    }

    /// Parse the `[streamgrab]` section of a TOML document
    pub fn parse(&self, content: &str) -> GrabResult<ConfigOverrides> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| GrabError::Config {
            message: format!("Failed to parse TOML config: {}", e),
        })?;
        Ok(file.streamgrab)
    }

    /// Load an explicitly requested config file; it must exist
    pub fn load(&self, path: &Path) -> GrabResult<ConfigOverrides> {
        let content = std::fs::read_to_string(path).map_err(|e| GrabError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let overrides = self.parse(&content)?;
        info!("Loaded configuration from {}", path.display());
        debug!(?overrides, "File configuration");
        Ok(overrides)
    }

    /// Load `streamgrab.toml` from `dir` when present
    pub fn load_default(&self, dir: &Path) -> GrabResult<ConfigOverrides> {
        let path: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if !path.is_file() {
            debug!("No config file at {}", path.display());
            return Ok(ConfigOverrides::default());
        }
        self.load(&path)
    }
}
