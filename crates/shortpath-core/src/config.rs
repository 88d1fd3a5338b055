//! Configuration for shortpath
//!
//! Read from an explicit `--config` path, or from `config.toml` in the
//! user's config directory (`~/.config/shortpath/`). A missing file means
//! defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PathError, Result};

pub use types::{Config, GraphConfig, LadderConfig, OutputConfig};

const CONFIG_DIR: &str = "shortpath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "SHORTPATH_CONFIG_DIR";

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    PathError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from an explicit file. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PathError::io_operation("read config", path.display(), e))?;
        Self::parse(&content)
    }

    /// Load configuration from the default location, falling back to
    /// defaults when no file is present.
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Resolve configuration from an optional explicit path
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load_default(),
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.output.delimiter.is_empty() {
            return Err(PathError::UsageError(
                "output.delimiter must not be empty".to_string(),
            ));
        }
        Ok(config)
    }
}
