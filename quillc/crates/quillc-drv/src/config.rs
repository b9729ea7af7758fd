//! Configuration for the quillc CLI.
//!
//! Settings come from a TOML file. Command-line flags override them.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use dirs::config_dir;
use serde::Deserialize;

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "quillc.toml";

/// How `quillc tokens` prints a token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Text,
    /// A JSON array of token objects
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Token output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print `line:column` in text output.
    #[serde(default = "default_true")]
    pub show_positions: bool,

    /// Use ANSI colours in log output.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_positions: true,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Searches, in order:
    /// 1. `quillc.toml` in the current directory
    /// 2. `quillc/quillc.toml` in the user configuration directory
    ///
    /// Returns the default configuration if no file is found.
    pub fn load() -> Result<Self> {
        let current = std::env::current_dir()?;
        match Self::find_config_file(&current, config_dir().as_deref()) {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| DriverError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Find the first existing configuration file.
    fn find_config_file(current_dir: &Path, user_config_dir: Option<&Path>) -> Option<PathBuf> {
        let local = current_dir.join(CONFIG_FILE_NAME);
        if local.exists() {
            return Some(local);
        }

        user_config_dir
            .map(|dir| dir.join("quillc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }
}
