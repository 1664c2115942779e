//! Configuration management

use crate::domain::front_matter::DEFAULT_PROVENANCE_TAG;
use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Marker directory that identifies an Obsidian vault root
pub const DEFAULT_VAULT_MARKER: &str = ".obsidian";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Extra roots searched when a photo is missing from the export
    pub backup_dirs: Vec<PathBuf>,
    /// Overrides the journal name taken from the input file name
    pub journal_name: Option<String>,
    pub provenance_tag: String,
    pub vault_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backup_dirs: Vec::new(),
            journal_name: None,
            provenance_tag: DEFAULT_PROVENANCE_TAG.to_string(),
            vault_marker: DEFAULT_VAULT_MARKER.to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConvertError::Config(format!("Config file not found: {}", path.display()))
            } else {
                ConvertError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the given path, or fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Ok(Config::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.provenance_tag.trim().is_empty() {
            return Err(ConvertError::Config(
                "provenance_tag must not be empty".to_string(),
            ));
        }
        if self.vault_marker.trim().is_empty() {
            return Err(ConvertError::Config(
                "vault_marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
