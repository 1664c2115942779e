//! Error types for dayone2obs

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the converter
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Invalid export: {0}")]
    InvalidExport(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Source asset missing: {0}")]
    SourceAssetMissing(PathBuf),

    #[error("Asset not found in any backup directory: {0}")]
    AssetNotFound(String),

    #[error("Failed to write {path}: {source}")]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("No vault found above {0}")]
    VaultNotFound(PathBuf),

    #[error("Markdown error: {0}")]
    Markdown(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl ConvertError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::InputNotFound(_) => 2,
            ConvertError::InvalidExport(_) | ConvertError::Json(_) => 3,
            ConvertError::Config(_) | ConvertError::TomlDeserialize(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ConvertError::InputNotFound(path) => {
                format!(
                    "Input file not found: {}\n\n\
                    Suggestions:\n\
                    • Pass the Journal.json file from an unzipped Day One export\n\
                    • Check that the path is relative to the current directory",
                    path.display()
                )
            }
            ConvertError::InvalidExport(msg) => {
                format!(
                    "Invalid export: {}\n\n\
                    Expected a JSON document with a top-level \"entries\" list.",
                    msg
                )
            }
            ConvertError::Json(e) => {
                format!(
                    "Could not parse export JSON: {}\n\n\
                    Expected a JSON document with a top-level \"entries\" list.",
                    e
                )
            }
            ConvertError::TomlDeserialize(e) => {
                format!(
                    "Could not parse config file: {}\n\n\
                    Valid keys: backup_dirs, journal_name, provenance_tag, vault_marker",
                    e
                )
            }
            _ => self.to_string(),
        }
    }

    pub(crate) fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::OutputWriteFailure {
            path: path.into(),
            source,
        }
    }
}

/// Result type using ConvertError
pub type Result<T> = std::result::Result<T, ConvertError>;
