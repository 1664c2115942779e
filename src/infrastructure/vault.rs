//! Vault discovery and starred index persistence

use crate::domain::star::StarIndex;
use crate::error::{ConvertError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const STARRED_FILE: &str = "starred.json";

/// An Obsidian vault located on disk
#[derive(Debug, Clone)]
pub struct Vault {
    pub root: PathBuf,
    marker: String,
}

impl Vault {
    pub fn new(root: PathBuf, marker: impl Into<String>) -> Self {
        Vault {
            root,
            marker: marker.into(),
        }
    }

    /// Discover the vault root by walking up from `start` until a directory
    /// containing `marker` is found
    pub fn discover_from(start: &Path, marker: &str) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(marker).is_dir() {
                return Ok(Vault::new(current, marker));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(ConvertError::VaultNotFound(start.to_path_buf())),
            }
        }
    }

    pub fn star_index_path(&self) -> PathBuf {
        self.root.join(&self.marker).join(STARRED_FILE)
    }

    /// Path of `file` relative to the vault root, `/`-separated
    pub fn relative_path(&self, file: &Path) -> Option<String> {
        let rel = file.strip_prefix(&self.root).ok()?;
        let parts: Vec<&str> = rel
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    /// Read the star index (empty if the file does not exist yet)
    pub fn load_star_index(&self) -> Result<StarIndex> {
        let path = self.star_index_path();
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StarIndex::default()),
            Err(e) => Err(ConvertError::Io(e)),
        }
    }

    /// Write the star index back, pretty-printed
    pub fn save_star_index(&self, index: &StarIndex) -> Result<()> {
        let path = self.star_index_path();
        let contents = serde_json::to_string_pretty(index)?;
        fs::write(&path, contents).map_err(|e| ConvertError::write_failure(&path, e))
    }
}
