//! Output directory tree for converted notes and assets

use crate::domain::photo::PHOTOS_DIR;
use crate::error::{ConvertError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Destination folder receiving notes and relocated photos
#[derive(Debug, Clone)]
pub struct OutputTree {
    pub root: PathBuf,
}

impl OutputTree {
    /// Create a tree rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        OutputTree { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn photos_dir(&self) -> PathBuf {
        self.root.join(PHOTOS_DIR)
    }

    /// Create the root and its photos directory
    pub fn prepare(&self) -> Result<()> {
        let photos = self.photos_dir();
        fs::create_dir_all(&photos).map_err(|e| ConvertError::write_failure(photos, e))
    }

    /// Resolve a `/`-separated relative path under the root
    pub fn resolve(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .fold(self.root.clone(), |path, part| path.join(part))
    }

    /// Write note content (creates parents, overwrites silently)
    pub fn write_note(&self, relative: &Path, content: &str) -> Result<PathBuf> {
        let path = self.root.join(relative);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConvertError::write_failure(parent, e))?;
            }
        }

        fs::write(&path, content).map_err(|e| ConvertError::write_failure(&path, e))?;
        Ok(path)
    }
}
