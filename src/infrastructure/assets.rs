//! Photo asset copy and recovery

use crate::error::{ConvertError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// How an asset reached the output tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Copied from the export's own photos directory
    Direct,
    /// Found by searching a backup root
    Recovered(PathBuf),
}

/// Search each root in order, recursively, for a file named `file_name`.
///
/// Candidates within one root are visited in sorted order so results do not
/// depend on directory listing order. Returns the bytes of the first file
/// that can be read, together with its path.
pub fn recover(roots: &[PathBuf], file_name: &str) -> Result<(PathBuf, Vec<u8>)> {
    for root in roots {
        if !root.is_dir() {
            debug!("Skipping backup root {}: not a directory", root.display());
            continue;
        }

        let candidates = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.file_name().to_str() == Some(file_name));

        for candidate in candidates {
            match fs::read(candidate.path()) {
                Ok(bytes) => return Ok((candidate.path().to_path_buf(), bytes)),
                Err(e) => debug!("Could not read {}: {}", candidate.path().display(), e),
            }
        }
    }

    Err(ConvertError::AssetNotFound(file_name.to_string()))
}

/// Copy `source` to `dest`, falling back to a backup-root search when the
/// source is missing.
pub fn copy_or_recover(
    source: &Path,
    dest: &Path,
    backup_roots: &[PathBuf],
) -> Result<AssetSource> {
    if source.is_file() {
        fs::copy(source, dest).map_err(|e| ConvertError::write_failure(dest, e))?;
        return Ok(AssetSource::Direct);
    }

    let file_name = source
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ConvertError::SourceAssetMissing(source.to_path_buf()))?;

    if backup_roots.is_empty() {
        return Err(ConvertError::SourceAssetMissing(source.to_path_buf()));
    }

    let (found, bytes) = recover(backup_roots, file_name)?;
    fs::write(dest, bytes).map_err(|e| ConvertError::write_failure(dest, e))?;
    Ok(AssetSource::Recovered(found))
}
