//! Photo relocation for a single entry
//!
//! Copies each referenced photo into the output tree under a name derived from
//! the entry timestamp and the photo's position, then points the entry text at
//! the copy.

use crate::domain::entry::JournalEntry;
use crate::domain::photo::{self, PHOTOS_DIR};
use crate::infrastructure::assets::{self, AssetSource};
use crate::infrastructure::OutputTree;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What happened to one photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoStatus {
    Copied,
    Recovered(PathBuf),
    /// Not resolved; the inline token was left in the text
    Unresolved(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoOutcome {
    pub source_file_name: String,
    pub status: PhotoStatus,
}

/// Rewritten entry text plus a per-photo copy report
#[derive(Debug, Clone)]
pub struct PhotoTransform {
    pub text: String,
    pub outcomes: Vec<PhotoOutcome>,
}

impl PhotoTransform {
    /// Photos left unresolved, with the reason each one failed
    pub fn unresolved(&self) -> impl Iterator<Item = (&PhotoOutcome, &str)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            PhotoStatus::Unresolved(reason) => Some((o, reason.as_str())),
            _ => None,
        })
    }
}

/// Relocate every photo of `entry` and substitute its inline token.
///
/// A photo that cannot be copied or recovered keeps its token and is
/// reported as unresolved; the remaining photos are still processed.
pub fn transform_photos(
    entry: &JournalEntry,
    export_root: &Path,
    output: &OutputTree,
    backup_roots: &[PathBuf],
) -> PhotoTransform {
    let mut text = entry.text.clone();
    let mut outcomes = Vec::with_capacity(entry.photos.len());

    for (index, photo_ref) in entry.photos.iter().enumerate() {
        let source_file_name = photo_ref.source_file_name();
        let source = export_root.join(PHOTOS_DIR).join(&source_file_name);
        let destination =
            photo::destination_relative_path(&entry.creation_date, index, photo_ref);
        let dest_path = output.resolve(&destination);

        let status = match assets::copy_or_recover(&source, &dest_path, backup_roots) {
            Ok(found) => {
                text = photo::substitute_token(&text, photo_ref, &destination);
                match found {
                    AssetSource::Direct => {
                        debug!("Copied {} -> {}", source.display(), destination);
                        PhotoStatus::Copied
                    }
                    AssetSource::Recovered(path) => {
                        debug!("Recovered {} from {}", destination, path.display());
                        PhotoStatus::Recovered(path)
                    }
                }
            }
            Err(e) => {
                warn!(
                    "Photo {} of entry {} unresolved: {}",
                    source_file_name, entry.creation_date, e
                );
                PhotoStatus::Unresolved(e.to_string())
            }
        };

        outcomes.push(PhotoOutcome {
            source_file_name,
            status,
        });
    }

    PhotoTransform { text, outcomes }
}
