//! Export conversion use case
//!
//! Orchestrates the full workflow: load the export, relocate photos, assemble
//! and normalize each note, write it, and star it when requested.

use crate::application::transform_photos::{transform_photos, PhotoStatus};
use crate::application::update_stars::update_stars;
use crate::domain::entry::{raw_creation_date, Export, JournalEntry};
use crate::domain::front_matter::{build_front_matter, build_tag_section};
use crate::domain::markdown::{normalize, unescape_brackets};
use crate::domain::note_path::NotePath;
use crate::error::{ConvertError, Result};
use crate::infrastructure::{Config, OutputTree, Vault};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Options for a conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Day One `Journal.json` (its directory holds the `photos/` folder)
    pub input: PathBuf,

    /// Folder receiving notes and photos
    pub output: PathBuf,

    /// Roots searched, in order, for photos missing from the export
    pub backup_dirs: Vec<PathBuf>,

    /// Journal name (None = derived from the input file name)
    pub journal_name: Option<String>,

    pub provenance_tag: String,

    pub vault_marker: String,

    /// Add starred entries to the vault's starred index
    pub update_stars: bool,
}

impl ConvertOptions {
    /// Combine command-line values with a loaded config.
    ///
    /// Explicit values win; extra backup dirs are searched after the configured ones.
    pub fn from_config(
        config: Config,
        input: PathBuf,
        output: PathBuf,
        extra_backup_dirs: Vec<PathBuf>,
        journal_name: Option<String>,
        update_stars: bool,
    ) -> Self {
        let mut backup_dirs = config.backup_dirs;
        backup_dirs.extend(extra_backup_dirs);

        ConvertOptions {
            input,
            output,
            backup_dirs,
            journal_name: journal_name.or(config.journal_name),
            provenance_tag: config.provenance_tag,
            vault_marker: config.vault_marker,
            update_stars,
        }
    }
}

/// A photo that could not be placed in the output tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedPhoto {
    pub creation_date: String,
    pub file_name: String,
    pub reason: String,
}

/// An entry whose note could not be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedEntry {
    pub creation_date: String,
    pub reason: String,
}

/// Summary of a conversion run
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    pub notes_written: Vec<PathBuf>,
    pub photos_copied: usize,
    pub photos_recovered: usize,
    pub unresolved_photos: Vec<UnresolvedPhoto>,
    pub failed_entries: Vec<FailedEntry>,
    pub stars_added: usize,
    pub vault_root: Option<PathBuf>,
}

/// Service converting one export into an output tree
pub struct ConvertService {
    options: ConvertOptions,
}

impl ConvertService {
    /// Create new convert service
    pub fn new(options: ConvertOptions) -> Self {
        ConvertService { options }
    }

    /// Execute the conversion
    ///
    /// Individual entries that fail are recorded in the report and do not
    /// stop the run.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file is missing or is not a valid export
    /// - The output folder cannot be created
    pub fn execute(&self) -> Result<ConversionReport> {
        let input = self.resolve_input()?;
        let export = load_export(&input)?;
        let export_root = input.parent().unwrap_or(Path::new(".")).to_path_buf();
        let journal_name = self
            .options
            .journal_name
            .clone()
            .unwrap_or_else(|| journal_name_from_path(&input));

        let tree = OutputTree::new(self.options.output.clone());
        tree.prepare()?;
        let tree = OutputTree::new(fs::canonicalize(tree.root())?);

        info!(
            "Converting {} entries from journal '{}' into {}",
            export.entries.len(),
            journal_name,
            tree.root().display()
        );

        let mut report = ConversionReport::default();
        let entries: Vec<(String, Result<JournalEntry>)> =
            export.entries.into_iter().map(decode_entry).collect();

        let vault = self.locate_vault(&entries, tree.root());
        report.vault_root = vault.as_ref().map(|v| v.root.clone());

        for (label, decoded) in &entries {
            let failure = match decoded {
                Ok(entry) => self
                    .convert_entry(
                        entry,
                        &export_root,
                        &tree,
                        &journal_name,
                        vault.as_ref(),
                        &mut report,
                    )
                    .err()
                    .map(|e| e.to_string()),
                Err(e) => Some(e.to_string()),
            };
            if let Some(reason) = failure {
                warn!("Skipping entry {}: {}", label, reason);
                report.failed_entries.push(FailedEntry {
                    creation_date: label.clone(),
                    reason,
                });
            }
        }

        info!(
            "Wrote {} notes ({} failed)",
            report.notes_written.len(),
            report.failed_entries.len()
        );

        Ok(report)
    }

    fn resolve_input(&self) -> Result<PathBuf> {
        let input = &self.options.input;
        if !input.is_file() {
            return Err(ConvertError::InputNotFound(input.clone()));
        }
        Ok(fs::canonicalize(input)?)
    }

    /// Find the vault only when some entry is starred
    fn locate_vault(
        &self,
        entries: &[(String, Result<JournalEntry>)],
        output_root: &Path,
    ) -> Option<Vault> {
        let any_starred = entries
            .iter()
            .any(|(_, decoded)| matches!(decoded, Ok(entry) if entry.starred));
        if !self.options.update_stars || !any_starred {
            return None;
        }

        match Vault::discover_from(output_root, &self.options.vault_marker) {
            Ok(vault) => {
                debug!("Found vault at {}", vault.root.display());
                Some(vault)
            }
            Err(e) => {
                warn!("{}; starred entries will not be added to the index", e);
                None
            }
        }
    }

    fn convert_entry(
        &self,
        entry: &JournalEntry,
        export_root: &Path,
        tree: &OutputTree,
        journal_name: &str,
        vault: Option<&Vault>,
        report: &mut ConversionReport,
    ) -> Result<()> {
        let note_path = NotePath::from_creation_date(&entry.creation_date)?;

        let photos = transform_photos(entry, export_root, tree, &self.options.backup_dirs);
        for outcome in &photos.outcomes {
            match outcome.status {
                PhotoStatus::Copied => report.photos_copied += 1,
                PhotoStatus::Recovered(_) => report.photos_recovered += 1,
                PhotoStatus::Unresolved(_) => {}
            }
        }
        report
            .unresolved_photos
            .extend(photos.unresolved().map(|(outcome, reason)| UnresolvedPhoto {
                creation_date: entry.creation_date.clone(),
                file_name: outcome.source_file_name.clone(),
                reason: reason.to_string(),
            }));

        let contents = format!(
            "{}{}\n{}",
            build_front_matter(entry, journal_name),
            photos.text,
            build_tag_section(entry, journal_name, &self.options.provenance_tag)
        );
        let contents = unescape_brackets(&normalize(&contents)?);

        let written = tree.write_note(&note_path.relative(), &contents)?;
        debug!("Wrote {}", written.display());

        if entry.starred {
            if let Some(vault) = vault {
                match update_stars(vault, note_path.title(), &written) {
                    Ok(true) => report.stars_added += 1,
                    Ok(false) => {}
                    Err(e) => warn!("Could not star {}: {}", entry.creation_date, e),
                }
            }
        }

        report.notes_written.push(written);
        Ok(())
    }
}

/// Decode one raw entry, labelled by its `creationDate` for reporting
fn decode_entry(raw: serde_json::Value) -> (String, Result<JournalEntry>) {
    let label = raw_creation_date(&raw)
        .unwrap_or("<no creationDate>")
        .to_string();
    let decoded =
        JournalEntry::from_value(raw).map_err(|e| ConvertError::InvalidEntry(e.to_string()));
    (label, decoded)
}

/// Read and parse the export document
pub fn load_export(path: &Path) -> Result<Export> {
    let contents = fs::read_to_string(path)?;
    Export::from_json(&contents).map_err(|e| ConvertError::InvalidExport(e.to_string()))
}

/// Journal name is the file name up to its first dot (`Journal.json` -> `Journal`)
pub fn journal_name_from_path(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.split('.').next())
        .unwrap_or_default()
        .to_string()
}
