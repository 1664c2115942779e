//! Starred index update use case

use crate::domain::star::StarRecord;
use crate::error::{ConvertError, Result};
use crate::infrastructure::Vault;
use std::path::Path;
use tracing::debug;

/// Star `note_path` in the vault's index.
///
/// Returns true if a new record was appended, false if an identical one
/// already existed. No locking: only one converter may touch a vault at once.
pub fn update_stars(vault: &Vault, title: &str, note_path: &Path) -> Result<bool> {
    let relative = vault.relative_path(note_path).ok_or_else(|| {
        ConvertError::VaultNotFound(note_path.to_path_buf())
    })?;
    let record = StarRecord::file(title, relative);

    let mut index = vault.load_star_index()?;
    if !index.add(&record)? {
        debug!("Already starred: {}", record.path);
        return Ok(false);
    }

    vault.save_star_index(&index)?;
    debug!("Starred {}", record.path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn vault() -> (TempDir, Vault) {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".obsidian")).unwrap();
        let vault = Vault::new(temp.path().to_path_buf(), ".obsidian");
        (temp, vault)
    }

    #[test]
    fn test_creates_index_when_missing() {
        let (temp, vault) = vault();
        let note = temp.path().join("DayOne/2023/01/n.md");

        assert!(update_stars(&vault, "n", &note).unwrap());

        let raw = fs::read_to_string(temp.path().join(".obsidian/starred.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"items": [
                {"type": "file", "title": "n", "path": "DayOne/2023/01/n.md"}
            ]})
        );
    }

    #[test]
    fn test_same_star_twice_keeps_one_record() {
        let (temp, vault) = vault();
        let note = temp.path().join("n.md");

        assert!(update_stars(&vault, "n", &note).unwrap());
        assert!(!update_stars(&vault, "n", &note).unwrap());

        let index = vault.load_star_index().unwrap();
        assert_eq!(index.items.len(), 1);
    }

    #[test]
    fn test_appends_to_existing_items() {
        let (temp, vault) = vault();
        fs::write(
            temp.path().join(".obsidian/starred.json"),
            r#"{"items": [{"type": "file", "title": "old", "path": "old.md"}]}"#,
        )
        .unwrap();

        update_stars(&vault, "n", &temp.path().join("n.md")).unwrap();

        let index = vault.load_star_index().unwrap();
        assert_eq!(index.items.len(), 2);
        assert_eq!(index.items[0]["title"], "old");
        assert_eq!(index.items[1]["title"], "n");
    }

    #[test]
    fn test_note_outside_vault_fails() {
        let (_temp, vault) = vault();
        let other = TempDir::new().unwrap();

        let result = update_stars(&vault, "n", &other.path().join("n.md"));
        assert!(matches!(result, Err(ConvertError::VaultNotFound(_))));
    }
}
