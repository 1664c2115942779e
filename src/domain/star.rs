//! Starred notes index (`.obsidian/starred.json`)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One starred file reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub path: String,
}

impl StarRecord {
    pub fn file(title: impl Into<String>, path: impl Into<String>) -> Self {
        StarRecord {
            kind: "file".to_string(),
            title: title.into(),
            path: path.into(),
        }
    }
}

/// The persisted index.
///
/// Items are kept as raw JSON so entries this tool does not know about
/// (searches, folders) survive a rewrite, as do unknown top-level keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarIndex {
    #[serde(default)]
    pub items: Vec<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StarIndex {
    /// Append a record unless a structurally identical one is already present.
    ///
    /// Returns true if the record was added.
    pub fn add(&mut self, record: &StarRecord) -> serde_json::Result<bool> {
        let value = serde_json::to_value(record)?;
        if self.items.contains(&value) {
            return Ok(false);
        }
        self.items.push(value);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_deduplicated() {
        let mut index = StarIndex::default();
        let record = StarRecord::file("2023-01-15", "notes/2023/01/2023-01-15.md");

        assert!(index.add(&record).unwrap());
        assert!(!index.add(&record).unwrap());
        assert_eq!(index.items.len(), 1);
        assert_eq!(index.items[0]["path"], "notes/2023/01/2023-01-15.md");
    }

    #[test]
    fn test_records_differing_in_path_are_both_kept() {
        let mut index = StarIndex::default();
        index.add(&StarRecord::file("a", "x/a.md")).unwrap();
        index.add(&StarRecord::file("a", "y/a.md")).unwrap();
        assert_eq!(index.items.len(), 2);
    }

    #[test]
    fn test_unknown_items_and_keys_survive() {
        let json = r#"{"items": [{"type": "search", "title": "todo", "query": "todo"}], "version": 2}"#;
        let mut index: StarIndex = serde_json::from_str(json).unwrap();
        index.add(&StarRecord::file("n", "n.md")).unwrap();

        let out = serde_json::to_value(&index).unwrap();
        assert_eq!(out["version"], 2);
        assert_eq!(out["items"][0]["type"], "search");
        assert_eq!(out["items"][1]["type"], "file");
        assert_eq!(out["items"][1]["path"], "n.md");
    }

    #[test]
    fn test_serialized_record_shape() {
        let value = serde_json::to_value(StarRecord::file("t", "p.md")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "file", "title": "t", "path": "p.md"})
        );
    }
}
