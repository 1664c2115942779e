//! Day One export model

use serde::Deserialize;
use serde_json::{Number, Value};

/// Top-level export document.
///
/// Entries stay raw so a single malformed entry can be rejected on its own
/// without failing the whole document.
#[derive(Debug, Clone, Deserialize)]
pub struct Export {
    pub entries: Vec<Value>,
}

impl Export {
    /// Parse an export document from JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// The `creationDate` of a raw entry, if it has one
pub fn raw_creation_date(raw: &Value) -> Option<&str> {
    raw.get("creationDate").and_then(Value::as_str)
}

/// One journaled record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Timestamp string, used verbatim for naming (e.g. 2023-01-15T08:30:00Z)
    pub creation_date: String,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub photos: Vec<PhotoRef>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub location: Option<Location>,

    #[serde(default)]
    pub starred: bool,
}

impl JournalEntry {
    /// Decode one raw export entry
    pub fn from_value(raw: Value) -> serde_json::Result<Self> {
        serde_json::from_value(raw)
    }
}

/// Reference to an embedded photo
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoRef {
    pub identifier: String,
    pub md5: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl PhotoRef {
    /// File name of the asset inside the export's photos directory
    pub fn source_file_name(&self) -> String {
        format!("{}.{}", self.md5, self.kind)
    }
}

/// Geolocation attached to an entry.
///
/// Coordinates stay as JSON numbers so they are printed exactly as exported.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub latitude: Number,
    pub longitude: Number,
    #[serde(default)]
    pub address: Option<String>,
}
