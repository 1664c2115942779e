//! Front matter and tag section assembly

use crate::domain::entry::JournalEntry;
use regex::Regex;
use std::sync::OnceLock;

/// Tag marking notes that came from a Day One export
pub const DEFAULT_PROVENANCE_TAG: &str = "dayone";

const TAGS_HEADING: &str = "## Tags";

fn whitespace_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s").unwrap())
}

/// Replace each whitespace character with an underscore
pub fn normalize_tag(tag: &str) -> String {
    whitespace_regex().replace_all(tag, "_").into_owned()
}

/// Value of the `journal` front matter key.
///
/// The default Day One journal ("Journal") becomes `main`.
pub fn journal_key(journal_name: &str) -> String {
    let lower = journal_name.to_lowercase();
    if lower == "journal" {
        "main".to_string()
    } else {
        lower
    }
}

/// Build the `---` delimited front matter block, including its trailing newline
pub fn build_front_matter(entry: &JournalEntry, journal_name: &str) -> String {
    let journal_line = format!("journal: {}", journal_key(journal_name));

    let yaml = match &entry.location {
        Some(location) => {
            let address_line = match &location.address {
                Some(address) => format!("address: \"{}\"", address),
                None => String::new(),
            };
            format!(
                "location: [{}, {}]\n{}\n{}",
                location.latitude, location.longitude, address_line, journal_line
            )
        }
        None => journal_line,
    };

    format!("---\n{}\n---\n", yaml)
}

/// Build the trailing tag section.
///
/// Order is provenance tag, journal tag, then entry tags as exported. No de-duplication.
pub fn build_tag_section(entry: &JournalEntry, journal_name: &str, provenance_tag: &str) -> String {
    let mut tags = vec![
        format!("#{}", normalize_tag(provenance_tag)),
        format!("#{}", normalize_tag(&journal_name.to_lowercase())),
    ];
    tags.extend(entry.tags.iter().map(|t| format!("#{}", normalize_tag(t))));

    format!("{}\n{}", TAGS_HEADING, tags.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(json: &str) -> JournalEntry {
        JournalEntry::from_value(serde_json::from_str(json).unwrap()).unwrap()
    }

    #[test]
    fn test_journal_key_remaps_default_journal() {
        assert_eq!(journal_key("Journal"), "main");
        assert_eq!(journal_key("journal"), "main");
        assert_eq!(journal_key("Travel"), "travel");
        assert_eq!(journal_key("Work Log"), "work log");
    }

    #[test]
    fn test_front_matter_without_location() {
        let e = entry(r#"{"creationDate": "2023-01-15T08:30:00Z"}"#);
        assert_eq!(build_front_matter(&e, "Journal"), "---\njournal: main\n---\n");
    }

    #[test]
    fn test_front_matter_with_address() {
        let e = entry(
            r#"{"creationDate": "2023-01-15T08:30:00Z",
                "location": {"latitude": 48.8566, "longitude": 2.3522, "address": "Paris"}}"#,
        );
        assert_eq!(
            build_front_matter(&e, "Travel"),
            "---\nlocation: [48.8566, 2.3522]\naddress: \"Paris\"\njournal: travel\n---\n"
        );
    }

    #[test]
    fn test_front_matter_location_without_address_leaves_empty_line() {
        let e = entry(
            r#"{"creationDate": "2023-01-15T08:30:00Z",
                "location": {"latitude": 1.5, "longitude": -3.25}}"#,
        );
        assert_eq!(
            build_front_matter(&e, "Journal"),
            "---\nlocation: [1.5, -3.25]\n\njournal: main\n---\n"
        );
    }

    #[test]
    fn test_address_quotes_are_not_escaped() {
        let e = entry(
            r#"{"creationDate": "2023-01-15T08:30:00Z",
                "location": {"latitude": 1.0, "longitude": 2.0, "address": "The \"Inn\""}}"#,
        );
        assert!(build_front_matter(&e, "Journal").contains("address: \"The \"Inn\"\""));
    }

    #[test]
    fn test_tag_section_order_and_normalization() {
        let e = entry(
            r#"{"creationDate": "2023-01-15T08:30:00Z", "tags": ["road trip", "family", "road trip"]}"#,
        );
        assert_eq!(
            build_tag_section(&e, "Journal", DEFAULT_PROVENANCE_TAG),
            "## Tags\n#dayone #journal #road_trip #family #road_trip"
        );
    }

    #[test]
    fn test_tag_section_without_entry_tags() {
        let e = entry(r#"{"creationDate": "2023-01-15T08:30:00Z"}"#);
        assert_eq!(
            build_tag_section(&e, "Work Log", "import"),
            "## Tags\n#import #work_log"
        );
    }

    #[test]
    fn test_normalize_tag_replaces_each_whitespace() {
        assert_eq!(normalize_tag("a b\tc"), "a_b_c");
        assert_eq!(normalize_tag("a  b"), "a__b");
    }
}
