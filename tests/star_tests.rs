//! Integration tests for starred entries

#![allow(deprecated)]

use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

mod common;
use common::{dayone2obs_cmd, write_export};

const DATE: &str = "2023-01-15T08:30:00Z";

fn starred_export(dir: &std::path::Path) -> std::path::PathBuf {
    write_export(
        dir,
        "Journal.json",
        &format!(
            r#"[{{"creationDate": "{}", "text": "fav", "starred": true}},
                {{"creationDate": "2023-01-16T08:30:00Z", "text": "meh"}}]"#,
            DATE
        ),
    )
}

fn read_index(vault: &std::path::Path) -> Value {
    let raw = fs::read_to_string(vault.join(".obsidian").join("starred.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_starred_entry_added_to_index() {
    let export = TempDir::new().unwrap();
    let vault = TempDir::new().unwrap();
    fs::create_dir(vault.path().join(".obsidian")).unwrap();
    let input = starred_export(export.path());

    dayone2obs_cmd()
        .arg(&input)
        .arg(vault.path().join("DayOne"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Stars added: 1"));

    assert_eq!(
        read_index(vault.path()),
        json!({"items": [{
            "type": "file",
            "title": DATE,
            "path": format!("DayOne/2023/01/{}.md", DATE)
        }]})
    );
}

#[test]
fn test_rerun_does_not_duplicate_star() {
    let export = TempDir::new().unwrap();
    let vault = TempDir::new().unwrap();
    fs::create_dir(vault.path().join(".obsidian")).unwrap();
    let input = starred_export(export.path());

    for _ in 0..2 {
        dayone2obs_cmd()
            .arg(&input)
            .arg(vault.path().join("DayOne"))
            .assert()
            .success();
    }

    let index = read_index(vault.path());
    assert_eq!(index["items"].as_array().unwrap().len(), 1);
}

#[test]
fn test_existing_index_entries_are_kept() {
    let export = TempDir::new().unwrap();
    let vault = TempDir::new().unwrap();
    fs::create_dir(vault.path().join(".obsidian")).unwrap();
    fs::write(
        vault.path().join(".obsidian").join("starred.json"),
        r#"{"items": [{"type": "search", "title": "todo", "query": "todo"}]}"#,
    )
    .unwrap();
    let input = starred_export(export.path());

    dayone2obs_cmd()
        .arg(&input)
        .arg(vault.path().join("DayOne"))
        .assert()
        .success();

    let index = read_index(vault.path());
    let items = index["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["type"], "search");
    assert_eq!(items[1]["title"], DATE);
}

#[test]
fn test_no_stars_flag_leaves_vault_untouched() {
    let export = TempDir::new().unwrap();
    let vault = TempDir::new().unwrap();
    fs::create_dir(vault.path().join(".obsidian")).unwrap();
    let input = starred_export(export.path());

    dayone2obs_cmd()
        .arg(&input)
        .arg(vault.path().join("DayOne"))
        .arg("--no-stars")
        .assert()
        .success();

    assert!(!vault.path().join(".obsidian").join("starred.json").exists());
}

#[test]
fn test_missing_vault_is_a_warning() {
    let export = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let config = export.path().join("dayone2obs.toml");
    fs::write(&config, "vault_marker = \".no-such-vault-marker\"\n").unwrap();
    let input = starred_export(export.path());

    dayone2obs_cmd()
        .arg(&input)
        .arg(out.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes written: 2"))
        .stdout(predicate::str::contains("Stars added").not())
        .stderr(predicate::str::contains("No vault found"));
}
