#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn dayone2obs_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dayone2obs").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `Journal.json` with the given entries JSON array and return its path
pub fn write_export(dir: &Path, name: &str, entries: &str) -> PathBuf {
    fs::create_dir_all(dir.join("photos")).unwrap();
    let path = dir.join(name);
    fs::write(&path, format!(r#"{{"metadata": {{"version": "1.0"}}, "entries": {}}}"#, entries))
        .unwrap();
    path
}

/// Place a photo in the export's photos directory
pub fn write_photo(export_dir: &Path, file_name: &str, bytes: &[u8]) {
    fs::create_dir_all(export_dir.join("photos")).unwrap();
    fs::write(export_dir.join("photos").join(file_name), bytes).unwrap();
}

pub fn read_note(output: &Path, creation_date: &str) -> String {
    let path = output
        .join(&creation_date[0..4])
        .join(&creation_date[5..7])
        .join(format!("{}.md", creation_date));
    fs::read_to_string(path).unwrap()
}
