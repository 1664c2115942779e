//! dayone2obs - Day One export to Obsidian converter
//!
//! Turns a Day One JSON export into a folder of markdown notes with front
//! matter and tags, relocates embedded photos, and stars favorite entries in
//! the enclosing vault.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ConvertError;
