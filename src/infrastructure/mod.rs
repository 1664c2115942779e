//! Infrastructure layer - External I/O and persistence

pub mod assets;
pub mod config;
pub mod output_tree;
pub mod vault;

pub use config::Config;
pub use output_tree::OutputTree;
pub use vault::Vault;
