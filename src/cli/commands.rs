//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dayone2obs")]
#[command(about = "Convert a Day One JSON export into Obsidian notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Day One export file (e.g. Journal.json from the unzipped export)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Folder to write notes and photos into
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Directory searched for photos missing from the export (repeatable)
    #[arg(short, long = "backup-dir", value_name = "DIR")]
    pub backup_dirs: Vec<PathBuf>,

    /// Journal name (default: input file name before the first dot)
    #[arg(long)]
    pub journal_name: Option<String>,

    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not touch the vault's starred index
    #[arg(long)]
    pub no_stars: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
