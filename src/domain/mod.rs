//! Domain layer - Export model and text assembly

pub mod entry;
pub mod front_matter;
pub mod markdown;
pub mod note_path;
pub mod photo;
pub mod star;

pub use entry::{Export, JournalEntry, Location, PhotoRef};
pub use note_path::NotePath;
pub use star::{StarIndex, StarRecord};
