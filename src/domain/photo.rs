//! Inline photo tokens and relocated-asset links

use crate::domain::entry::PhotoRef;

/// Name of the asset directory in both the export and the output tree
pub const PHOTOS_DIR: &str = "photos";

/// Placeholder Day One leaves in entry text for an embedded photo
pub fn inline_token(photo: &PhotoRef) -> String {
    format!("![](dayone-moment://{})", photo.identifier.to_uppercase())
}

/// Destination file name: `<creationDate>-<index>.<type>`
pub fn destination_file_name(creation_date: &str, index: usize, photo: &PhotoRef) -> String {
    format!("{}-{}.{}", creation_date, index, photo.kind)
}

/// Destination path relative to the output root, always `/`-separated
pub fn destination_relative_path(creation_date: &str, index: usize, photo: &PhotoRef) -> String {
    format!(
        "{}/{}",
        PHOTOS_DIR,
        destination_file_name(creation_date, index, photo)
    )
}

/// Embed link pointing at a relocated asset
pub fn relocated_link(relative_path: &str) -> String {
    format!("![[{}]]", relative_path)
}

/// Replace every occurrence of the photo's inline token with a link to its new location
pub fn substitute_token(text: &str, photo: &PhotoRef, relative_path: &str) -> String {
    text.replace(&inline_token(photo), &relocated_link(relative_path))
}
