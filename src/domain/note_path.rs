//! Destination path derivation for converted notes

use crate::error::{ConvertError, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Where a note lands inside the output tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePath {
    pub year: String,
    pub month: String,
    pub file_name: String,
}

impl NotePath {
    /// Derive `<YYYY>/<MM>/<creationDate>.md` from an ISO-8601-like timestamp.
    ///
    /// Year is characters 0..4, month is 5..7. Anything that does not form a
    /// real calendar month is rejected rather than guessed.
    pub fn from_creation_date(creation_date: &str) -> Result<Self> {
        let malformed = || ConvertError::MalformedTimestamp(creation_date.to_string());

        let year = creation_date.get(0..4).ok_or_else(malformed)?;
        let month = creation_date.get(5..7).ok_or_else(malformed)?;

        if !year.chars().all(|c| c.is_ascii_digit()) || !month.chars().all(|c| c.is_ascii_digit())
        {
            return Err(malformed());
        }

        let y: i32 = year.parse().map_err(|_| malformed())?;
        let m: u32 = month.parse().map_err(|_| malformed())?;
        NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(malformed)?;

        Ok(NotePath {
            year: year.to_string(),
            month: month.to_string(),
            file_name: format!("{}.md", creation_date),
        })
    }

    /// Directory of the note, relative to the output root
    pub fn dir(&self) -> PathBuf {
        PathBuf::from(&self.year).join(&self.month)
    }

    /// Full path of the note, relative to the output root
    pub fn relative(&self) -> PathBuf {
        self.dir().join(&self.file_name)
    }

    /// Note title, i.e. the file name without `.md`
    pub fn title(&self) -> &str {
        self.file_name
            .strip_suffix(".md")
            .unwrap_or(&self.file_name)
    }
}
