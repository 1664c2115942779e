//! Output formatting utilities

use crate::application::ConversionReport;

/// Format a run summary for display
pub fn format_report(report: &ConversionReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Notes written: {}\n", report.notes_written.len()));
    output.push_str(&format!("Photos copied: {}\n", report.photos_copied));
    output.push_str(&format!("Photos recovered: {}\n", report.photos_recovered));
    output.push_str(&format!(
        "Photos missing: {}\n",
        report.unresolved_photos.len()
    ));
    for photo in &report.unresolved_photos {
        output.push_str(&format!("  {}  {}\n", photo.creation_date, photo.file_name));
    }

    if !report.failed_entries.is_empty() {
        output.push_str(&format!(
            "Entries failed: {}\n",
            report.failed_entries.len()
        ));
        for failed in &report.failed_entries {
            output.push_str(&format!("  {}  {}\n", failed.creation_date, failed.reason));
        }
    }

    if let Some(root) = &report.vault_root {
        output.push_str(&format!(
            "Stars added: {} ({})\n",
            report.stars_added,
            root.display()
        ));
    }

    output
}
