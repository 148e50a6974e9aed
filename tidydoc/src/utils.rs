// src/utils.rs
use crate::models::SortReport;
use anyhow::{Context as _, Result};
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads a file as UTF-8 text.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}

/// Writes `content` to `path` through a temporary file in the same directory,
/// so a failed write never leaves a truncated file behind.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written, or
/// moved into place.
pub fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write output for: {}", path.display()))?;
    file.persist(path)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    Ok(())
}

/// Prints the reports for sections that were actually reordered.
pub fn print_reports(reports: &[SortReport]) {
    for report in reports.iter().filter(|report| report.is_reordered()) {
        println!("{report}");
    }
}
