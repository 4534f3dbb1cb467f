//! CSV file discovery
//!
//! Source directories are scanned non-recursively. Files are returned in
//! directory listing order; no sorting is applied.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PgfnError, Result};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Whether a path names a `.csv` file (extension compared case-insensitively)
///
/// The name is compared as raw bytes, so names that are not valid UTF-8
/// still match.
#[must_use]
pub fn is_csv(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        let bytes = name.as_encoded_bytes();
        bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".csv")
    })
}

/// Find all CSV files in a directory
///
/// # Arguments
/// * `dir` - Path to the directory to search
///
/// # Returns
/// The paths of the CSV files, in the order the directory listing yields them
///
/// # Errors
/// Returns an error if the directory or one of its entries cannot be read
pub fn find_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    log_operation_start("Searching for CSV files in", dir);

    let entries = fs::read_dir(dir).map_err(|e| PgfnError::io(dir, "listing directory", e))?;

    let mut csv_files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PgfnError::io(dir, "reading directory entry", e))?;
        let path = entry.path();
        if path.is_file() && is_csv(&path) {
            csv_files.push(path);
        }
    }

    if csv_files.is_empty() {
        log_warning("No CSV files found in directory", Some(dir));
    } else {
        log_operation_complete("found", dir, csv_files.len(), None);
    }

    Ok(csv_files)
}
