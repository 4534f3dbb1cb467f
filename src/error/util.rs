//! Utility functions for error handling
//!
//! Helpers that open files or check paths and turn failures into
//! [`PgfnError`] values carrying the offending path.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{PgfnError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                format!("{purpose} (permission denied - check file permissions)")
            }
            io::ErrorKind::NotFound => format!("{purpose} (file not found)"),
            _ => purpose.to_string(),
        };
        PgfnError::io(path, context, e)
    })
}

/// Create (or truncate) an output file with rich error information
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::create(path).map_err(|e| PgfnError::io(path, purpose, e))
}

/// Check that a file exists, is not a directory and can be opened for reading
pub fn validate_file(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() || path.is_dir() {
        return Err(PgfnError::Validation(format!(
            "Make sure the file '{}' exists and is readable ({purpose})",
            path.display()
        )));
    }

    fs::File::open(path).map(|_| ()).map_err(|_| {
        PgfnError::Validation(format!(
            "Make sure the file '{}' exists and is readable ({purpose})",
            path.display()
        ))
    })
}

/// Check if a directory exists and is readable
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.is_dir() {
        return Err(PgfnError::Validation(format!(
            "Make sure the directory '{}' exists and is readable ({purpose})",
            path.display()
        )));
    }

    // Listing the directory is the only portable read-permission probe
    fs::read_dir(path).map(|_| ()).map_err(|_| {
        PgfnError::Validation(format!(
            "Make sure the directory '{}' exists and is readable ({purpose})",
            path.display()
        ))
    })
}

/// Check if a directory exists and can be both read and written
pub fn validate_output_directory(path: &Path, purpose: &str) -> Result<()> {
    validate_directory(path, purpose)?;

    let writable = fs::metadata(path)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false);
    if !writable {
        return Err(PgfnError::Validation(format!(
            "Make sure the directory '{}' exists and is readable and writable ({purpose})",
            path.display()
        )));
    }

    Ok(())
}
