//! Error handling for the PGFN merge pipeline.
//!
//! Every error is fatal: the pipeline does not skip malformed lines or retry
//! failed downloads, it unwinds to the caller with one of these variants.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod util;

/// Specialized error type for the merge pipeline
#[derive(Debug, Error)]
pub enum PgfnError {
    /// Error opening, reading or writing a file or directory
    #[error("IO error while {context} ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        context: String,
        #[source]
        source: io::Error,
    },

    /// A record or header does not have the shape its registry expects
    #[error("Format error in {}{}: {message}", .path.display(), line_suffix(.line))]
    Format {
        path: PathBuf,
        line: Option<usize>,
        message: String,
    },

    /// A row's field count differs from its registry's layout
    #[error("{registry} record has unexpected format: expected {expected} fields, found {found}")]
    FieldCount {
        registry: &'static str,
        expected: usize,
        found: usize,
    },

    /// A source directory holds no `.csv` file to take a header from
    #[error("Format error: no CSV file found in {}", .dir.display())]
    MissingCsv { dir: PathBuf },

    /// Fetching a source archive failed
    #[error("Download of {url} failed: {message}")]
    Download { url: String, message: String },

    /// A source archive could not be extracted
    #[error("Archive error in {}: {message}", .path.display())]
    Archive { path: PathBuf, message: String },

    /// A command line path failed validation
    #[error("{0}")]
    Validation(String),
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

impl PgfnError {
    /// Wrap an IO error with the path and operation it belongs to
    pub fn io(path: impl AsRef<Path>, context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            context: context.into(),
            source,
        }
    }

    /// Build a format error for a given file and optional 1-based line
    pub fn format(path: impl AsRef<Path>, line: Option<usize>, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.as_ref().to_path_buf(),
            line,
            message: message.into(),
        }
    }

    /// Convert a `csv` error, keeping IO failures as [`PgfnError::Io`]
    pub fn csv(path: impl AsRef<Path>, context: impl Into<String>, error: csv::Error) -> Self {
        let line = error.position().and_then(|p| usize::try_from(p.line()).ok());
        match error.into_kind() {
            csv::ErrorKind::Io(source) => Self::io(path, context, source),
            kind => Self::format(path, line, format!("{}: {kind:?}", context.into())),
        }
    }

    /// Whether this error is one of the structural (format) kinds
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::Format { .. } | Self::FieldCount { .. } | Self::MissingCsv { .. }
        )
    }

    /// Whether this error came from the filesystem
    #[must_use]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PgfnError>;
