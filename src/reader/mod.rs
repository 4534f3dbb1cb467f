//! Module for reading `;`-delimited PGFN data files.
//!
//! A source directory holds one or more CSV files sharing a layout. Each
//! file starts with a header line; [`SourceReader`] skips it and yields every
//! other line of every file, lazily, in directory listing order.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use smallvec::SmallVec;

use crate::error::{PgfnError, Result};
use crate::filter::identifier_prefix;
use crate::schema::split_fields;
use crate::utils::io::{LineReader, find_csv_files};

/// One data line of a source file
#[derive(Debug, Clone)]
pub struct SourceLine {
    /// The line as read, without terminator
    pub raw: String,
    /// File the line came from
    pub path: Arc<Path>,
    /// 1-based line number inside `path` (the header is line 1)
    pub line: usize,
}

impl SourceLine {
    /// The line split on `;`
    #[must_use]
    pub fn fields(&self) -> SmallVec<[&str; 16]> {
        split_fields(&self.raw)
    }

    /// Raw identifier: the text before the first `;`
    ///
    /// # Errors
    /// Returns a format error if the line has no `;`
    pub fn identifier(&self) -> Result<&str> {
        identifier_prefix(&self.raw).ok_or_else(|| {
            PgfnError::format(
                &self.path,
                Some(self.line),
                "line has no ';' separator, cannot extract CPF/CNPJ",
            )
        })
    }
}

/// Read the header (first line) of a CSV file
///
/// # Errors
/// Returns an IO error if the file cannot be read, or a format error if it
/// is empty
pub fn read_header(path: &Path) -> Result<String> {
    LineReader::open(path)?
        .next()
        .unwrap_or_else(|| Err(PgfnError::format(path, Some(1), "file is empty, expected a header line")))
}

/// Lazy iterator over the data lines of a set of CSV files
pub struct SourceReader {
    files: Vec<PathBuf>,
    next_file: usize,
    current: Option<(Arc<Path>, LineReader<BufReader<File>>)>,
}

impl SourceReader {
    /// Read every CSV file of `dir`
    ///
    /// # Errors
    /// Returns an IO error if the directory cannot be listed
    pub fn open(dir: &Path) -> Result<Self> {
        Ok(Self::from_files(find_csv_files(dir)?))
    }

    /// Read an explicit list of files, in the given order
    #[must_use]
    pub fn from_files(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            next_file: 0,
            current: None,
        }
    }

    fn open_next_file(&mut self) -> Option<Result<()>> {
        let path = self.files.get(self.next_file)?;
        self.next_file += 1;
        log::info!("Processing file {}", path.display());

        let mut reader = match LineReader::open(path) {
            Ok(reader) => reader,
            Err(e) => return Some(Err(e)),
        };
        // Skip the header line
        if let Some(Err(e)) = reader.next() {
            return Some(Err(e));
        }
        self.current = Some((Arc::from(path.as_path()), reader));
        Some(Ok(()))
    }
}

impl Iterator for SourceReader {
    type Item = Result<SourceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((path, reader)) = &mut self.current {
                match reader.next() {
                    Some(Ok(raw)) => {
                        return Some(Ok(SourceLine {
                            raw,
                            path: Arc::clone(path),
                            line: reader.line_number(),
                        }));
                    }
                    Some(Err(e)) => return Some(Err(e)),
                    None => self.current = None,
                }
            }

            // Out of lines in the current file, move to the next one
            match self.open_next_file()? {
                Ok(()) => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Iterate the data lines of every CSV file in `dir`
///
/// # Errors
/// Returns an IO error if the directory cannot be listed
pub fn read_records(dir: &Path) -> Result<SourceReader> {
    SourceReader::open(dir)
}
