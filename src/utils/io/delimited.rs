//! `;`-delimited records through the csv crate
//!
//! The PGFN files never quote fields, so quoting is disabled in both
//! directions and `"` is an ordinary byte. Fields travel as ISO-8859-1
//! [`ByteRecord`]s.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ByteRecord, QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use smallvec::SmallVec;

use super::latin1::{decode, encode_into};
use crate::error::util::{safe_create_file, safe_open_file};
use crate::error::{PgfnError, Result};

/// Field delimiter of every input and output file
pub const DELIMITER: u8 = b';';

/// Open a `;`-delimited file whose first line is a header
///
/// Records may have any number of fields; callers check counts. Empty lines
/// are skipped by the csv reader.
pub fn open_record_reader(path: &Path) -> Result<csv::Reader<File>> {
    let file = safe_open_file(path, "opening delimited file")?;
    Ok(ReaderBuilder::new()
        .delimiter(DELIMITER)
        .quoting(false)
        .flexible(true)
        .has_headers(true)
        .from_reader(file))
}

/// Decode every field of a byte record from ISO-8859-1
#[must_use]
pub fn decode_record(record: &ByteRecord) -> SmallVec<[String; 17]> {
    record.iter().map(decode).collect()
}

/// 1-based line a record started on, when known
#[must_use]
pub fn record_line(record: &ByteRecord) -> Option<usize> {
    record.position().and_then(|p| usize::try_from(p.line()).ok())
}

/// Buffered `;`-delimited writer encoding ISO-8859-1
///
/// Field counts may differ between records. Lines end with `\n`.
pub struct RecordWriter {
    inner: csv::Writer<File>,
    path: PathBuf,
    record: ByteRecord,
    scratch: Vec<u8>,
    rows: usize,
}

impl RecordWriter {
    /// Create (or truncate) `path` for writing
    pub fn create(path: &Path) -> Result<Self> {
        let file = safe_create_file(path, "creating output file")?;
        let inner = WriterBuilder::new()
            .delimiter(DELIMITER)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .flexible(true)
            .from_writer(file);
        Ok(Self {
            inner,
            path: path.to_path_buf(),
            record: ByteRecord::new(),
            scratch: Vec::with_capacity(64),
            rows: 0,
        })
    }

    /// Write one record
    ///
    /// # Errors
    /// Returns a format error if a field holds a char above `U+00FF`, or an
    /// IO error
    pub fn write_fields<'a, I>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.record.clear();
        for field in fields {
            self.scratch.clear();
            encode_into(field, &mut self.scratch).map_err(|c| {
                PgfnError::format(
                    &self.path,
                    Some(self.rows + 1),
                    format!("character {c:?} cannot be encoded as ISO-8859-1"),
                )
            })?;
            self.record.push_field(&self.scratch);
        }
        self.inner
            .write_byte_record(&self.record)
            .map_err(|e| PgfnError::csv(&self.path, "writing record", e))?;
        self.rows += 1;
        Ok(())
    }

    /// Flush buffered output, returning the number of records written
    pub fn finish(mut self) -> Result<usize> {
        self.inner
            .flush()
            .map_err(|e| PgfnError::io(&self.path, "flushing output file", e))?;
        Ok(self.rows)
    }
}
