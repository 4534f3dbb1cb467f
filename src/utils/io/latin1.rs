//! ISO-8859-1 text IO
//!
//! The PGFN datasets are published in ISO-8859-1. Every byte maps to the
//! Unicode scalar with the same value, so decoding never fails and encoding
//! only fails for chars above `U+00FF`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::util::safe_open_file;
use crate::error::{PgfnError, Result};

/// Decode ISO-8859-1 bytes into a `String`
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Encode a string as ISO-8859-1, appending to `out`
///
/// # Errors
/// Returns the first char that has no ISO-8859-1 representation
pub fn encode_into(text: &str, out: &mut Vec<u8>) -> std::result::Result<(), char> {
    out.reserve(text.len());
    for c in text.chars() {
        let b = u8::try_from(u32::from(c)).map_err(|_| c)?;
        out.push(b);
    }
    Ok(())
}

/// Iterator over the decoded lines of an ISO-8859-1 file
///
/// Line terminators (`\n` and `\r\n`) are stripped. A trailing terminator
/// does not produce an extra empty line.
pub struct LineReader<R> {
    inner: R,
    path: PathBuf,
    buf: Vec<u8>,
    line_no: usize,
}

impl LineReader<BufReader<File>> {
    /// Open `path` for line-by-line reading
    pub fn open(path: &Path) -> Result<Self> {
        let file = safe_open_file(path, "opening ISO-8859-1 text file")?;
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> LineReader<R> {
    /// Wrap an existing buffered reader; `path` is only used in errors
    pub fn new(inner: R, path: &Path) -> Self {
        Self {
            inner,
            path: path.to_path_buf(),
            buf: Vec::with_capacity(512),
            line_no: 0,
        }
    }

    /// 1-based number of the line most recently returned
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.inner.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                self.line_no += 1;
                Some(Ok(decode(&self.buf)))
            }
            Err(e) => Some(Err(PgfnError::io(
                &self.path,
                format!("reading line {}", self.line_no + 1),
                e,
            ))),
        }
    }
}
