//! Per-source output files
//!
//! Each registry's input directory is flattened into one CSV that keeps the
//! registry's own layout, gains an `ARQUIVO_ORIGEM` column, and holds only
//! the rows admitted by the allowlist.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PgfnError, Result};
use crate::filter::Allowlist;
use crate::reader::{SourceReader, read_header};
use crate::registry::Registry;
use crate::schema::{ORIGIN_COLUMN, split_fields};
use crate::utils::io::{RecordWriter, find_csv_files};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Outcome of writing one per-source file
#[derive(Debug, Clone)]
pub struct SourceSummary {
    pub registry: Registry,
    /// File that was written
    pub output: PathBuf,
    /// Number of input CSV files read
    pub files: usize,
    /// Data lines read across all input files
    pub read: usize,
    /// Data lines written (excluding the header)
    pub written: usize,
    pub elapsed: Duration,
}

impl SourceSummary {
    /// Data lines dropped by the allowlist
    #[must_use]
    pub fn filtered_out(&self) -> usize {
        self.read - self.written
    }
}

/// Write the per-source file of `registry`
///
/// The header is copied from the first CSV file of `input_dir` with
/// `;ARQUIVO_ORIGEM` appended. Every data line of every CSV file whose
/// identifier passes `allowlist` is then written unchanged, followed by
/// `;` and the registry's origin tag. Field counts are not checked here.
///
/// # Arguments
/// * `output` - File to create or overwrite
/// * `input_dir` - Directory with the registry's CSV files
/// * `registry` - Registry the files belong to
/// * `allowlist` - Identifiers to keep; empty keeps everything
///
/// # Errors
/// Returns [`PgfnError::MissingCsv`] if `input_dir` has no CSV file, a
/// format error for a data line without `;`, or an IO error
pub fn write_source(
    output: &Path,
    input_dir: &Path,
    registry: Registry,
    allowlist: &Allowlist,
) -> Result<SourceSummary> {
    let start = Instant::now();
    log_operation_start(&format!("Creating {registry} output"), output);

    let files = find_csv_files(input_dir)?;
    let header_file = files
        .first()
        .ok_or_else(|| PgfnError::MissingCsv { dir: input_dir.to_path_buf() })?;
    let header = read_header(header_file)?;

    let mut writer = RecordWriter::create(output)?;
    let header_fields = split_fields(&header);
    writer.write_fields(header_fields.iter().copied().chain([ORIGIN_COLUMN]))?;

    let file_count = files.len();
    let tag = registry.origin_tag();
    let mut read = 0;
    let mut written = 0;

    for line in SourceReader::from_files(files) {
        let line = line?;
        read += 1;

        if allowlist.admits(line.identifier()?) {
            writer.write_fields(line.fields().iter().copied().chain([tag]))?;
            written += 1;
        }
    }

    writer.finish()?;
    let elapsed = start.elapsed();
    log_operation_complete("wrote", output, written, Some(elapsed));
    if !allowlist.is_empty() {
        log::info!("{registry}: kept {written} of {read} rows");
    }

    Ok(SourceSummary {
        registry,
        output: output.to_path_buf(),
        files: file_count,
        read,
        written,
        elapsed,
    })
}
