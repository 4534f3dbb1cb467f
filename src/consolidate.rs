//! Consolidated output
//!
//! Reads the three per-source files and rewrites every row in the canonical
//! 17-column layout, FGTS first, then Previdenciário, then Não
//! Previdenciário. The first malformed row aborts the run; rows written
//! before it stay on disk.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use smallvec::SmallVec;

use crate::error::{PgfnError, Result};
use crate::registry::Registry;
use crate::schema::CANONICAL_COLUMNS;
use crate::utils::io::{RecordWriter, decode_record, open_record_reader, record_line};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Outcome of a consolidation
#[derive(Debug, Clone)]
pub struct ConsolidationSummary {
    pub output: PathBuf,
    /// Rows written per registry, in consolidation order
    pub rows: Vec<(Registry, usize)>,
    pub elapsed: Duration,
}

impl ConsolidationSummary {
    /// Data rows written across all registries
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.rows.iter().map(|(_, n)| n).sum()
    }

    /// Data rows written for one registry
    #[must_use]
    pub fn rows_for(&self, registry: Registry) -> usize {
        self.rows
            .iter()
            .find(|(r, _)| *r == registry)
            .map_or(0, |(_, n)| *n)
    }
}

/// Write the consolidated file from per-source files
///
/// # Arguments
/// * `inputs` - Per-source files with their registry, in the order to emit
/// * `output` - File to create or overwrite
///
/// # Errors
/// Returns a format error on the first row whose field count does not match
/// its registry, or an IO error
pub fn consolidate(inputs: &[(Registry, &Path)], output: &Path) -> Result<ConsolidationSummary> {
    let start = Instant::now();
    log_operation_start("Creating consolidated output", output);

    let mut writer = RecordWriter::create(output)?;
    writer.write_fields(CANONICAL_COLUMNS)?;

    let mut rows = Vec::with_capacity(inputs.len());
    for &(registry, path) in inputs {
        let written = append_registry(&mut writer, registry, path)?;
        rows.push((registry, written));
    }

    writer.finish()?;
    let summary = ConsolidationSummary {
        output: output.to_path_buf(),
        rows,
        elapsed: start.elapsed(),
    };
    log_operation_complete("wrote", output, summary.total_rows(), Some(summary.elapsed));
    Ok(summary)
}

/// Append one per-source file, remapped, to the consolidated writer
///
/// The per-source writer never emits blank lines, so the csv reader skipping
/// them loses nothing.
fn append_registry(writer: &mut RecordWriter, registry: Registry, path: &Path) -> Result<usize> {
    log_operation_start(&format!("Merging {registry} file"), path);

    let mut reader = open_record_reader(path)?;
    let mut written = 0;
    for record in reader.byte_records() {
        let record = record.map_err(|e| PgfnError::csv(path, "reading record", e))?;
        let decoded = decode_record(&record);
        let fields: SmallVec<[&str; 17]> = decoded.iter().map(String::as_str).collect();
        let canonical = registry
            .remap(&fields)
            .map_err(|e| PgfnError::format(path, record_line(&record), e.to_string()))?;
        writer.write_fields(canonical.fields().iter().copied())?;
        written += 1;
    }

    Ok(written)
}
