//! Pipeline driver
//!
//! Loads the allowlist, writes the three per-source files (concurrently
//! unless disabled) and, once all three exist, the consolidated file.

use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::config::PipelineConfig;
use crate::consolidate::{ConsolidationSummary, consolidate};
use crate::error::Result;
use crate::filter::{Allowlist, load_allowlist};
use crate::registry::Registry;
use crate::writer::{SourceSummary, write_source};

/// Outcome of a full pipeline run
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    /// Distinct identifiers in the allowlist; 0 when filtering was off
    pub allowlist_size: usize,
    /// One summary per registry, in consolidation order
    pub sources: Vec<SourceSummary>,
    pub consolidated: ConsolidationSummary,
    pub elapsed: Duration,
}

/// Run the whole pipeline described by `config`
///
/// # Errors
/// Propagates the first error of any stage; output files already written
/// are left in place
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary> {
    let start = Instant::now();

    let allowlist = load_allowlist(config.allowlist.as_deref())?;
    let sources = write_sources(config, &allowlist)?;

    // Per-source files are closed at this point
    let outputs: Vec<_> = Registry::ALL
        .iter()
        .map(|&registry| (registry, config.output_path(registry)))
        .collect();
    let inputs: Vec<_> = outputs
        .iter()
        .map(|(registry, path)| (*registry, path.as_path()))
        .collect();
    let consolidated = consolidate(&inputs, &config.consolidated_path())?;

    let elapsed = start.elapsed();
    log::info!("Pipeline finished in {:.3}s", elapsed.as_secs_f64());

    Ok(PipelineSummary {
        allowlist_size: allowlist.len(),
        sources,
        consolidated,
        elapsed,
    })
}

/// Write the three per-source files, in parallel when configured
///
/// Writers share nothing but the read-only allowlist and touch disjoint
/// files. Summaries come back in [`Registry::ALL`] order either way.
pub fn write_sources(config: &PipelineConfig, allowlist: &Allowlist) -> Result<Vec<SourceSummary>> {
    let write_one = |registry: Registry| {
        write_source(
            &config.output_path(registry),
            config.sources.get(registry),
            registry,
            allowlist,
        )
    };

    if config.parallel {
        Registry::ALL.par_iter().map(|&r| write_one(r)).collect()
    } else {
        Registry::ALL.iter().map(|&r| write_one(r)).collect()
    }
}
