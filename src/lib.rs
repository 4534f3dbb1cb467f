//! A Rust library for merging the PGFN open debt-registry datasets.
//!
//! The Procuradoria-Geral da Fazenda Nacional publishes its active-debt roll
//! as three zipped CSV datasets (FGTS, Previdenciário, Não Previdenciário)
//! with different layouts. This crate:
//! - optionally keeps only the rows of a CPF/CNPJ allowlist,
//! - writes one tagged CSV per dataset,
//! - consolidates the three into a single 17-column CSV.

pub mod config;
pub mod consolidate;
pub mod download;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod reader;
pub mod registry;
pub mod schema;
pub mod utils;
pub mod writer;

// Re-export the most common types for easier use
pub use config::{DownloadConfig, PipelineConfig, SourceDirs};
pub use error::{PgfnError, Result};
pub use registry::Registry;
pub use schema::{CANONICAL_COLUMNS, CanonicalRecord};

// Pipeline stages
pub use consolidate::{ConsolidationSummary, consolidate};
pub use filter::{Allowlist, load_allowlist, normalize};
pub use pipeline::{PipelineSummary, run};
pub use reader::{SourceLine, SourceReader, read_records};
pub use writer::{SourceSummary, write_source};

// Archive acquisition
pub use download::download_all;
