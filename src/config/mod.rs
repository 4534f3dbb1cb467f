//! Configuration for the merge pipeline and archive downloads.

use std::path::{Path, PathBuf};

use crate::registry::Registry;

/// File name of the consolidated output
pub const CONSOLIDATED_FILE_NAME: &str = "base_consolidada.csv";

/// Where the PGFN publishes its open-data archives
pub const DEFAULT_BASE_URL: &str = "http://dadosabertos.pgfn.gov.br";

/// Environment variable overriding [`DEFAULT_BASE_URL`]
pub const BASE_URL_ENV: &str = "PGFN_BASE_URL";

/// Input directory of each registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDirs {
    pub fgts: PathBuf,
    pub previdenciario: PathBuf,
    pub nao_previdenciario: PathBuf,
}

impl SourceDirs {
    #[must_use]
    pub fn new(
        fgts: impl Into<PathBuf>,
        previdenciario: impl Into<PathBuf>,
        nao_previdenciario: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fgts: fgts.into(),
            previdenciario: previdenciario.into(),
            nao_previdenciario: nao_previdenciario.into(),
        }
    }

    /// Directory holding the CSV files of `registry`
    #[must_use]
    pub fn get(&self, registry: Registry) -> &Path {
        match registry {
            Registry::Fgts => &self.fgts,
            Registry::Previdenciario => &self.previdenciario,
            Registry::NaoPrevidenciario => &self.nao_previdenciario,
        }
    }
}

/// Configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Optional file of CPF/CNPJ identifiers to keep
    pub allowlist: Option<PathBuf>,
    /// Input directory of each registry
    pub sources: SourceDirs,
    /// Directory receiving the four output files
    pub output_dir: PathBuf,
    /// Write the three per-source files concurrently
    pub parallel: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            allowlist: None,
            sources: SourceDirs::default(),
            output_dir: PathBuf::from("."),
            parallel: true,
        }
    }
}

impl PipelineConfig {
    #[must_use]
    pub fn new(sources: SourceDirs, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            sources,
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_allowlist(mut self, path: impl Into<PathBuf>) -> Self {
        self.allowlist = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Path of the per-source output of `registry`
    #[must_use]
    pub fn output_path(&self, registry: Registry) -> PathBuf {
        self.output_dir.join(registry.output_file_name())
    }

    /// Path of the consolidated output
    #[must_use]
    pub fn consolidated_path(&self) -> PathBuf {
        self.output_dir.join(CONSOLIDATED_FILE_NAME)
    }
}

/// Configuration for fetching the source archives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    /// URL prefix the archive names are appended to
    pub base_url: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl DownloadConfig {
    /// Default configuration, with the base URL taken from `PGFN_BASE_URL` if set
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map_or_else(Self::default, |base_url| Self { base_url })
    }

    /// Full URL of the archive of `registry`
    #[must_use]
    pub fn archive_url(&self, registry: Registry) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), registry.archive_name())
    }
}
