use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{CommandFactory, Parser, error::ErrorKind};
use log::info;
use pgfn_merge::error::util::{validate_directory, validate_file, validate_output_directory};
use pgfn_merge::{DownloadConfig, PipelineConfig, Registry, SourceDirs, download_all};
use tempfile::TempDir;

/// Merge the PGFN debt-registry datasets into per-source and consolidated CSV files
#[derive(Parser, Debug)]
#[command(name = "pgfn-merge")]
#[command(version)]
struct Cli {
    /// Directory receiving the output files (must exist and be writable)
    #[arg(short, long)]
    output: PathBuf,

    /// File with the CPF/CNPJ identifiers to keep, one per line
    #[arg(short, long, visible_alias = "arqcnpj")]
    allowlist: Option<PathBuf>,

    /// Directory with the FGTS CSV files
    #[arg(long, visible_alias = "dirfgts")]
    fgts_dir: Option<PathBuf>,

    /// Directory with the Previdenciário CSV files
    #[arg(long, visible_alias = "dirprev")]
    prev_dir: Option<PathBuf>,

    /// Directory with the Não Previdenciário CSV files
    #[arg(long, visible_alias = "dirnprev")]
    nao_prev_dir: Option<PathBuf>,

    /// Write the three per-source files one after the other
    #[arg(long)]
    sequential: bool,

    /// Keep downloaded archives' directories instead of deleting them on exit
    #[arg(long)]
    keep_downloads: bool,
}

impl Cli {
    /// Explicit source directories: all three, none, or a usage error
    fn source_dirs(&self) -> Option<SourceDirs> {
        match (&self.fgts_dir, &self.prev_dir, &self.nao_prev_dir) {
            (Some(fgts), Some(prev), Some(nao_prev)) => Some(SourceDirs::new(fgts, prev, nao_prev)),
            (None, None, None) => None,
            _ => Cli::command()
                .error(
                    ErrorKind::MissingRequiredArgument,
                    "--fgts-dir, --prev-dir and --nao-prev-dir must be given together",
                )
                .exit(),
        }
    }
}

/// Temporary download directories, removed on drop unless kept
struct DownloadDirs {
    _dirs: Vec<TempDir>,
    sources: SourceDirs,
}

fn create_download_dirs(keep: bool) -> anyhow::Result<DownloadDirs> {
    let mut dirs = Vec::with_capacity(Registry::ALL.len());
    let mut paths = Vec::with_capacity(Registry::ALL.len());
    for _ in Registry::ALL {
        let dir = tempfile::Builder::new()
            .prefix("pgfn_")
            .tempdir()
            .context("Failed to create temporary download directory")?;
        if keep {
            paths.push(dir.into_path());
        } else {
            paths.push(dir.path().to_path_buf());
            dirs.push(dir);
        }
    }
    let [fgts, prev, nao_prev]: [PathBuf; 3] = paths
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected one download directory per registry"))?;

    Ok(DownloadDirs {
        _dirs: dirs,
        sources: SourceDirs::new(fgts, prev, nao_prev),
    })
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    validate_output_directory(&cli.output, "output directory")?;
    if let Some(allowlist) = &cli.allowlist {
        validate_file(allowlist, "CPF/CNPJ allowlist")?;
    }

    let start = Instant::now();

    // Held until the pipeline is done so temporary directories outlive it
    let mut downloads = None;
    let sources = match cli.source_dirs() {
        Some(sources) => {
            for registry in Registry::ALL {
                validate_directory(sources.get(registry), registry.name())?;
            }
            sources
        }
        None => {
            let dirs = create_download_dirs(cli.keep_downloads)?;
            let config = DownloadConfig::from_env();
            let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
            runtime.block_on(download_all(&dirs.sources, &config))?;
            let sources = dirs.sources.clone();
            downloads = Some(dirs);
            sources
        }
    };

    info!("Parameters:");
    if let Some(allowlist) = &cli.allowlist {
        info!("  Allowlist file = {}", allowlist.display());
    }
    for registry in Registry::ALL {
        info!("  {} directory = {}", registry.name(), sources.get(registry).display());
    }
    info!("  Output directory = {}", cli.output.display());

    let mut config = PipelineConfig::new(sources, &cli.output).with_parallel(!cli.sequential);
    if let Some(allowlist) = &cli.allowlist {
        config = config.with_allowlist(allowlist);
    }

    let summary = pgfn_merge::run(&config)?;
    for source in &summary.sources {
        info!(
            "{}: {} files, {} rows read, {} rows written",
            source.registry, source.files, source.read, source.written
        );
    }
    info!(
        "Consolidated {} rows into {}",
        summary.consolidated.total_rows(),
        summary.consolidated.output.display()
    );

    drop(downloads);
    info!("Script executed in {:.3}s", start.elapsed().as_secs_f64());
    Ok(())
}

fn main() -> ExitCode {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
