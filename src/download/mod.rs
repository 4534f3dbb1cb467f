//! Acquisition of the PGFN source archives
//!
//! The three archives are fetched concurrently, each into its own
//! directory. [`download_all`] returns once all three have been extracted,
//! or with the first error. Failures are not retried.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use futures::StreamExt;
use indicatif::MultiProgress;
use tokio::io::AsyncWriteExt;

use crate::config::{DownloadConfig, SourceDirs};
use crate::error::{PgfnError, Result};
use crate::registry::Registry;
use crate::utils::logging::{add_download_progress_bar, create_multi_progress, finish_progress_bar};

pub mod extract;

pub use extract::{entry_target, extract_zip};

/// Download and extract all three archives into `dirs`
///
/// # Returns
/// The number of files extracted per registry, in [`Registry::ALL`] order
pub async fn download_all(dirs: &SourceDirs, config: &DownloadConfig) -> Result<Vec<(Registry, usize)>> {
    let client = reqwest::Client::builder()
        .build()
        .map_err(|e| PgfnError::Download {
            url: config.base_url.clone(),
            message: e.to_string(),
        })?;
    let mp = create_multi_progress();

    let (fgts, prev, nao_prev) = tokio::try_join!(
        fetch_and_extract(&client, Registry::Fgts, config, dirs.get(Registry::Fgts), &mp),
        fetch_and_extract(
            &client,
            Registry::Previdenciario,
            config,
            dirs.get(Registry::Previdenciario),
            &mp
        ),
        fetch_and_extract(
            &client,
            Registry::NaoPrevidenciario,
            config,
            dirs.get(Registry::NaoPrevidenciario),
            &mp
        ),
    )?;

    Ok(vec![
        (Registry::Fgts, fgts),
        (Registry::Previdenciario, prev),
        (Registry::NaoPrevidenciario, nao_prev),
    ])
}

/// Fetch the archive of one registry and extract it into `dest`
pub async fn fetch_and_extract(
    client: &reqwest::Client,
    registry: Registry,
    config: &DownloadConfig,
    dest: &Path,
    mp: &MultiProgress,
) -> Result<usize> {
    let url = config.archive_url(registry);
    let start = Instant::now();
    log::info!("Downloading {url} => {}", dest.display());

    let archive = fetch_to_tempfile(client, &url, registry, mp).await?;
    log::info!(
        "Downloaded {} in {:.3}s",
        registry.archive_name(),
        start.elapsed().as_secs_f64()
    );

    let extract_start = Instant::now();
    let dest_owned: PathBuf = dest.to_path_buf();
    let extracted = tokio::task::spawn_blocking(move || extract_zip(archive, &dest_owned))
        .await
        .map_err(|e| PgfnError::Archive {
            path: dest.to_path_buf(),
            message: format!("extraction task failed: {e}"),
        })??;

    log::info!(
        "Extracted {extracted} files into {} in {:.3}s",
        dest.display(),
        extract_start.elapsed().as_secs_f64()
    );
    Ok(extracted)
}

/// Stream a response body into an anonymous temporary file
async fn fetch_to_tempfile(
    client: &reqwest::Client,
    url: &str,
    registry: Registry,
    mp: &MultiProgress,
) -> Result<File> {
    let download_error = |message: String| PgfnError::Download {
        url: url.to_string(),
        message,
    };

    let response = client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| download_error(e.to_string()))?;

    let pb = add_download_progress_bar(mp, response.content_length(), registry.archive_name());

    let std_file = tempfile::tempfile()
        .map_err(|e| PgfnError::io(std::env::temp_dir(), "creating temporary archive", e))?;
    let mut file = tokio::fs::File::from_std(std_file);

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| download_error(e.to_string()))?;
        file.write_all(&chunk)
            .await
            .map_err(|e| PgfnError::io(std::env::temp_dir(), "writing temporary archive", e))?;
        pb.inc(chunk.len() as u64);
    }
    file.flush()
        .await
        .map_err(|e| PgfnError::io(std::env::temp_dir(), "writing temporary archive", e))?;

    finish_progress_bar(&pb, Some("done"));

    // ZipArchive seeks to the central directory itself, no rewind needed
    Ok(file.into_std().await)
}
