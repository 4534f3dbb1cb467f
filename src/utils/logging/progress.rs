//! Progress reporting for archive downloads
//!
//! Uses the indicatif crate. Each concurrent download gets its own bar
//! inside one shared [`MultiProgress`].

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

/// Template for a download whose size is known
pub const DOWNLOAD_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}) {msg}";

/// Template for a download without a `Content-Length`
pub const DOWNLOAD_SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {bytes} ({bytes_per_sec}) {msg}";

/// Create an empty multi-progress container
#[must_use]
pub fn create_multi_progress() -> MultiProgress {
    MultiProgress::new()
}

/// Add a byte-counting bar for one download
///
/// # Arguments
/// * `mp` - The `MultiProgress` instance
/// * `total_bytes` - Expected size, if the server reported one
/// * `description` - Message shown next to the bar
#[must_use]
pub fn add_download_progress_bar(
    mp: &MultiProgress,
    total_bytes: Option<u64>,
    description: &str,
) -> ProgressBar {
    let (pb, template) = match total_bytes {
        Some(len) => (ProgressBar::new(len), DOWNLOAD_TEMPLATE),
        None => (ProgressBar::new_spinner(), DOWNLOAD_SPINNER_TEMPLATE),
    };
    // Constant templates; fall back to the default style if one fails to parse
    let style = ProgressStyle::default_bar()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(description.to_string());
    mp.add(pb)
}

/// Finish a progress bar with an optional completion message
pub fn finish_progress_bar(pb: &ProgressBar, message: Option<&str>) {
    if let Some(msg) = message {
        pb.finish_with_message(msg.to_string());
    } else {
        pb.finish();
    }
}
