//! Logging utilities for output and progress tracking
//!
//! This module provides utilities for logging and download progress bars.

pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use log::{log_operation_complete, log_operation_start, log_warning};
pub use progress::{add_download_progress_bar, create_multi_progress, finish_progress_bar};
