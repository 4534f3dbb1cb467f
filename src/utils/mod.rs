//! Utility functions shared across the pipeline
//!
//! - `io`: ISO-8859-1 line reading, `;`-delimited records, CSV file discovery
//! - `logging`: operation logging and download progress bars

pub mod io;
pub mod logging;

pub use io::{LineReader, RecordWriter, find_csv_files, is_csv};
pub use logging::{log_operation_complete, log_operation_start, log_warning};
