//! IO utilities for file operations
//!
//! This module provides the ISO-8859-1 codec and line reader, `;`-delimited
//! record IO over the csv crate, and CSV file discovery inside source
//! directories.

pub mod csv_files;
pub mod delimited;
pub mod latin1;

// Re-export commonly used functions for convenience
pub use csv_files::{find_csv_files, is_csv};
pub use delimited::{RecordWriter, decode_record, open_record_reader, record_line};
pub use latin1::LineReader;
