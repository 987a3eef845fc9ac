//! Aggregation of cleaned records across a Daslog directory
//!
//! # Error Handling Strategy
//!
//! File processing is all-or-nothing:
//!
//! - **Fragment-level failures** are absorbed by the parsers and show up as empty records.
//!
//! - **File-level failures** (read errors, invalid `$ts` values) abort the whole run. The
//!   error carries the offending file path and no later file is processed.
//!
//! - **Directory-level failures** (missing or unreadable directory) are returned before any
//!   file is read.

pub mod builder;
pub mod log_files;

pub use builder::{collect_records, collect_records_in, parse_log_file};
pub use log_files::list_log_files;
