//! Daslog Clean - Flatten Cozmo Daslog files into pipe-separated records
//!
//! Cozmo writes its logs as JSON objects joined by `},{` with no enclosing
//! array. This library repairs those files into parseable objects and
//! reduces each one to a four-field record:
//!
//! - `TimeStamp` from the `$ts` epoch-millisecond field
//! - `Key` / `Value` from the single field without a `$` prefix
//! - `Data` from the `$data` field
//!
//! Records from every file in a directory are merged oldest file first.
//!
//! # Example
//!
//! ```no_run
//! use daslog_clean::collect_records;
//! use std::path::PathBuf;
//!
//! let log_dir = PathBuf::from("/home/alice/Documents/CozmoLogs");
//! for record in collect_records(&log_dir)? {
//!     println!("{}", record);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod aggregator;
pub mod cli;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use aggregator::{collect_records, collect_records_in};
pub use models::{NormalizedRecord, ParsedEntry};
pub use parsers::{format_epoch_millis, parse_entries, split_fragments};
