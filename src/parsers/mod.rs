//! Parsers for Daslog files: concatenated JSON objects without an array wrapper
//!
//! # Error Handling Strategy
//!
//! Two failure policies apply at different scopes:
//!
//! - **Fragment failures**: A fragment that is still not valid JSON after repair becomes
//!   [`ParsedEntry::Unparseable`](crate::models::ParsedEntry::Unparseable) and parsing
//!   continues. The only trace is the failure counter in [`ParseOutcome`].
//!
//! - **Extraction failures**: A `$ts` value that is not numeric fails the whole record
//!   and is returned as an error, so the caller can abort the file it came from.
//!
//! Errors use `anyhow::Result` with context, since consumers only report them.

pub mod entries;
pub mod extract;
pub mod fragments;
pub mod timestamp;

pub use entries::{ParseOutcome, parse_entries, parse_fragment};
pub use extract::{classify_field, extract_record, extract_records};
pub use fragments::split_fragments;
pub use timestamp::format_epoch_millis;
