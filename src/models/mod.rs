//! Data models for cleaned Daslog output.
//!
//! - [`ParsedEntry`] - One repaired fragment, either a parsed object or a placeholder
//! - [`FieldKind`] - Classification of a field name within a parsed object
//! - [`NormalizedRecord`] - The four-field record printed per fragment

pub mod entry;
pub mod record;

pub use entry::{FieldKind, ParsedEntry};
pub use record::NormalizedRecord;
