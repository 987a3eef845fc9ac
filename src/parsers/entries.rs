use serde_json::{Map, Value};

use crate::models::ParsedEntry;
use crate::parsers::fragments::split_fragments;

/// Parsed entries of one file, in fragment order
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub entries: Vec<ParsedEntry>,
    /// Number of entries that are [`ParsedEntry::Unparseable`]
    pub failures: usize,
}

/// Parse one repaired fragment, mapping any JSON error to a placeholder
pub fn parse_fragment(fragment: &str) -> ParsedEntry {
    match serde_json::from_str::<Map<String, Value>>(fragment) {
        Ok(object) => ParsedEntry::Parsed(object),
        Err(e) => {
            log::trace!("Unparseable fragment ({}): {}", e, fragment);
            ParsedEntry::Unparseable
        }
    }
}

/// Split and parse the content of a Daslog file
///
/// Always returns exactly one entry per fragment produced by
/// [`split_fragments`], failures included.
pub fn parse_entries(content: &str) -> ParseOutcome {
    let entries: Vec<ParsedEntry> =
        split_fragments(content).iter().map(|fragment| parse_fragment(fragment)).collect();
    let failures = entries.iter().filter(|entry| !entry.is_parsed()).count();

    ParseOutcome { entries, failures }
}
