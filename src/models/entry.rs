use serde_json::{Map, Value};

/// Result of parsing one repaired fragment.
///
/// Unparseable fragments are kept in place so that entries stay aligned
/// one-to-one with the fragments they came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedEntry {
    Parsed(Map<String, Value>),
    Unparseable,
}

impl ParsedEntry {
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParsedEntry::Parsed(_))
    }
}

/// Role of a field inside a log object, decided by its name alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `$ts`: epoch milliseconds
    Timestamp,
    /// Any name without the `$` prefix
    CustomKey,
    /// `$data`: payload carried through verbatim
    Data,
    /// Every other `$`-prefixed name
    Ignored,
}
