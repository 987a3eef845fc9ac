use std::fmt;

use serde::{Deserialize, Serialize};

/// Flattened view of a single log fragment.
///
/// Every field defaults to the empty string, so a placeholder for an
/// unparseable fragment renders as `|||`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    #[serde(rename = "TimeStamp")]
    pub timestamp: String,
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "Data")]
    pub data: String,
}

impl NormalizedRecord {
    pub fn is_empty(&self) -> bool {
        self.timestamp.is_empty()
            && self.key.is_empty()
            && self.value.is_empty()
            && self.data.is_empty()
    }
}

// Pipes inside field values are written as-is.
impl fmt::Display for NormalizedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}|{}", self.timestamp, self.key, self.value, self.data)
    }
}
