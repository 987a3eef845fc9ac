use std::fmt::Display;

use anyhow::{Context, Result};
use chrono::TimeZone;
use serde_json::Value;

use crate::models::{FieldKind, NormalizedRecord, ParsedEntry};
use crate::parsers::timestamp::format_epoch_millis;

pub const TIMESTAMP_KEY: &str = "$ts";
pub const DATA_KEY: &str = "$data";
pub const RESERVED_PREFIX: char = '$';

/// Classify a field by name
///
/// `$ts` and `$data` are checked before the prefix rule, everything else
/// starting with `$` is ignored.
pub fn classify_field(name: &str) -> FieldKind {
    if name == TIMESTAMP_KEY {
        FieldKind::Timestamp
    } else if !name.starts_with(RESERVED_PREFIX) {
        FieldKind::CustomKey
    } else if name == DATA_KEY {
        FieldKind::Data
    } else {
        FieldKind::Ignored
    }
}

/// Render a JSON value as a record field: strings bare, anything else as compact JSON
pub fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Flatten one parsed entry into a [`NormalizedRecord`]
///
/// Fields are visited in document order, so a repeated custom key keeps its
/// last occurrence. An unparseable entry yields an all-empty record.
///
/// # Errors
///
/// Returns an error if the `$ts` value is not numeric or out of range.
pub fn extract_record<Tz>(entry: &ParsedEntry, tz: &Tz) -> Result<NormalizedRecord>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut record = NormalizedRecord::default();

    let ParsedEntry::Parsed(object) = entry else {
        return Ok(record);
    };

    for (name, value) in object {
        match classify_field(name) {
            FieldKind::Timestamp => {
                record.timestamp = format_epoch_millis(value, tz)
                    .with_context(|| format!("Invalid {} value: {}", TIMESTAMP_KEY, value))?;
            }
            FieldKind::CustomKey => {
                record.key = name.clone();
                record.value = field_text(value);
            }
            FieldKind::Data => {
                record.data = field_text(value);
            }
            FieldKind::Ignored => {}
        }
    }

    Ok(record)
}

/// Flatten every entry of a file, stopping at the first extraction error
pub fn extract_records<Tz>(entries: &[ParsedEntry], tz: &Tz) -> Result<Vec<NormalizedRecord>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    entries.iter().map(|entry| extract_record(entry, tz)).collect()
}
