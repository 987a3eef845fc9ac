use std::fmt::Display;

use anyhow::{Context, Result, bail};
use chrono::TimeZone;
use serde_json::Value;

const MILLIS_PER_SECOND: i64 = 1000;

/// Read an epoch-milliseconds value from a JSON number or numeric string
///
/// Fractional milliseconds are floored.
pub fn epoch_millis(value: &Value) -> Result<i64> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(ms) => Ok(ms),
            None => {
                let ms = n.as_f64().context("timestamp is not representable as a number")?;
                float_millis(ms)
            }
        },
        Value::String(s) => {
            let s = s.trim();
            match s.parse::<i64>() {
                Ok(ms) => Ok(ms),
                Err(_) => {
                    let ms = s
                        .parse::<f64>()
                        .with_context(|| format!("timestamp is not numeric: {:?}", s))?;
                    float_millis(ms)
                }
            }
        }
        other => bail!("timestamp must be a number, got {}", other),
    }
}

fn float_millis(ms: f64) -> Result<i64> {
    if !ms.is_finite() || ms.abs() >= i64::MAX as f64 {
        bail!("timestamp out of range: {}", ms);
    }
    Ok(ms.floor() as i64)
}

/// Format epoch milliseconds as `YYYY-MM-DD HH:MM:SS , <millis>` in `tz`
///
/// The millisecond remainder is printed without padding (`, 5` not `, 005`).
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use daslog_clean::format_epoch_millis;
/// use serde_json::json;
///
/// let formatted = format_epoch_millis(&json!(1609459200123_i64), &Utc)?;
/// assert_eq!(formatted, "2021-01-01 00:00:00 , 123");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_epoch_millis<Tz>(value: &Value, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let ms = epoch_millis(value)?;
    let seconds = ms.div_euclid(MILLIS_PER_SECOND);
    let remainder = ms.rem_euclid(MILLIS_PER_SECOND);

    let datetime = tz
        .timestamp_opt(seconds, 0)
        .single()
        .with_context(|| format!("timestamp out of range: {}", ms))?;

    Ok(format!("{} , {}", datetime.format("%Y-%m-%d %H:%M:%S"), remainder))
}
