//! Clock-derived defaults applied to events at ingest.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Format an instant the way ingested events carry it: RFC 3339, UTC,
/// millisecond precision, `Z` suffix.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Generate an event id from the current time.
///
/// Millisecond Unix time plus four random hex digits. Unique with high
/// probability within one process; collisions are not detected.
pub fn generate_id(now: DateTime<Utc>) -> String {
    format!("{}-{:04x}", now.timestamp_millis(), rand::random::<u16>())
}

/// A field is treated as absent when missing, `null` or an empty string.
pub(crate) fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Text stored for one persisted payload.
///
/// A JSON string is stored unquoted, a JSON object carrying a string
/// `output` field stores that field, any other JSON is stored as compact
/// JSON text, and a body that is not JSON is stored as-is. Returns None when
/// the result is blank.
pub fn output_text(body: &[u8]) -> Option<String> {
    let text = match serde_json::from_slice::<Value>(body) {
        Ok(Value::String(s)) => s,
        Ok(Value::Object(map)) => match map.get("output") {
            Some(Value::String(s)) => s.clone(),
            _ => Value::Object(map).to_string(),
        },
        Ok(other) => other.to_string(),
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    };

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
