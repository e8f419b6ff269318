use crate::{format_timestamp, generate_id, output_text};

use chrono::{DateTime, TimeZone, Utc};
use googletest::prelude::*;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 30, 45).unwrap() + chrono::Duration::milliseconds(123)
}

#[test]
fn given_instant_when_formatted_then_rfc3339_millis_with_z() {
    let formatted = format_timestamp(fixed_now());

    assert_that!(formatted, eq("2026-10-16T12:30:45.123Z"));
}

#[test]
fn given_formatted_timestamp_when_parsed_then_same_instant() {
    let now = fixed_now();

    let parsed = DateTime::parse_from_rfc3339(&format_timestamp(now)).unwrap();

    assert_that!(parsed.with_timezone(&Utc), eq(now));
}

#[test]
fn given_instant_when_id_generated_then_prefixed_with_millis() {
    let now = fixed_now();

    let id = generate_id(now);

    let (millis, suffix) = id.split_once('-').unwrap();
    assert_that!(millis, eq(now.timestamp_millis().to_string().as_str()));
    assert_that!(suffix.len(), eq(4));
    assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
}

// =========================================================================
// Persisted output text
// =========================================================================

#[test]
fn given_raw_text_body_when_output_text_then_stored_as_is() {
    assert_that!(output_text(b"plain text payload"), some(eq("plain text payload")));
}

#[test]
fn given_json_string_body_when_output_text_then_unquoted() {
    assert_that!(output_text(br#""quoted""#), some(eq("quoted")));
}

#[test]
fn given_object_with_output_field_when_output_text_then_field_used() {
    assert_that!(output_text(br#"{"output":"from field"}"#), some(eq("from field")));
}

#[test]
fn given_other_json_when_output_text_then_compact_json() {
    assert_that!(output_text(br#"{ "a" : 1 }"#), some(eq(r#"{"a":1}"#)));
}

#[test]
fn given_blank_body_when_output_text_then_none() {
    assert_that!(output_text(b""), none());
    assert_that!(output_text(b"   \n"), none());
    assert_that!(output_text(br#""""#), none());
}
