//! Integration tests for the wrapped JSON formatter
//!
//! These tests verify:
//! - Wrap-key selection from the `kind` field
//! - Restoration of a string `kind` on the caller's entry
//! - Field clash handling
//! - Timestamp and key-name configuration
//! - Sharing one formatter across threads

use chrono::{FixedOffset, TimeZone, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use std::thread;
use wrapped_json_log::fields;
use wrapped_json_log::prelude::*;

fn boot_entry() -> LogEntry {
    LogEntry::new(LogLevel::Info, "boot")
        .with_timestamp(Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap())
}

fn decode(bytes: &[u8]) -> Value {
    let (last, body) = bytes.split_last().expect("non-empty output");
    assert_eq!(*last, b'\n', "output must end with a newline");
    assert!(!body.contains(&b'\n'), "output must be a single line");
    serde_json::from_slice(body).expect("valid JSON")
}

#[test]
fn test_boot_scenario_is_byte_exact() {
    let formatter = WrappedJsonFormatter::new();
    let mut entry = boot_entry();

    let bytes = formatter.format(&mut entry).expect("format");
    assert_eq!(
        bytes,
        b"{\"log\":{\"level\":\"info\",\"msg\":\"boot\",\"time\":\"2024-01-02T15:04:05Z\"}}\n".to_vec()
    );
}

#[test]
fn test_output_has_exactly_one_top_level_key() {
    let formatter = WrappedJsonFormatter::new();
    let mut entry = boot_entry().with_fields(fields! {
        "kind" => "request",
        "path" => "/health",
        "status" => 200,
    });

    let doc = decode(&formatter.format(&mut entry).expect("format"));
    let top = doc.as_object().expect("object");
    assert_eq!(top.len(), 1);

    let nested = top["request"].as_object().expect("nested object");
    assert_eq!(nested["path"], "/health");
    assert_eq!(nested["status"], 200);
    assert!(!nested.contains_key("kind"));
}

#[test]
fn test_kind_round_trips_through_repeated_formatting() {
    let formatter = WrappedJsonFormatter::new();
    let mut entry = boot_entry().with_kind("audit");

    let first = decode(&formatter.format(&mut entry).expect("first"));
    let second = decode(&formatter.format(&mut entry).expect("second"));

    assert_eq!(first, second);
    assert!(second.get("audit").is_some());
    assert_eq!(entry.kind(), Some(&FieldValue::from("audit")));
}

#[test]
fn test_non_string_kind_falls_back_and_is_removed() {
    let formatter = WrappedJsonFormatter::new();
    let mut entry = boot_entry().with_field(KIND_FIELD, true);

    let doc = decode(&formatter.format(&mut entry).expect("format"));
    assert!(doc.get("log").is_some());
    assert!(entry.kind().is_none());

    // second pass has no kind at all and still wraps under "log"
    let doc = decode(&formatter.format(&mut entry).expect("format"));
    assert!(doc.get("log").is_some());
}

#[test]
fn test_empty_string_kind_is_used_verbatim() {
    let formatter = WrappedJsonFormatter::new();
    let mut entry = boot_entry().with_kind("");

    let doc = decode(&formatter.format(&mut entry).expect("format"));
    assert!(doc.get("").is_some());
    assert_eq!(entry.kind(), Some(&FieldValue::from("")));
}

#[test]
fn test_offset_timestamps_keep_their_offset() {
    let formatter = WrappedJsonFormatter::new();
    let offset = FixedOffset::west_opt(5 * 3600).unwrap();
    let mut entry = LogEntry::new(LogLevel::Error, "late")
        .with_timestamp(offset.with_ymd_and_hms(2024, 1, 2, 10, 4, 5).unwrap());

    let doc = decode(&formatter.format(&mut entry).expect("format"));
    assert_eq!(doc["log"]["time"], "2024-01-02T10:04:05-05:00");
    assert_eq!(doc["log"]["level"], "error");
}

#[test]
fn test_remapped_time_key() {
    let formatter = WrappedJsonFormatter::new().with_field_name(FieldKey::Time, "@timestamp");
    let mut entry = boot_entry();

    let doc = decode(&formatter.format(&mut entry).expect("format"));
    assert_eq!(
        doc,
        json!({"log": {"@timestamp": "2024-01-02T15:04:05Z", "level": "info", "msg": "boot"}})
    );
}

#[test]
fn test_message_is_written_as_given() {
    let formatter = WrappedJsonFormatter::new();
    let mut entry = LogEntry::new(LogLevel::Warn, "line one\nline \"two\"");

    let bytes = formatter.format(&mut entry).expect("format");
    let doc = decode(&bytes);
    assert_eq!(doc["log"]["msg"], "line one\nline \"two\"");
}

#[test]
fn test_shared_formatter_across_threads() {
    let formatter = Arc::new(WrappedJsonFormatter::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let formatter = Arc::clone(&formatter);
            thread::spawn(move || {
                let mut entry = LogEntry::new(LogLevel::Debug, format!("worker {}", i))
                    .with_kind(format!("worker_{}", i))
                    .with_field("iteration", i);
                let bytes = formatter.format(&mut entry).expect("format");
                (i, decode(&bytes))
            })
        })
        .collect();

    for handle in handles {
        let (i, doc) = handle.join().expect("thread panicked");
        let nested = &doc[format!("worker_{}", i).as_str()];
        assert_eq!(nested["iteration"], i);
        assert_eq!(nested["msg"], format!("worker {}", i));
    }
}

#[test]
fn test_serialization_failure_returns_no_bytes() {
    let formatter = WrappedJsonFormatter::new();
    let mut entry = boot_entry().with_field(
        "stats",
        FieldValue::Object(
            [("mean".to_string(), FieldValue::Float(f64::NAN))]
                .into_iter()
                .collect(),
        ),
    );

    let err = formatter.format(&mut entry).unwrap_err();
    assert!(matches!(err, FormatterError::Serialization { .. }));
}
