//! Integration tests for error type construction and display.

use std::path::PathBuf;

use quakeprep::core::continent::ClassifyError;
use quakeprep::util::error::{missing_column, PrepError};

#[test]
fn missing_input_names_the_path() {
    let err = PrepError::MissingInput(PathBuf::from("continents.csv"));
    let msg = err.to_string();
    assert!(msg.contains("continents.csv"), "Should name the file: {msg}");
}

#[test]
fn missing_column_reports_position() {
    let msg = missing_column("events", 42, 5).to_string();
    assert!(msg.contains("events"), "Should name the input: {msg}");
    assert!(msg.contains("42"), "Should contain line: {msg}");
    assert!(msg.contains('5'), "Should contain column: {msg}");
}

#[test]
fn timestamp_error_preserves_value() {
    let err = PrepError::Timestamp {
        value: "yesterday".into(),
        reason: "input contains invalid characters".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("yesterday"), "Should contain value: {msg}");
}

#[test]
fn io_error_converts() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no access");
    let err: PrepError = io_err.into();
    let msg = err.to_string();
    assert!(msg.contains("no access"), "Should preserve IO error: {msg}");
}

#[test]
fn json_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: PrepError = json_err.into();
    assert!(matches!(err, PrepError::Json(_)));
}

#[test]
fn classify_error_displays_code() {
    let msg = ClassifyError::UnknownCountry("XK".into()).to_string();
    assert!(msg.contains("XK"), "Should contain code: {msg}");
}

#[test]
fn error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PrepError>();
    assert_send_sync::<ClassifyError>();
}
