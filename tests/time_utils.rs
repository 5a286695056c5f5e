//! Integration tests for time utilities.

use chrono::{Datelike, Timelike};
use quakeprep::util::time::{format_duration, parse_event_timestamp};

#[test]
fn parse_full_precision() {
    let ts = parse_event_timestamp("2011-03-11T05:46:24.120000Z").unwrap();
    assert_eq!((ts.year(), ts.month(), ts.day()), (2011, 3, 11));
    assert_eq!((ts.hour(), ts.minute(), ts.second()), (5, 46, 24));
    assert_eq!(ts.nanosecond(), 120_000_000);
}

#[test]
fn parse_requires_fraction_of_one_to_six_digits() {
    assert!(parse_event_timestamp("1960-05-22T19:11:20Z").is_err());
    assert!(parse_event_timestamp("1960-05-22T19:11:20.Z").is_err());
    assert!(parse_event_timestamp("1960-05-22T19:11:20.0000000Z").is_err());
    assert_eq!(parse_event_timestamp("1960-05-22T19:11:20.000000Z").unwrap().year(), 1960);
}

#[test]
fn parse_rejects_other_layouts() {
    assert!(parse_event_timestamp("2011-03-11 05:46:24").is_err());
    assert!(parse_event_timestamp("").is_err());
    assert!(parse_event_timestamp("2011-13-11T05:46:24.000Z").is_err());
}

#[test]
fn format_duration_sub_second() {
    let d = std::time::Duration::from_millis(350);
    let s = format_duration(d);
    assert!(
        s.contains("0.4") || s.contains("0.3"),
        "Expected ~0.3-0.4s, got: {s}"
    );
}

#[test]
fn format_duration_minutes() {
    let d = std::time::Duration::from_secs(90);
    assert_eq!(format_duration(d), "1.5m");
}
