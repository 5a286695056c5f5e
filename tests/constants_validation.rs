//! Validates that compile-time constants are internally consistent.
#![allow(clippy::assertions_on_constants)]

use quakeprep::util::constants::*;

#[test]
fn cutoff_year_is_instrumental_era() {
    assert_eq!(DEFAULT_MIN_YEAR, 1973);
}

#[test]
fn output_header_matches_published_layout() {
    assert_eq!(
        OUTPUT_HEADER.join(","),
        "time,place,latitude,longitude,mag,country,sub_continent,continent"
    );
}

#[test]
fn event_columns_are_distinct() {
    let cols = [
        EVENT_COL_TIME,
        EVENT_COL_PLACE,
        EVENT_COL_LATITUDE,
        EVENT_COL_LONGITUDE,
        EVENT_COL_MAGNITUDE,
    ];
    for (i, a) in cols.iter().enumerate() {
        for b in &cols[i + 1..] {
            assert_ne!(a, b, "event column {a} used twice");
        }
    }
}

#[test]
fn country_columns_are_ordered() {
    assert!(COUNTRY_COL_NAME < COUNTRY_COL_CODE);
    assert!(COUNTRY_COL_CONTINENT < COUNTRY_COL_REGION);
    assert!(COUNTRY_COL_REGION < COUNTRY_COL_SUB_CONTINENT);
}

#[test]
fn labels_are_populated() {
    assert_eq!(ANTARCTICA_CODE.len(), 2);
    assert_ne!(SOUTH_AMERICA_LABEL, SOUTHERN_AMERICA_LABEL);
    assert!(!AMERICAS_LABEL.is_empty());
}

#[test]
fn app_metadata_is_populated() {
    assert!(!APP_NAME.is_empty(), "APP_NAME must not be empty");
    assert!(!APP_VERSION.is_empty(), "APP_VERSION must not be empty");
}

#[test]
fn log_rotation_limit_is_reasonable() {
    assert!(MAX_LOG_FILE_SIZE >= 1024 * 1024);
}
