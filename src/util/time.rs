//! Timestamp helpers for quakeprep.
//!
//! Event timestamps are parsed with one strict layout; a mismatch is fatal for
//! the whole run because the source format is uniform.

use crate::util::constants::EVENT_TIMESTAMP_FORMAT;
use crate::util::error::{PrepError, Result};
use chrono::NaiveDateTime;

/// Parse an event timestamp such as `2023-05-01T10:00:00.000000Z`.
///
/// The fractional part is mandatory and carries one to six digits.
///
/// # Errors
/// Returns [`PrepError::Timestamp`] if `value` does not match
/// [`EVENT_TIMESTAMP_FORMAT`].
pub fn parse_event_timestamp(value: &str) -> Result<NaiveDateTime> {
    if !has_strict_fraction(value) {
        return Err(PrepError::Timestamp {
            value: value.to_owned(),
            reason: "expected 1 to 6 fractional-second digits followed by 'Z'".to_owned(),
        });
    }
    NaiveDateTime::parse_from_str(value, EVENT_TIMESTAMP_FORMAT).map_err(|e| {
        PrepError::Timestamp {
            value: value.to_owned(),
            reason: e.to_string(),
        }
    })
}

// chrono's `%.f` also accepts a missing fraction and up to nine digits.
fn has_strict_fraction(value: &str) -> bool {
    let Some(body) = value.strip_suffix('Z') else {
        return false;
    };
    let Some((_, fraction)) = body.rsplit_once('.') else {
        return false;
    };
    (1..=6).contains(&fraction.len()) && fraction.bytes().all(|b| b.is_ascii_digit())
}

/// Format a `std::time::Duration` into a short human-readable string.
///
/// Used in the run summary log line. Examples: `4.2ms`, `1.2s`, `1.5m`.
pub fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.01 {
        format!("{:.1}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}m")
    }
}
