//! Loader for the raw earthquake record set (Input A).
//!
//! The file has a header row followed by one event per line. Only columns
//! 0 (time), 1 (place), 2 (latitude), 3 (longitude) and 5 (magnitude) are
//! read; everything else is ignored.

use std::io::Read;
use std::path::Path;

use crate::core::quake_record::{GeoPoint, RawEvent};
use crate::util::constants::*;
use crate::util::error::{missing_column, PrepError, Result};

const SOURCE_NAME: &str = "events";

/// Load every event from the CSV file at `path`.
///
/// # Errors
/// Returns [`PrepError::MissingInput`] if the file does not exist, and a
/// structural error for short rows or non-numeric coordinates.
pub fn load_events(path: &Path) -> Result<Vec<RawEvent>> {
    if !path.is_file() {
        return Err(PrepError::MissingInput(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    let events = read_events(std::io::BufReader::new(file))?;
    tracing::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Parse events from any CSV byte stream. The first row is treated as a header.
pub fn read_events<R: Read>(input: R) -> Result<Vec<RawEvent>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut events = Vec::new();
    for result in reader.records() {
        let record = result?;
        events.push(parse_event_record(&record)?);
    }
    Ok(events)
}

fn parse_event_record(record: &csv::StringRecord) -> Result<RawEvent> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let field = move |column: usize| {
        record
            .get(column)
            .ok_or_else(|| missing_column(SOURCE_NAME, line, column))
    };

    let latitude = field(EVENT_COL_LATITUDE)?;
    let longitude = field(EVENT_COL_LONGITUDE)?;
    let position = GeoPoint::new(
        parse_coordinate(latitude, line)?,
        parse_coordinate(longitude, line)?,
    );

    Ok(RawEvent {
        timestamp: field(EVENT_COL_TIME)?.to_owned(),
        place: field(EVENT_COL_PLACE)?.to_owned(),
        latitude: latitude.to_owned(),
        longitude: longitude.to_owned(),
        magnitude: field(EVENT_COL_MAGNITUDE)?.to_owned(),
        position,
    })
}

fn parse_coordinate(value: &str, line: u64) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| PrepError::Coordinate {
            value: value.to_owned(),
            line,
        })
}
