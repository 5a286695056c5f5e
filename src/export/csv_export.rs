//! CSV export for enriched earthquake records.
//!
//! Columns: time, place, latitude, longitude, mag, country, sub_continent,
//! continent. Unix line endings, fields quoted only when necessary.

use std::io::Write;
use std::path::Path;

use crate::core::quake_record::EnrichedEvent;
use crate::export::write_atomically;
use crate::util::constants::OUTPUT_HEADER;
use crate::util::error::{PrepError, Result};

/// Export the given events to a CSV file at `path`, replacing it atomically.
///
/// # Errors
/// Returns [`PrepError::Export`] if the file cannot be created or written.
pub fn export_enriched_csv(events: &[EnrichedEvent], path: &Path) -> Result<()> {
    write_atomically(path, |out| write_enriched_csv(events, out))?;
    tracing::info!(
        "Exported {} events to CSV: {}",
        events.len(),
        path.display()
    );
    Ok(())
}

/// Write the header and one row per event to any byte sink.
pub fn write_enriched_csv<W: Write>(events: &[EnrichedEvent], out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer
        .write_record(OUTPUT_HEADER)
        .map_err(|e| PrepError::Export(format!("Failed to write CSV header: {e}")))?;

    for event in events {
        writer
            .write_record(event.to_row())
            .map_err(|e| PrepError::Export(format!("Failed to write CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| PrepError::Export(format!("Failed to flush CSV: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(place: &str) -> EnrichedEvent {
        EnrichedEvent {
            timestamp: "2023-05-01T10:00:00.000000Z".into(),
            place: place.into(),
            latitude: "12.0".into(),
            longitude: "-70.0".into(),
            magnitude: "5.0".into(),
            country: "Venezuela".into(),
            sub_continent: "Southern America".into(),
            continent: "South America".into(),
        }
    }

    fn render(events: &[EnrichedEvent]) -> String {
        let mut buf = Vec::new();
        write_enriched_csv(events, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_only() {
        assert_eq!(
            render(&[]),
            "time,place,latitude,longitude,mag,country,sub_continent,continent\n"
        );
    }

    #[test]
    fn test_row_layout() {
        let text = render(&[sample("")]);
        let row = text.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "2023-05-01T10:00:00.000000Z,,12.0,-70.0,5.0,Venezuela,Southern America,South America"
        );
        assert!(!text.contains('\r'));
    }

    #[test]
    fn test_place_with_comma_is_quoted() {
        let text = render(&[sample("10 km N of Caracas, Venezuela")]);
        assert!(text.contains("\"10 km N of Caracas, Venezuela\""));
    }
}
