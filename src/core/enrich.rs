//! Per-record enrichment: place normalization, date cut-off, country and
//! continent resolution.
//!
//! Each geocoded event yields exactly one [`Outcome`]: either an
//! [`EnrichedEvent`] or the [`Discard`] reason that excluded it. Only a bad
//! timestamp aborts the run. Survivors keep their input order.

use chrono::Datelike;

use crate::core::continent::{refine, ClassifyError, ContinentClassifier};
use crate::core::country_table::CountryTable;
use crate::core::gazetteer::Geocoded;
use crate::core::quake_record::EnrichedEvent;
use crate::util::error::Result;
use crate::util::time::parse_event_timestamp;

/// Why a record was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discard {
    /// Dated before the configured cut-off year.
    BeforeCutoff { year: i32 },
    /// The gazetteer returned no place for the coordinates.
    Ungeocoded,
    /// The resolved country code is not in the reference table.
    UnknownCountry { code: String },
    /// The country lies in the Americas but could not be split into
    /// North or South.
    UnclassifiedContinent { code: String, reason: ClassifyError },
}

/// Result of enriching one record.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Emitted(EnrichedEvent),
    Discarded(Discard),
}

/// Discard counts for one run. Diagnostic only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichStats {
    pub read: usize,
    pub emitted: usize,
    pub before_cutoff: usize,
    pub ungeocoded: usize,
    pub unknown_country: usize,
    pub unclassified_continent: usize,
}

impl EnrichStats {
    fn record(&mut self, outcome: &Outcome) {
        self.read += 1;
        match outcome {
            Outcome::Emitted(_) => self.emitted += 1,
            Outcome::Discarded(Discard::BeforeCutoff { .. }) => self.before_cutoff += 1,
            Outcome::Discarded(Discard::Ungeocoded) => self.ungeocoded += 1,
            Outcome::Discarded(Discard::UnknownCountry { .. }) => self.unknown_country += 1,
            Outcome::Discarded(Discard::UnclassifiedContinent { .. }) => {
                self.unclassified_continent += 1
            }
        }
    }

    pub fn discarded(&self) -> usize {
        self.read - self.emitted
    }
}

/// Surviving events in input order, plus the discard statistics.
#[derive(Debug, Clone, Default)]
pub struct EnrichReport {
    pub events: Vec<EnrichedEvent>,
    pub stats: EnrichStats,
}

/// Reference data shared by every record of a run.
pub struct Enricher<'a, C: ContinentClassifier + ?Sized> {
    pub countries: &'a CountryTable,
    pub classifier: &'a C,
    pub min_year: i32,
}

impl<'a, C: ContinentClassifier + ?Sized> Enricher<'a, C> {
    pub fn new(countries: &'a CountryTable, classifier: &'a C, min_year: i32) -> Self {
        Self {
            countries,
            classifier,
            min_year,
        }
    }

    /// Enrich one geocoded event.
    ///
    /// # Errors
    /// Returns [`crate::util::error::PrepError::Timestamp`] if the timestamp
    /// does not parse. Every other failure becomes [`Outcome::Discarded`].
    pub fn enrich_record(&self, record: &Geocoded<'_>) -> Result<Outcome> {
        let event = &record.event;
        let place = capitalize_first(&event.place);
        let year = parse_event_timestamp(&event.timestamp)?.year();

        if year < self.min_year {
            return Ok(Outcome::Discarded(Discard::BeforeCutoff { year }));
        }
        let Some(geocode) = record.place else {
            return Ok(Outcome::Discarded(Discard::Ungeocoded));
        };

        let code = geocode.country_code.as_str();
        let Some(country) = self.countries.get(code) else {
            return Ok(Outcome::Discarded(Discard::UnknownCountry {
                code: code.to_owned(),
            }));
        };
        let continent = match refine(self.classifier, code, &country.continent) {
            Ok(name) => name,
            Err(reason) => {
                return Ok(Outcome::Discarded(Discard::UnclassifiedContinent {
                    code: code.to_owned(),
                    reason,
                }))
            }
        };

        Ok(Outcome::Emitted(EnrichedEvent {
            timestamp: event.timestamp.clone(),
            place,
            latitude: event.latitude.clone(),
            longitude: event.longitude.clone(),
            magnitude: event.magnitude.clone(),
            country: country.name.clone(),
            sub_continent: country.sub_continent.clone(),
            continent,
        }))
    }

    /// Enrich every record in order, keeping only the emitted ones.
    ///
    /// # Errors
    /// Stops at the first unparseable timestamp.
    pub fn enrich(&self, records: &[Geocoded<'_>]) -> Result<EnrichReport> {
        let mut report = EnrichReport::default();
        for record in records {
            let outcome = self.enrich_record(record)?;
            report.stats.record(&outcome);
            match outcome {
                Outcome::Emitted(event) => report.events.push(event),
                Outcome::Discarded(reason) => {
                    tracing::debug!(
                        timestamp = %record.event.timestamp,
                        ?reason,
                        "Record discarded"
                    );
                }
            }
        }
        Ok(report)
    }
}

/// Upper-case the first character and keep the rest verbatim.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
