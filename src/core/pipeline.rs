//! End-to-end run of the earthquake enrichment over files.
//!
//! Stages are pure functions chained in order: load events, build the
//! country table, load the gazetteer, geocode in one batch, enrich, write.

use std::path::PathBuf;
use std::time::Instant;

use crate::core::continent::IsoContinentClassifier;
use crate::core::country_table::load_country_table;
use crate::core::enrich::{EnrichStats, Enricher};
use crate::core::event_reader::load_events;
use crate::core::gazetteer::{geocode_events, load_gazetteer};
use crate::export::csv_export::export_enriched_csv;
use crate::util::constants::*;
use crate::util::error::Result;
use crate::util::time::format_duration;

/// Input and output locations plus the date cut-off for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub events: PathBuf,
    pub countries: PathBuf,
    pub gazetteer: PathBuf,
    pub output: PathBuf,
    pub min_year: i32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            events: PathBuf::from(DEFAULT_EVENTS_FILE),
            countries: PathBuf::from(DEFAULT_COUNTRIES_FILE),
            gazetteer: PathBuf::from(DEFAULT_GAZETTEER_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            min_year: DEFAULT_MIN_YEAR,
        }
    }
}

/// Run the full enrichment and write the output CSV.
///
/// # Errors
/// Any fatal condition (missing or malformed input, bad timestamp, write
/// failure) aborts the run; the output path is left untouched in that case.
pub fn run_events(config: &PipelineConfig) -> Result<EnrichStats> {
    let start = Instant::now();

    let events = load_events(&config.events)?;
    let countries = load_country_table(&config.countries)?;
    let gazetteer = load_gazetteer(&config.gazetteer)?;
    let classifier = IsoContinentClassifier::new();

    let geocoded = geocode_events(events, &gazetteer);
    let report = Enricher::new(&countries, &classifier, config.min_year).enrich(&geocoded)?;

    export_enriched_csv(&report.events, &config.output)?;

    let stats = report.stats;
    tracing::info!(
        read = stats.read,
        emitted = stats.emitted,
        before_cutoff = stats.before_cutoff,
        ungeocoded = stats.ungeocoded,
        unknown_country = stats.unknown_country,
        unclassified_continent = stats.unclassified_continent,
        "Enrichment finished in {}",
        format_duration(start.elapsed())
    );
    Ok(stats)
}
