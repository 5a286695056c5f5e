//! Core domain modules for quakeprep.
//!
//! Contains the earthquake data model, the input loaders, the country
//! reference table, reverse geocoding, continent disambiguation and the
//! enrichment pipeline.

pub mod continent;
pub mod country_table;
pub mod enrich;
pub mod event_reader;
pub mod gazetteer;
pub mod pipeline;
pub mod quake_record;
