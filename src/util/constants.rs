//! Application-wide constants for quakeprep.
//!
//! Centralising file names, column positions and taxonomy labels here keeps
//! the loaders and the enrichment logic free of magic values.

/// Application display name used in log output.
pub const APP_NAME: &str = "quakeprep";

/// Application version string.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Events dated before this year are excluded from the output.
pub const DEFAULT_MIN_YEAR: i32 = 1973;

/// Layout of the event timestamp column, e.g. `2023-05-01T10:00:00.000000Z`.
/// `%.f` accepts any number of fractional digits.
pub const EVENT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Header row of the enriched earthquake CSV.
pub const OUTPUT_HEADER: [&str; 8] = [
    "time",
    "place",
    "latitude",
    "longitude",
    "mag",
    "country",
    "sub_continent",
    "continent",
];

// ── Default file names ───────────────────────────────────────────────

/// Raw earthquake record set.
pub const DEFAULT_EVENTS_FILE: &str = "Significant Earthquake Dataset 1900-2023.csv";

/// Country → region/sub-region mapping (ISO 3166 with UN M49 regions).
pub const DEFAULT_COUNTRIES_FILE: &str = "continents.csv";

/// GeoNames cities extract used for reverse geocoding.
pub const DEFAULT_GAZETTEER_FILE: &str = "rg_cities1000.csv";

/// Enriched output dataset.
pub const DEFAULT_OUTPUT_FILE: &str = "earthquake-dataset-1973-2023.csv";

// ── Input A (events) column positions ────────────────────────────────

pub const EVENT_COL_TIME: usize = 0;
pub const EVENT_COL_PLACE: usize = 1;
pub const EVENT_COL_LATITUDE: usize = 2;
pub const EVENT_COL_LONGITUDE: usize = 3;
pub const EVENT_COL_MAGNITUDE: usize = 5;

// ── Input B (country reference) column positions ─────────────────────

pub const COUNTRY_COL_NAME: usize = 0;
pub const COUNTRY_COL_CODE: usize = 1;
pub const COUNTRY_COL_CONTINENT: usize = 5;
pub const COUNTRY_COL_REGION: usize = 6;
pub const COUNTRY_COL_SUB_CONTINENT: usize = 7;

// ── Taxonomy labels ──────────────────────────────────────────────────

/// Antarctica never takes part in the enrichment domain.
pub const ANTARCTICA_CODE: &str = "AQ";

/// Coarse continent label that needs a North/South split.
pub const AMERICAS_LABEL: &str = "Americas";

/// Sub-continent label as it appears in the reference CSV.
pub const SOUTH_AMERICA_LABEL: &str = "South America";

/// Sub-continent label used by the rest of the taxonomy.
pub const SOUTHERN_AMERICA_LABEL: &str = "Southern America";

/// Natural Earth feature class marking a national capital.
pub const CAPITAL_FEATURE_CLASS: &str = "Admin-0 capital";

// ── Logging ──────────────────────────────────────────────────────────

/// Maximum log file size in bytes before rotation (5 MB).
pub const MAX_LOG_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Suffix appended to a rotated log file.
pub const ROTATED_LOG_SUFFIX: &str = "old";
