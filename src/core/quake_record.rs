//! Data structures for one earthquake record, before and after enrichment.
//!
//! Coordinates and magnitude keep their original field text so the enriched
//! output passes them through verbatim; the parsed coordinates are only used
//! for reverse geocoding.

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Unit vector on the sphere. The dot product of two unit vectors grows
    /// monotonically as the great-circle distance between them shrinks.
    pub fn unit_vector(&self) -> [f64; 3] {
        let (lat, lon) = (self.lat.to_radians(), self.lon.to_radians());
        [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
    }
}

/// One row of the raw earthquake record set.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    /// ISO 8601 UTC timestamp, kept as written.
    pub timestamp: String,

    /// Free-text location description. May be empty.
    pub place: String,

    /// Latitude field text.
    pub latitude: String,

    /// Longitude field text.
    pub longitude: String,

    /// Magnitude field text.
    pub magnitude: String,

    /// Parsed coordinates used for reverse geocoding.
    pub position: GeoPoint,
}

/// An earthquake record with its resolved country, sub-continent and continent.
///
/// Only constructed when every resolution step succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedEvent {
    pub timestamp: String,
    pub place: String,
    pub latitude: String,
    pub longitude: String,
    pub magnitude: String,
    pub country: String,
    pub sub_continent: String,
    pub continent: String,
}

impl EnrichedEvent {
    /// Field values in output column order.
    pub fn to_row(&self) -> [&str; 8] {
        [
            &self.timestamp,
            &self.place,
            &self.latitude,
            &self.longitude,
            &self.magnitude,
            &self.country,
            &self.sub_continent,
            &self.continent,
        ]
    }
}
