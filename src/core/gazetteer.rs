//! Reverse geocoding against a fixed gazetteer of populated places.
//!
//! [`Gazetteer`] is the seam the enrichment pipeline depends on. The bundled
//! [`CityGazetteer`] loads a GeoNames-style cities CSV and answers
//! nearest-place queries by great-circle distance.

use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::path::Path;

use kiddo::{KdTree, SquaredEuclidean};

use crate::core::quake_record::{GeoPoint, RawEvent};
use crate::util::error::{PrepError, Result};

/// A named populated place and the country it belongs to.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Place {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    #[serde(default)]
    pub admin1: String,
    #[serde(default)]
    pub admin2: String,
    /// ISO 3166 alpha-2 country code.
    #[serde(rename = "cc")]
    pub country_code: String,
}

impl Place {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Nearest-place index over a fixed set of places.
pub trait Gazetteer {
    /// The place with minimum distance to `point`, or `None` if the
    /// gazetteer is empty.
    fn nearest(&self, point: GeoPoint) -> Option<&Place>;

    /// Resolve many points at once. The result is positionally aligned with
    /// `points` and has the same length.
    fn search(&self, points: &[GeoPoint]) -> Vec<Option<&Place>> {
        points.iter().map(|p| self.nearest(*p)).collect()
    }
}

/// An event paired with its reverse-geocoding result.
#[derive(Debug, Clone)]
pub struct Geocoded<'g> {
    pub event: RawEvent,
    pub place: Option<&'g Place>,
}

/// Resolve all events in one batch and pair each with its result.
pub fn geocode_events<G: Gazetteer + ?Sized>(events: Vec<RawEvent>, gazetteer: &G) -> Vec<Geocoded<'_>> {
    let points: Vec<GeoPoint> = events.iter().map(|e| e.position).collect();
    let places = gazetteer.search(&points);
    events
        .into_iter()
        .zip(places)
        .map(|(event, place)| Geocoded { event, place })
        .collect()
}

/// In-memory gazetteer indexed by a k-d tree over unit vectors.
///
/// Squared chord length between unit vectors grows monotonically with the
/// great-circle angle, so the Euclidean nearest neighbour in 3-D is also the
/// nearest place on the sphere.
pub struct CityGazetteer {
    places: Vec<Place>,
    index: KdTree<f64, 3>,
}

impl CityGazetteer {
    /// Build the index once. When several places share the exact same
    /// coordinates only the first of them is indexed.
    pub fn from_places(places: Vec<Place>) -> Self {
        let mut index = KdTree::with_capacity(places.len());
        let mut seen = HashSet::with_capacity(places.len());
        for (i, place) in places.iter().enumerate() {
            if seen.insert((place.lat.to_bits(), place.lon.to_bits())) {
                index.add(&place.position().unit_vector(), i as u64);
            }
        }
        Self { places, index }
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl Default for CityGazetteer {
    fn default() -> Self {
        Self::from_places(Vec::new())
    }
}

impl fmt::Debug for CityGazetteer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CityGazetteer")
            .field("places", &self.places.len())
            .finish()
    }
}

impl Gazetteer for CityGazetteer {
    fn nearest(&self, point: GeoPoint) -> Option<&Place> {
        if self.places.is_empty() {
            return None;
        }
        let found = self
            .index
            .nearest_one::<SquaredEuclidean>(&point.unit_vector());
        self.places.get(found.item as usize)
    }
}

/// Load the gazetteer CSV at `path` (columns `lat,lon,name,admin1,admin2,cc`).
///
/// # Errors
/// Returns [`PrepError::MissingInput`] if the file does not exist and
/// [`PrepError::Csv`] for rows that do not match the layout.
pub fn load_gazetteer(path: &Path) -> Result<CityGazetteer> {
    if !path.is_file() {
        return Err(PrepError::MissingInput(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    let gazetteer = read_gazetteer(std::io::BufReader::new(file))?;
    tracing::info!(
        "Loaded gazetteer with {} places from {}",
        gazetteer.len(),
        path.display()
    );
    Ok(gazetteer)
}

/// Parse a gazetteer from any CSV byte stream with a header row.
pub fn read_gazetteer<R: Read>(input: R) -> Result<CityGazetteer> {
    let mut reader = csv::Reader::from_reader(input);
    let places = reader
        .deserialize::<Place>()
        .collect::<csv::Result<Vec<_>>>()?;
    if places.is_empty() {
        tracing::warn!("Gazetteer is empty; every event will be left unresolved");
    }
    Ok(CityGazetteer::from_places(places))
}
