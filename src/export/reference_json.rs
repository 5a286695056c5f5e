//! Normalization of TopoJSON reference files (country borders, populated
//! places, tectonic plates).
//!
//! Each file keeps its geometry untouched. The collection under `objects` is
//! renamed to a standard key and every feature's `properties` is projected to
//! the small fixed set the map front end reads.

use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use crate::export::write_atomically;
use crate::util::constants::CAPITAL_FEATURE_CLASS;
use crate::util::error::{PrepError, Result};

/// Which reference dataset a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReferenceKind {
    /// Natural Earth admin-0 country borders.
    Countries,
    /// Natural Earth populated places.
    Cities,
    /// PB2002 tectonic plate outlines.
    Plates,
}

impl ReferenceKind {
    /// Standard key under `objects` after normalization.
    pub fn object_key(&self) -> &'static str {
        match self {
            ReferenceKind::Countries => "countries",
            ReferenceKind::Cities => "cities",
            ReferenceKind::Plates => "plates",
        }
    }

    /// Projected properties for one feature, or `None` to drop them.
    fn project(&self, properties: Option<&Value>, index: usize) -> Result<Option<Value>> {
        let prop = |key: &str| required(properties, key, index);
        match self {
            ReferenceKind::Countries => Ok(Some(json!({ "name": prop("NAME_EN")? }))),
            ReferenceKind::Cities => {
                let capital = prop("featurecla")?.as_str() == Some(CAPITAL_FEATURE_CLASS);
                Ok(Some(json!({
                    "name": prop("nameascii")?,
                    "country": prop("adm0name")?,
                    "capital": capital,
                })))
            }
            ReferenceKind::Plates => Ok(None),
        }
    }
}

fn required<'v>(properties: Option<&'v Value>, key: &str, index: usize) -> Result<&'v Value> {
    properties
        .and_then(|p| p.get(key))
        .ok_or_else(|| PrepError::Reference(format!("geometry {index} has no '{key}' property")))
}

/// Normalize a parsed TopoJSON document.
///
/// `source_key` names the collection under `objects` to rename. When it is
/// `None` the document must hold exactly one collection.
///
/// # Errors
/// Returns [`PrepError::Reference`] when the document lacks `objects`, the
/// source collection, a `geometries` array or a required property.
pub fn normalize_topology(
    mut doc: Value,
    kind: ReferenceKind,
    source_key: Option<&str>,
) -> Result<Value> {
    let objects = doc
        .get_mut("objects")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| PrepError::Reference("document has no 'objects' map".into()))?;

    let key = match source_key {
        Some(k) => k.to_owned(),
        None => {
            let mut keys = objects.keys();
            match (keys.next(), keys.next()) {
                (Some(k), None) => k.clone(),
                _ => {
                    return Err(PrepError::Reference(format!(
                        "cannot infer source object among {} entries",
                        objects.len()
                    )))
                }
            }
        }
    };

    let mut collection = objects
        .shift_remove(&key)
        .ok_or_else(|| PrepError::Reference(format!("no object named '{key}'")))?;
    let geometries = collection
        .get_mut("geometries")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| PrepError::Reference(format!("object '{key}' has no 'geometries' array")))?;

    for (index, geometry) in geometries.iter_mut().enumerate() {
        let geometry = geometry
            .as_object_mut()
            .ok_or_else(|| PrepError::Reference(format!("geometry {index} is not an object")))?;
        match kind.project(geometry.get("properties"), index)? {
            Some(properties) => {
                geometry.insert("properties".to_owned(), properties);
            }
            None => {
                geometry.shift_remove("properties");
            }
        }
    }

    objects.insert(kind.object_key().to_owned(), collection);
    Ok(doc)
}

/// Read `input`, normalize it and write compact UTF-8 JSON to `output`.
pub fn normalize_reference_file(
    input: &Path,
    output: &Path,
    kind: ReferenceKind,
    source_key: Option<&str>,
) -> Result<()> {
    if !input.is_file() {
        return Err(PrepError::MissingInput(input.to_path_buf()));
    }
    let file = std::fs::File::open(input)?;
    let doc: Value = serde_json::from_reader(std::io::BufReader::new(file))?;
    let doc = normalize_topology(doc, kind, source_key)?;

    write_atomically(output, |out| Ok(serde_json::to_writer(out, &doc)?))?;
    tracing::info!(
        "Normalized {:?} reference {} -> {}",
        kind,
        input.display(),
        output.display()
    );
    Ok(())
}

/// One file of the standard reference set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceJob {
    pub kind: ReferenceKind,
    pub source_key: String,
    pub input: String,
    pub output: String,
}

impl ReferenceJob {
    fn new(kind: ReferenceKind, source_key: String, output: String) -> Self {
        Self {
            kind,
            input: format!("{source_key}.json"),
            source_key,
            output,
        }
    }
}

/// Country borders at 10/50/110 m, populated places at 50/110 m and the
/// plate boundaries.
pub fn standard_jobs() -> Vec<ReferenceJob> {
    let countries = ["10", "50", "110"].into_iter().map(|d| {
        ReferenceJob::new(
            ReferenceKind::Countries,
            format!("ne_{d}m_admin_0_countries"),
            format!("countries-{d}m.json"),
        )
    });
    let cities = ["50", "110"].into_iter().map(|d| {
        ReferenceJob::new(
            ReferenceKind::Cities,
            format!("ne_{d}m_populated_places_simple"),
            format!("cities-{d}m.json"),
        )
    });
    let plates = std::iter::once(ReferenceJob::new(
        ReferenceKind::Plates,
        "PB2002_plates".to_owned(),
        "tectonic-plates.json".to_owned(),
    ));
    countries.chain(cities).chain(plates).collect()
}

/// Run every standard job with inputs and outputs in `dir`.
///
/// Returns the paths written. The first failure aborts the batch.
pub fn run_standard_jobs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for job in standard_jobs() {
        let output = dir.join(&job.output);
        normalize_reference_file(
            &dir.join(&job.input),
            &output,
            job.kind,
            Some(&job.source_key),
        )?;
        written.push(output);
    }
    Ok(written)
}
