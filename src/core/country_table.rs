//! Country reference table: ISO alpha-2 code → name, sub-continent, continent.
//!
//! Built once from the country reference CSV (Input B) and read-only for the
//! rest of the run. Antarctica is excluded and sub-continent labels are
//! normalized so that every entry carries a non-empty sub-continent.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::util::constants::*;
use crate::util::error::{missing_column, PrepError, Result};

const SOURCE_NAME: &str = "countries";

/// One raw row of the country reference file, reduced to the fields the
/// table needs. Empty strings mean "not supplied".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryRow {
    pub name: String,
    pub code: String,
    pub continent: String,
    pub region: String,
    pub sub_continent: String,
}

impl CountryRow {
    pub fn new(name: &str, code: &str, continent: &str, region: &str, sub_continent: &str) -> Self {
        Self {
            name: name.to_owned(),
            code: code.to_owned(),
            continent: continent.to_owned(),
            region: region.to_owned(),
            sub_continent: sub_continent.to_owned(),
        }
    }
}

/// A resolved country with its position in the geographic taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry {
    pub code: String,
    pub name: String,
    pub sub_continent: String,
    pub continent: String,
}

/// Immutable mapping from ISO alpha-2 code to [`CountryEntry`].
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    entries: HashMap<String, CountryEntry>,
}

impl CountryTable {
    /// Build the table from reference rows, in order.
    ///
    /// Rows for Antarctica (`AQ`) are skipped. The sub-continent is the finest
    /// label the row supplies: the sub-continent column, else the region
    /// column, else the continent itself. A sub-continent column reading
    /// `"South America"` is renamed to `"Southern America"`; fallback labels
    /// are kept as written. A later row with the same code replaces an
    /// earlier one.
    pub fn load<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = CountryRow>,
    {
        let mut entries = HashMap::new();
        for row in rows {
            if row.code == ANTARCTICA_CODE {
                continue;
            }
            let sub_continent = normalize_sub_continent(&row);
            entries.insert(
                row.code.clone(),
                CountryEntry {
                    code: row.code,
                    name: row.name,
                    sub_continent,
                    continent: row.continent,
                },
            );
        }
        Self { entries }
    }

    /// Look up a country by ISO alpha-2 code.
    pub fn get(&self, code: &str) -> Option<&CountryEntry> {
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_sub_continent(row: &CountryRow) -> String {
    if row.sub_continent == SOUTH_AMERICA_LABEL {
        SOUTHERN_AMERICA_LABEL.to_owned()
    } else if !row.sub_continent.is_empty() {
        row.sub_continent.clone()
    } else if !row.region.is_empty() {
        row.region.clone()
    } else {
        row.continent.clone()
    }
}

/// Load and build the country table from the CSV file at `path`.
///
/// # Errors
/// Returns [`PrepError::MissingInput`] if the file does not exist and a
/// structural error for rows missing any required column.
pub fn load_country_table(path: &Path) -> Result<CountryTable> {
    if !path.is_file() {
        return Err(PrepError::MissingInput(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    let rows = read_country_rows(std::io::BufReader::new(file))?;
    let table = CountryTable::load(rows);
    tracing::info!(
        "Built country table with {} entries from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Parse country reference rows from any CSV byte stream. The first row is
/// treated as a header.
pub fn read_country_rows<R: Read>(input: R) -> Result<Vec<CountryRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let field = |column: usize| -> Result<String> {
            record
                .get(column)
                .map(str::to_owned)
                .ok_or_else(|| missing_column(SOURCE_NAME, line, column))
        };
        rows.push(CountryRow {
            name: field(COUNTRY_COL_NAME)?,
            code: field(COUNTRY_COL_CODE)?,
            continent: field(COUNTRY_COL_CONTINENT)?,
            region: field(COUNTRY_COL_REGION)?,
            sub_continent: field(COUNTRY_COL_SUB_CONTINENT)?,
        });
    }
    Ok(rows)
}
