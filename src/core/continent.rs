//! Continent disambiguation for the coarse "Americas" label.
//!
//! The country reference table groups North and South America under one
//! continent. A second, independent classification (ISO alpha-2 code →
//! seven-way continent code → continent name) splits them again.

use std::collections::HashMap;

use crate::util::constants::AMERICAS_LABEL;

/// Failure of the secondary classification source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// The country code has no continent assignment.
    #[error("No continent known for country code '{0}'")]
    UnknownCountry(String),

    /// The continent code is not one of the seven known codes.
    #[error("Unknown continent code '{0}'")]
    UnknownContinent(String),
}

/// The seven-way continent classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    Africa,
    Antarctica,
    Asia,
    Europe,
    NorthAmerica,
    Oceania,
    SouthAmerica,
}

impl Continent {
    pub const ALL: [Continent; 7] = [
        Continent::Africa,
        Continent::Antarctica,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::Oceania,
        Continent::SouthAmerica,
    ];

    /// Two-letter continent code, e.g. `"NA"`.
    pub fn code(&self) -> &'static str {
        match self {
            Continent::Africa => "AF",
            Continent::Antarctica => "AN",
            Continent::Asia => "AS",
            Continent::Europe => "EU",
            Continent::NorthAmerica => "NA",
            Continent::Oceania => "OC",
            Continent::SouthAmerica => "SA",
        }
    }

    /// Human-readable continent name, e.g. `"North America"`.
    pub fn name(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Antarctica => "Antarctica",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::Oceania => "Oceania",
            Continent::SouthAmerica => "South America",
        }
    }

    /// Parse a two-letter continent code.
    pub fn from_code(code: &str) -> Result<Continent, ClassifyError> {
        Continent::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| ClassifyError::UnknownContinent(code.to_owned()))
    }
}

/// A source that maps country codes to continent codes and names.
pub trait ContinentClassifier {
    /// Continent code for an ISO alpha-2 country code.
    fn country_to_continent_code(&self, country_code: &str) -> Result<String, ClassifyError>;

    /// Continent name for a continent code.
    fn continent_code_to_name(&self, continent_code: &str) -> Result<String, ClassifyError> {
        Continent::from_code(continent_code).map(|c| c.name().to_owned())
    }
}

/// Refine a coarse continent label.
///
/// Any label other than `"Americas"` is returned unchanged. For `"Americas"`
/// the country code is resolved through `classifier`; an unknown code is
/// an error for the caller to handle.
pub fn refine<C: ContinentClassifier + ?Sized>(
    classifier: &C,
    country_code: &str,
    coarse_continent: &str,
) -> Result<String, ClassifyError> {
    if coarse_continent != AMERICAS_LABEL {
        return Ok(coarse_continent.to_owned());
    }
    let continent_code = classifier.country_to_continent_code(country_code)?;
    classifier.continent_code_to_name(&continent_code)
}

/// Built-in ISO 3166 alpha-2 → continent classification.
#[derive(Debug, Clone)]
pub struct IsoContinentClassifier {
    by_country: HashMap<&'static str, Continent>,
}

impl Default for IsoContinentClassifier {
    fn default() -> Self {
        Self {
            by_country: COUNTRY_CONTINENTS.iter().copied().collect(),
        }
    }
}

impl IsoContinentClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Typed lookup for callers that do not need the string contract.
    pub fn continent_of(&self, country_code: &str) -> Option<Continent> {
        self.by_country.get(country_code).copied()
    }
}

impl ContinentClassifier for IsoContinentClassifier {
    fn country_to_continent_code(&self, country_code: &str) -> Result<String, ClassifyError> {
        self.continent_of(country_code)
            .map(|c| c.code().to_owned())
            .ok_or_else(|| ClassifyError::UnknownCountry(country_code.to_owned()))
    }
}

use Continent::{
    Africa as AF, Antarctica as AN, Asia as AS, Europe as EU, NorthAmerica as NA, Oceania as OC,
    SouthAmerica as SA,
};

#[rustfmt::skip]
const COUNTRY_CONTINENTS: &[(&str, Continent)] = &[
    ("AD", EU), ("AE", AS), ("AF", AS), ("AG", NA), ("AI", NA), ("AL", EU), ("AM", AS), ("AO", AF),
    ("AQ", AN), ("AR", SA), ("AS", OC), ("AT", EU), ("AU", OC), ("AW", NA), ("AX", EU), ("AZ", AS),
    ("BA", EU), ("BB", NA), ("BD", AS), ("BE", EU), ("BF", AF), ("BG", EU), ("BH", AS), ("BI", AF),
    ("BJ", AF), ("BL", NA), ("BM", NA), ("BN", AS), ("BO", SA), ("BQ", NA), ("BR", SA), ("BS", NA),
    ("BT", AS), ("BV", AN), ("BW", AF), ("BY", EU), ("BZ", NA), ("CA", NA), ("CC", AS), ("CD", AF),
    ("CF", AF), ("CG", AF), ("CH", EU), ("CI", AF), ("CK", OC), ("CL", SA), ("CM", AF), ("CN", AS),
    ("CO", SA), ("CR", NA), ("CU", NA), ("CV", AF), ("CW", NA), ("CX", AS), ("CY", AS), ("CZ", EU),
    ("DE", EU), ("DJ", AF), ("DK", EU), ("DM", NA), ("DO", NA), ("DZ", AF), ("EC", SA), ("EE", EU),
    ("EG", AF), ("EH", AF), ("ER", AF), ("ES", EU), ("ET", AF), ("FI", EU), ("FJ", OC), ("FK", SA),
    ("FM", OC), ("FO", EU), ("FR", EU), ("GA", AF), ("GB", EU), ("GD", NA), ("GE", AS), ("GF", SA),
    ("GG", EU), ("GH", AF), ("GI", EU), ("GL", NA), ("GM", AF), ("GN", AF), ("GP", NA), ("GQ", AF),
    ("GR", EU), ("GS", AN), ("GT", NA), ("GU", OC), ("GW", AF), ("GY", SA), ("HK", AS), ("HM", AN),
    ("HN", NA), ("HR", EU), ("HT", NA), ("HU", EU), ("ID", AS), ("IE", EU), ("IL", AS), ("IM", EU),
    ("IN", AS), ("IO", AS), ("IQ", AS), ("IR", AS), ("IS", EU), ("IT", EU), ("JE", EU), ("JM", NA),
    ("JO", AS), ("JP", AS), ("KE", AF), ("KG", AS), ("KH", AS), ("KI", OC), ("KM", AF), ("KN", NA),
    ("KP", AS), ("KR", AS), ("KW", AS), ("KY", NA), ("KZ", AS), ("LA", AS), ("LB", AS), ("LC", NA),
    ("LI", EU), ("LK", AS), ("LR", AF), ("LS", AF), ("LT", EU), ("LU", EU), ("LV", EU), ("LY", AF),
    ("MA", AF), ("MC", EU), ("MD", EU), ("ME", EU), ("MF", NA), ("MG", AF), ("MH", OC), ("MK", EU),
    ("ML", AF), ("MM", AS), ("MN", AS), ("MO", AS), ("MP", OC), ("MQ", NA), ("MR", AF), ("MS", NA),
    ("MT", EU), ("MU", AF), ("MV", AS), ("MW", AF), ("MX", NA), ("MY", AS), ("MZ", AF), ("NA", AF),
    ("NC", OC), ("NE", AF), ("NF", OC), ("NG", AF), ("NI", NA), ("NL", EU), ("NO", EU), ("NP", AS),
    ("NR", OC), ("NU", OC), ("NZ", OC), ("OM", AS), ("PA", NA), ("PE", SA), ("PF", OC), ("PG", OC),
    ("PH", AS), ("PK", AS), ("PL", EU), ("PM", NA), ("PN", OC), ("PR", NA), ("PS", AS), ("PT", EU),
    ("PW", OC), ("PY", SA), ("QA", AS), ("RE", AF), ("RO", EU), ("RS", EU), ("RU", EU), ("RW", AF),
    ("SA", AS), ("SB", OC), ("SC", AF), ("SD", AF), ("SE", EU), ("SG", AS), ("SH", AF), ("SI", EU),
    ("SJ", EU), ("SK", EU), ("SL", AF), ("SM", EU), ("SN", AF), ("SO", AF), ("SR", SA), ("SS", AF),
    ("ST", AF), ("SV", NA), ("SX", NA), ("SY", AS), ("SZ", AF), ("TC", NA), ("TD", AF), ("TF", AN),
    ("TG", AF), ("TH", AS), ("TJ", AS), ("TK", OC), ("TL", AS), ("TM", AS), ("TN", AF), ("TO", OC),
    ("TR", AS), ("TT", NA), ("TV", OC), ("TW", AS), ("TZ", AF), ("UA", EU), ("UG", AF), ("UM", OC),
    ("US", NA), ("UY", SA), ("UZ", AS), ("VA", EU), ("VC", NA), ("VE", SA), ("VG", NA), ("VI", NA),
    ("VN", AS), ("VU", OC), ("WF", OC), ("WS", OC), ("YE", AS), ("YT", AF), ("ZA", AF), ("ZM", AF),
    ("ZW", AF),
];
