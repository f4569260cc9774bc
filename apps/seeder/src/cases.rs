//! Demo case catalogue
//!
//! Each [`DemoCase`] is one synthetic UTI scenario consumed by the downstream
//! rule engine. The built-in catalogue is compiled into the binary from
//! `data/demo_cases.json`; an alternate catalogue with the same shape can be
//! loaded from disk.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::path::Path;

const BUILTIN_CATALOGUE: &str = include_str!("../data/demo_cases.json");

/// One synthetic clinical scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoCase {
    pub admit_date: NaiveDate,
    pub lab_date: NaiveDate,

    /// Dates on which urinary signs other than fever were charted
    #[serde(default)]
    pub symptom_dates: Vec<NaiveDate>,

    /// Fractional for infants (0.3 = roughly 4 months). Kept as the JSON
    /// number the catalogue wrote, so `40` stays `40` on the wire.
    pub age_years: Number,

    /// Body temperature in degrees Celsius
    pub temp_c: Number,

    #[serde(default)]
    pub catheter_periods: Vec<CatheterPeriod>,

    /// Serialized as `null` when absent
    pub urinary_retention_date: Option<NaiveDate>,

    pub has_bladder_scan_or_straight_cath: bool,

    #[serde(default)]
    pub nursing_note_text: String,

    pub infant_keywords_hit: bool,

    /// Three-valued: `Some(true)`, `Some(false)`, or unknown (`null`)
    pub urinary_other_symptom: Option<bool>,
}

/// Inclusive catheter dwell interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatheterPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A titled case, as listed in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoDefinition {
    pub title: String,
    pub case: DemoCase,
}

/// The six built-in demo cases, in submission order.
pub fn builtin_cases() -> Result<Vec<DemoDefinition>> {
    parse_catalogue(BUILTIN_CATALOGUE, Path::new("<builtin>/demo_cases.json"))
}

/// Load a catalogue file with the same layout as the built-in one.
pub fn load_cases(path: &Path) -> Result<Vec<DemoDefinition>> {
    let raw = std::fs::read_to_string(path)?;
    parse_catalogue(&raw, path)
}

fn parse_catalogue(raw: &str, origin: &Path) -> Result<Vec<DemoDefinition>> {
    serde_json::from_str(raw).map_err(|source| Error::Catalogue {
        path: origin.to_path_buf(),
        source,
    })
}
