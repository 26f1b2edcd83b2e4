//! County records and the health statistics CSV parser.
//!
//! # CSV Format
//!
//! The statistics file has a header row. Columns are located by name, so
//! their order does not matter and extra columns are ignored:
//!
//! ```text
//! cnty_fips,display_name,poverty_perc,median_household_income,percent_smoking,percent_stroke,...
//! 1001,"""Autauga County, AL""",15.2,58731,18.1,3.9,...
//! ```
//!
//! Negative values are the source's missing-data sentinel and, like empty or
//! non-numeric cells, become NaN.

use crate::attribute::Attribute;
use crate::error::{ChdError, Result};
use crate::fips::Fips;
use serde::Serialize;

/// Column holding the county FIPS code.
pub const FIPS_COLUMN: &str = "cnty_fips";
/// Column holding the county display name.
pub const NAME_COLUMN: &str = "display_name";

/// A single county with its four health statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct County {
    pub fips: Fips,
    /// Display name with embedded double quotes removed (e.g. "Autauga County, AL").
    pub display_name: String,
    /// Attribute values indexed by [`Attribute::index`]; NaN when missing.
    values: [f64; 4],
}

impl County {
    pub fn new(fips: Fips, display_name: impl Into<String>, values: [f64; 4]) -> Self {
        Self {
            fips,
            display_name: clean_display_name(&display_name.into()),
            values: values.map(sanitize_value),
        }
    }

    /// The value of `attribute`, NaN when the source value was missing or negative.
    pub fn value(&self, attribute: Attribute) -> f64 {
        self.values[attribute.index()]
    }

    /// The value of `attribute` if it is present.
    pub fn try_value(&self, attribute: Attribute) -> Option<f64> {
        let v = self.value(attribute);
        if v.is_nan() {
            None
        } else {
            Some(v)
        }
    }

    pub fn values(&self) -> [f64; 4] {
        self.values
    }
}

/// Coerce a raw cell to a statistic: negative, empty or unparseable becomes NaN.
pub fn parse_value(raw: &str) -> f64 {
    match raw.trim().trim_matches('"').parse::<f64>() {
        Ok(v) => sanitize_value(v),
        Err(_) => f64::NAN,
    }
}

fn sanitize_value(v: f64) -> f64 {
    if v.is_finite() && v >= 0.0 {
        v
    } else {
        f64::NAN
    }
}

fn clean_display_name(raw: &str) -> String {
    raw.replace('"', "").trim().to_string()
}

/// Parse the health statistics CSV into county records.
///
/// `cnty_fips` and `display_name` are required; a missing attribute column
/// leaves that attribute NaN for every county. Rows whose FIPS code cannot
/// be parsed are skipped.
pub fn parse_county_csv(csv_data: &str) -> Result<Vec<County>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);

    let fips_idx = column(FIPS_COLUMN).ok_or_else(|| ChdError::MissingColumn(FIPS_COLUMN.into()))?;
    let name_idx = column(NAME_COLUMN).ok_or_else(|| ChdError::MissingColumn(NAME_COLUMN.into()))?;
    let attr_idx: Vec<Option<usize>> = Attribute::ALL.iter().map(|a| column(a.column())).collect();

    for (attr, idx) in Attribute::ALL.iter().zip(&attr_idx) {
        if idx.is_none() {
            log::warn!("[CHD] county csv: column {} missing, all values N/A", attr.column());
        }
    }

    let mut counties = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let record = result?;
        let Some(fips) = Fips::parse(record.get(fips_idx).unwrap_or("")) else {
            skipped += 1;
            continue;
        };
        let name = record.get(name_idx).unwrap_or("");
        let mut values = [f64::NAN; 4];
        for (slot, idx) in values.iter_mut().zip(&attr_idx) {
            if let Some(raw) = idx.and_then(|i| record.get(i)) {
                *slot = parse_value(raw);
            }
        }
        counties.push(County::new(fips, name, values));
    }

    if skipped > 0 {
        log::warn!("[CHD] county csv: skipped {} rows with an invalid FIPS code", skipped);
    }
    log::info!("[CHD] county csv: parsed {} counties", counties.len());
    Ok(counties)
}
