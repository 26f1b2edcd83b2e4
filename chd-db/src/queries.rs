//! Typed queries over the `counties` table.

use crate::models::AttributeSummary;
use crate::Database;
use chd_core::{Attribute, County, Fips};
use rusqlite::{params, OptionalExtension, Row};

const COUNTY_COLUMNS: &str =
    "fips, display_name, poverty_perc, percent_smoking, median_household_income, percent_stroke";

fn county_from_row(row: &Row<'_>) -> rusqlite::Result<County> {
    let fips: String = row.get(0)?;
    let display_name: String = row.get(1)?;
    let mut values = [f64::NAN; 4];
    for (i, slot) in values.iter_mut().enumerate() {
        let v: Option<f64> = row.get(2 + i)?;
        *slot = v.unwrap_or(f64::NAN);
    }
    let fips = Fips::parse(&fips).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            format!("invalid FIPS code {:?}", fips).into(),
        )
    })?;
    Ok(County::new(fips, display_name, values))
}

impl Database {
    /// All counties ordered by FIPS code.
    pub fn query_counties(&self) -> anyhow::Result<Vec<County>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!("SELECT {} FROM counties ORDER BY fips", COUNTY_COLUMNS))?;
        let rows = stmt
            .query_map([], county_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[CHD] query: query_counties returned {} records", rows.len());
        Ok(rows)
    }

    /// A single county by FIPS code.
    pub fn query_county(&self, fips: &Fips) -> anyhow::Result<Option<County>> {
        let conn = self.conn.borrow();
        let county = conn
            .query_row(
                &format!("SELECT {} FROM counties WHERE fips = ?1", COUNTY_COLUMNS),
                params![fips.as_str()],
                county_from_row,
            )
            .optional()?;
        Ok(county)
    }

    /// Minimum and maximum of `attribute`, ignoring N/A values.
    pub fn query_extent(&self, attribute: Attribute) -> anyhow::Result<Option<(f64, f64)>> {
        let conn = self.conn.borrow();
        let col = attribute.column();
        let (min, max): (Option<f64>, Option<f64>) = conn.query_row(
            &format!("SELECT MIN({col}), MAX({col}) FROM counties WHERE {col} IS NOT NULL"),
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(min.zip(max))
    }

    /// Number of counties whose `attribute` is N/A.
    pub fn query_missing_count(&self, attribute: Attribute) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let n: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM counties WHERE {} IS NULL", attribute.column()),
            [],
            |row| row.get(0),
        )?;
        Ok(n as usize)
    }

    /// Count, N/A count, min, max and mean of `attribute`.
    pub fn query_attribute_summary(&self, attribute: Attribute) -> anyhow::Result<AttributeSummary> {
        let conn = self.conn.borrow();
        let col = attribute.column();
        let summary = conn.query_row(
            &format!(
                "SELECT COUNT({col}), COUNT(*) - COUNT({col}), MIN({col}), MAX({col}), AVG({col})
                 FROM counties"
            ),
            [],
            |row| {
                let count: i64 = row.get(0)?;
                let missing: i64 = row.get(1)?;
                Ok(AttributeSummary {
                    attribute,
                    count: count as usize,
                    missing: missing as usize,
                    min: row.get(2)?,
                    max: row.get(3)?,
                    mean: row.get(4)?,
                })
            },
        )?;
        Ok(summary)
    }

    /// Summaries for every attribute in dropdown order.
    pub fn query_all_summaries(&self) -> anyhow::Result<Vec<AttributeSummary>> {
        Attribute::ALL
            .iter()
            .map(|&a| self.query_attribute_summary(a))
            .collect()
    }
}
