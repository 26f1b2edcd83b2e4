//! Loading county records into the database.

use crate::Database;
use chd_core::county::parse_county_csv;
use chd_core::{Attribute, County};
use rusqlite::params;

impl Database {
    /// Parse the health statistics CSV and load every county.
    ///
    /// Returns the number of rows loaded. A repeated FIPS code replaces the
    /// earlier row.
    pub fn load_counties(&self, csv_data: &str) -> anyhow::Result<usize> {
        let counties = parse_county_csv(csv_data)?;
        self.insert_counties(&counties)
    }

    /// Insert already-parsed county records in a single transaction.
    pub fn insert_counties(&self, counties: &[County]) -> anyhow::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO counties
                 (fips, display_name, poverty_perc, percent_smoking, median_household_income, percent_stroke)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for c in counties {
                stmt.execute(params![
                    c.fips.as_str(),
                    c.display_name,
                    c.try_value(Attribute::PovertyPerc),
                    c.try_value(Attribute::PercentSmoking),
                    c.try_value(Attribute::MedianHouseholdIncome),
                    c.try_value(Attribute::PercentStroke),
                ])?;
            }
        }
        tx.commit()?;
        log::info!("[CHD] loader: loaded {} counties", counties.len());
        Ok(counties.len())
    }
}
