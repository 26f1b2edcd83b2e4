//! SQL schema for the in-memory SQLite database.

/// Returns the full SQL schema as a single batch string.
///
/// One row per county. Attribute columns are nullable: a missing or negative
/// source value is stored as NULL rather than NaN so SQL aggregates skip it.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS counties (
        fips TEXT PRIMARY KEY,
        display_name TEXT NOT NULL,
        poverty_perc REAL,
        percent_smoking REAL,
        median_household_income REAL,
        percent_stroke REAL
    );
    "#
}
