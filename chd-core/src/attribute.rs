//! The health statistics charted by the dashboard.

use crate::error::ChdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four numeric county attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    #[default]
    PovertyPerc,
    PercentSmoking,
    MedianHouseholdIncome,
    PercentStroke,
}

impl Attribute {
    /// All attributes in dropdown order.
    pub const ALL: [Attribute; 4] = [
        Attribute::PovertyPerc,
        Attribute::PercentSmoking,
        Attribute::MedianHouseholdIncome,
        Attribute::PercentStroke,
    ];

    /// Column name in the health CSV (also used as the `<option>` value).
    pub fn column(self) -> &'static str {
        match self {
            Attribute::PovertyPerc => "poverty_perc",
            Attribute::PercentSmoking => "percent_smoking",
            Attribute::MedianHouseholdIncome => "median_household_income",
            Attribute::PercentStroke => "percent_stroke",
        }
    }

    /// Human-readable name for titles, axis labels and tooltips.
    pub fn display_name(self) -> &'static str {
        match self {
            Attribute::PovertyPerc => "Poverty Percent",
            Attribute::PercentSmoking => "Percent Smoking",
            Attribute::MedianHouseholdIncome => "Median Household Income",
            Attribute::PercentStroke => "Percent Stroke",
        }
    }

    /// Position in [`Attribute::ALL`], used to index per-county value arrays.
    pub fn index(self) -> usize {
        match self {
            Attribute::PovertyPerc => 0,
            Attribute::PercentSmoking => 1,
            Attribute::MedianHouseholdIncome => 2,
            Attribute::PercentStroke => 3,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Attribute {
    type Err = ChdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|a| a.column() == s.trim())
            .ok_or_else(|| ChdError::UnknownAttribute(s.to_string()))
    }
}
