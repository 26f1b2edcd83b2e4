//! County FIPS codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digits in a county FIPS code (2 state + 3 county).
pub const FIPS_WIDTH: usize = 5;

/// A county FIPS code, always stored zero-padded to 5 digits.
///
/// The health CSV drops leading zeros (`1001`) while the topology keeps them
/// (`"01001"`); both normalize to the same value so the two sources can be
/// joined.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fips(String);

impl Fips {
    /// Parse a raw FIPS string, tolerating surrounding whitespace, quotes and
    /// missing leading zeros. Returns `None` for anything that is not 1 to 5
    /// ASCII digits.
    pub fn parse(raw: &str) -> Option<Fips> {
        let trimmed = raw.trim().trim_matches('"').trim();
        if trimmed.is_empty()
            || trimmed.len() > FIPS_WIDTH
            || !trimmed.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        Some(Fips(format!("{:0>width$}", trimmed, width = FIPS_WIDTH)))
    }

    /// Build a FIPS code from a TopoJSON geometry id, which may be either a
    /// string or a number.
    pub fn from_json(id: &serde_json::Value) -> Option<Fips> {
        match id {
            serde_json::Value::String(s) => Fips::parse(s),
            serde_json::Value::Number(n) => n.as_u64().and_then(|v| Fips::parse(&v.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-digit state prefix.
    pub fn state_code(&self) -> &str {
        &self.0[..2]
    }
}

impl fmt::Display for Fips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
