//! Query result models.

use chd_core::Attribute;
use serde::Serialize;

/// Aggregate statistics for one attribute across all counties.
///
/// `min`, `max` and `mean` are `None` when every county is missing the
/// attribute.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AttributeSummary {
    pub attribute: Attribute,
    /// Counties with a value.
    pub count: usize,
    /// Counties whose value is N/A.
    pub missing: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}
