//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The clicked and brushed selection sets live here rather than in globals, so
//! every view re-renders from the same `Selection`.

use crate::config::TOOLTIP_OFFSET;
use chd_core::{Attribute, Dataset, Fips};
use chd_data::bins::Bin;
use chd_data::brush::BrushExtent;
use chd_data::format::{format_range, format_value};
use chd_data::path::MapFeature;
use chd_data::scatter::ScatterPoint;
use chd_data::selection::Selection;
use chd_db::Database;
use dioxus::prelude::*;
use std::rc::Rc;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Counties joined with their shapes
    pub dataset: Signal<Rc<Dataset>>,
    /// Projected county paths, computed once after loading
    pub map_features: Signal<Rc<Vec<MapFeature>>>,
    /// Attribute for the map, histogram and scatterplot X axis
    pub attribute: Signal<Attribute>,
    /// Attribute for the scatterplot Y axis
    pub y_attribute: Signal<Attribute>,
    /// Clicked and brushed counties
    pub selection: Signal<Selection>,
    /// Last brush rectangle drawn on the scatterplot
    pub brush: Signal<Option<BrushExtent>>,
    /// Tooltip currently shown, if any
    pub tooltip: Signal<Option<Tooltip>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            dataset: Signal::new(Rc::new(Dataset::default())),
            map_features: Signal::new(Rc::new(Vec::new())),
            attribute: Signal::new(Attribute::default()),
            y_attribute: Signal::new(Attribute::MedianHouseholdIncome),
            selection: Signal::new(Selection::new()),
            brush: Signal::new(None),
            tooltip: Signal::new(None),
        }
    }

    /// Drop the brush rectangle and its counties from the selection.
    pub fn reset_brush(&mut self) {
        self.brush.set(None);
        self.selection.write().clear_brushed();
    }
}

/// Tooltip contents and page position.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub left: f64,
    pub top: f64,
    pub title: Option<String>,
    pub rows: Vec<(String, String)>,
}

impl Tooltip {
    fn new(title: Option<String>, rows: Vec<(String, String)>) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            title,
            rows,
        }
    }

    /// Map hover: county name (or FIPS) and its value for `attribute`.
    pub fn county(dataset: &Dataset, fips: &Fips, attribute: Attribute) -> Self {
        Self::new(
            Some(dataset.label(fips)),
            vec![(
                attribute.display_name().to_string(),
                format_value(dataset.value(fips, attribute)),
            )],
        )
    }

    /// Histogram hover: rounded bin range and count.
    pub fn bin(bin: &Bin) -> Self {
        Self::new(
            None,
            vec![
                ("Range".to_string(), format_range(bin.x0, bin.x1)),
                ("Count".to_string(), bin.count().to_string()),
            ],
        )
    }

    /// Scatterplot hover: county name and both plotted values.
    pub fn point(dataset: &Dataset, point: &ScatterPoint, x_attr: Attribute, y_attr: Attribute) -> Self {
        Self::new(
            Some(dataset.label(&point.fips)),
            vec![
                (x_attr.display_name().to_string(), format_value(point.x_value)),
                (y_attr.display_name().to_string(), format_value(point.y_value)),
            ],
        )
    }

    /// Place the tooltip just below and right of a page-coordinate pointer.
    pub fn at(mut self, page: (f64, f64)) -> Self {
        self.left = page.0 + TOOLTIP_OFFSET;
        self.top = page.1 + TOOLTIP_OFFSET;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chd_core::county::parse_county_csv;

    fn sample() -> Dataset {
        let counties = parse_county_csv(include_str!("../../fixtures/sample_health.csv")).unwrap();
        Dataset::new(counties, Vec::new())
    }

    #[test]
    fn county_tooltip_shows_name_and_value() {
        let ds = sample();
        let t = Tooltip::county(&ds, &Fips::parse("1001").unwrap(), Attribute::PovertyPerc);
        assert_eq!(t.title.as_deref(), Some("Autauga County, AL"));
        assert_eq!(t.rows, vec![("Poverty Percent".to_string(), "15.2".to_string())]);
    }

    #[test]
    fn missing_values_read_na() {
        let ds = sample();
        let t = Tooltip::county(&ds, &Fips::parse("1005").unwrap(), Attribute::PercentSmoking);
        assert_eq!(t.rows[0].1, "N/A");

        let unknown = Tooltip::county(&ds, &Fips::parse("56045").unwrap(), Attribute::PovertyPerc);
        assert_eq!(unknown.title.as_deref(), Some("FIPS: 56045"));
        assert_eq!(unknown.rows[0].1, "N/A");
    }

    #[test]
    fn bin_tooltip_rounds_range() {
        let bin = Bin {
            x0: 10.4,
            x1: 12.0,
            members: vec![Fips::parse("1003").unwrap()],
        };
        let t = Tooltip::bin(&bin).at((100.0, 50.0));
        assert_eq!(t.rows[0], ("Range".to_string(), "10 - 12".to_string()));
        assert_eq!(t.rows[1], ("Count".to_string(), "1".to_string()));
        assert_eq!((t.left, t.top), (110.0, 60.0));
    }
}
