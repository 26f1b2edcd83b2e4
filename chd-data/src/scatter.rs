//! Scatterplot layout.

use crate::brush::BrushExtent;
use crate::scale::LinearScale;
use chd_core::{Attribute, Dataset, Fips};

/// A county plotted in the scatterplot's inner area.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub fips: Fips,
    pub x: f64,
    pub y: f64,
    pub x_value: f64,
    pub y_value: f64,
}

/// Scales and points for one pair of attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLayout {
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub points: Vec<ScatterPoint>,
}

impl ScatterLayout {
    /// Lay out `x_attr` against `y_attr` in a `width` x `height` plot area.
    /// Both domains are the niced extents; counties missing either value
    /// are left out. `None` when either attribute has no values at all.
    pub fn new(dataset: &Dataset, x_attr: Attribute, y_attr: Attribute, width: f64, height: f64) -> Option<Self> {
        let x_scale = LinearScale::new(dataset.extent(x_attr)?, (0.0, width)).nice(10);
        let y_scale = LinearScale::new(dataset.extent(y_attr)?, (height, 0.0)).nice(10);
        let points = dataset
            .counties()
            .iter()
            .filter_map(|c| {
                let x_value = c.try_value(x_attr)?;
                let y_value = c.try_value(y_attr)?;
                Some(ScatterPoint {
                    fips: c.fips.clone(),
                    x: x_scale.scale(x_value),
                    y: y_scale.scale(y_value),
                    x_value,
                    y_value,
                })
            })
            .collect();
        Some(Self {
            x_scale,
            y_scale,
            points,
        })
    }

    /// Counties whose points fall inside the brush.
    pub fn brushed(&self, extent: &BrushExtent) -> Vec<Fips> {
        self.points
            .iter()
            .filter(|p| extent.contains((p.x, p.y)))
            .map(|p| p.fips.clone())
            .collect()
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
    fn skips_counties_missing_either_value() {
        let layout = ScatterLayout::new(
            &sample(),
            Attribute::PovertyPerc,
            Attribute::MedianHouseholdIncome,
            500.0,
            320.0,
        )
        .unwrap();
        let ids: Vec<&str> = layout.points.iter().map(|p| p.fips.as_str()).collect();
        assert_eq!(ids, vec!["01001", "01003", "01005"]);
    }

    #[test]
    fn domains_are_niced() {
        let layout = ScatterLayout::new(
            &sample(),
            Attribute::PovertyPerc,
            Attribute::MedianHouseholdIncome,
            500.0,
            320.0,
        )
        .unwrap();
        assert_eq!(layout.x_scale.domain(), (10.0, 32.0));
        assert_eq!(layout.y_scale.domain(), (32000.0, 60000.0));
        // y grows upward
        let barbour = &layout.points[2];
        assert!(barbour.y > layout.points[0].y);
    }

    #[test]
    fn brush_selects_points_inside() {
        let layout = ScatterLayout::new(
            &sample(),
            Attribute::PovertyPerc,
            Attribute::MedianHouseholdIncome,
            500.0,
            320.0,
        )
        .unwrap();
        // Left half of the plot: poverty below 21.
        let extent = BrushExtent::from_corners((0.0, 0.0), (250.0, 320.0), 500.0, 320.0);
        let mut picked = layout.brushed(&extent);
        picked.sort();
        let ids: Vec<&str> = picked.iter().map(|f| f.as_str()).collect();
        assert_eq!(ids, vec!["01001", "01003"]);
    }

    #[test]
    fn no_layout_without_values() {
        let counties = parse_county_csv("cnty_fips,display_name,poverty_perc\n1001,A,5\n").unwrap();
        let ds = Dataset::new(counties, Vec::new());
        assert!(ScatterLayout::new(&ds, Attribute::PovertyPerc, Attribute::PercentStroke, 10.0, 10.0).is_none());
    }
}
