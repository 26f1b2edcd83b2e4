//! Histogram binning.
//!
//! Thresholds are the "nice" ticks inside the domain, so bins are
//! `[x0, t0), [t0, t1), ..., [tn, x1]` with the last bin closed. Each bin
//! keeps the FIPS codes of its counties so a bar can be toggled into the
//! selection.

use crate::selection::Selection;
use crate::ticks::ticks;
use chd_core::{Attribute, Dataset, Fips};
use serde::Serialize;

/// Number of thresholds requested from the tick generator.
pub const DEFAULT_THRESHOLDS: usize = 10;

/// One histogram bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bin {
    pub x0: f64,
    pub x1: f64,
    pub members: Vec<Fips>,
}

impl Bin {
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Whether the bar is toggled on: non-empty and every member clicked.
    pub fn is_selected(&self, selection: &Selection) -> bool {
        selection.bin_selected(&self.members)
    }

    /// Members currently highlighted by the selection.
    pub fn highlighted_count(&self, selection: &Selection) -> usize {
        self.members.iter().filter(|f| selection.is_highlighted(f)).count()
    }
}

/// Bin edges for `domain` using about `count` nice thresholds.
pub fn thresholds(domain: (f64, f64), count: usize) -> Vec<f64> {
    let (x0, x1) = domain;
    let mut tz = ticks(x0, x1, count);
    if tz.last().is_some_and(|&t| t >= x1) {
        tz.pop();
    }
    tz.retain(|&t| t > x0 && t <= x1);
    tz
}

/// Bin `(fips, value)` pairs over `domain`. NaN values and values outside the
/// domain are dropped.
pub fn bin_values<'a, I>(values: I, domain: (f64, f64), count: usize) -> Vec<Bin>
where
    I: IntoIterator<Item = (&'a Fips, f64)>,
{
    let (x0, x1) = domain;
    let tz = thresholds(domain, count);
    let mut bins: Vec<Bin> = (0..=tz.len())
        .map(|i| Bin {
            x0: if i > 0 { tz[i - 1] } else { x0 },
            x1: if i < tz.len() { tz[i] } else { x1 },
            members: Vec::new(),
        })
        .collect();

    for (fips, v) in values {
        if v.is_nan() || v < x0 || v > x1 {
            continue;
        }
        let i = tz.partition_point(|&t| t <= v);
        bins[i].members.push(fips.clone());
    }
    bins
}

/// Histogram of `attribute` over its extent. Empty when every value is NaN.
pub fn histogram(dataset: &Dataset, attribute: Attribute, count: usize) -> Vec<Bin> {
    let Some(domain) = dataset.extent(attribute) else {
        return Vec::new();
    };
    bin_values(
        dataset.counties().iter().map(|c| (&c.fips, c.value(attribute))),
        domain,
        count,
    )
}

/// The tallest bar, for the y-axis domain.
pub fn max_count(bins: &[Bin]) -> usize {
    bins.iter().map(Bin::count).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chd_core::county::parse_county_csv;

    fn sample() -> Dataset {
        let counties = parse_county_csv(include_str!("../../fixtures/sample_health.csv")).unwrap();
        Dataset::new(counties, Vec::new())
    }

    fn fips(code: &str) -> Fips {
        Fips::parse(code).unwrap()
    }

    #[test]
    fn thresholds_stay_inside_domain() {
        let tz = thresholds((10.4, 30.7), 10);
        assert_eq!(tz, vec![12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0]);
        assert_eq!(thresholds((0.0, 1.0), 10).last(), Some(&0.9));
        assert_eq!(thresholds((0.0, 1.0), 10).first(), Some(&0.1));
    }

    #[test]
    fn histogram_of_sample() {
        let bins = histogram(&sample(), Attribute::PovertyPerc, DEFAULT_THRESHOLDS);
        assert_eq!(bins.len(), 11);
        assert_eq!((bins[0].x0, bins[0].x1), (10.4, 12.0));
        assert_eq!((bins[10].x0, bins[10].x1), (30.0, 30.7));

        assert_eq!(bins[0].members, vec![fips("1003")]);
        assert_eq!(bins[2].members, vec![fips("1001")]);
        assert_eq!(bins[10].members, vec![fips("1005")]);

        let total: usize = bins.iter().map(Bin::count).sum();
        assert_eq!(total, 3, "NaN poverty value for Bibb is not binned");
        assert_eq!(max_count(&bins), 1);
    }

    #[test]
    fn constant_values_form_one_bin() {
        let a = fips("1001");
        let b = fips("1003");
        let bins = bin_values(vec![(&a, 5.0), (&b, 5.0)], (5.0, 5.0), 10);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count(), 2);
    }

    #[test]
    fn upper_bound_is_inclusive() {
        let a = fips("1001");
        let b = fips("1003");
        let bins = bin_values(vec![(&a, 0.0), (&b, 1.0)], (0.0, 1.0), 10);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins[0].members, vec![a.clone()]);
        assert_eq!(bins[9].members, vec![b.clone()]);
    }

    #[test]
    fn all_nan_attribute_has_no_bins() {
        let counties = parse_county_csv("cnty_fips,display_name,percent_stroke\n1001,A,-1\n").unwrap();
        let ds = Dataset::new(counties, Vec::new());
        assert!(histogram(&ds, Attribute::PercentStroke, 10).is_empty());
    }

    #[test]
    fn selected_flag_tracks_clicked_members() {
        let bins = histogram(&sample(), Attribute::PovertyPerc, DEFAULT_THRESHOLDS);
        let mut selection = Selection::new();
        assert!(!bins[0].is_selected(&selection));
        selection.toggle_bin(&bins[0].members);
        assert!(bins[0].is_selected(&selection));
        assert!(!bins[1].is_selected(&selection), "empty bins are never selected");
        assert_eq!(bins[2].highlighted_count(&selection), 0);
    }

    #[test]
    fn bins_serialize_with_fips_strings() {
        let a = fips("1001");
        let bins = bin_values(vec![(&a, 1.0)], (0.0, 4.0), 2);
        let json = serde_json::to_value(&bins[0]).unwrap();
        assert_eq!(json["x0"], 0.0);
        assert_eq!(json["members"], serde_json::json!(["01001"]));
    }
}
