//! Counties joined with their geometry.

use crate::attribute::Attribute;
use crate::county::County;
use crate::fips::Fips;
use crate::topology::CountyShape;
use std::collections::{HashMap, HashSet};

/// All county records and shapes loaded at startup, indexed by FIPS code.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    counties: Vec<County>,
    shapes: Vec<CountyShape>,
    by_fips: HashMap<Fips, usize>,
}

impl Dataset {
    /// Build a dataset. When the CSV repeats a FIPS code only the last row
    /// is kept, at that row's position.
    pub fn new(counties: Vec<County>, shapes: Vec<CountyShape>) -> Self {
        let last: HashMap<Fips, usize> = counties
            .iter()
            .enumerate()
            .map(|(i, c)| (c.fips.clone(), i))
            .collect();
        let total = counties.len();
        let counties: Vec<County> = counties
            .into_iter()
            .enumerate()
            .filter(|(i, c)| last.get(&c.fips) == Some(i))
            .map(|(_, c)| c)
            .collect();
        if counties.len() < total {
            log::warn!(
                "[CHD] dataset: dropped {} duplicate county rows",
                total - counties.len()
            );
        }
        let by_fips = counties
            .iter()
            .enumerate()
            .map(|(i, c)| (c.fips.clone(), i))
            .collect();
        Self {
            counties,
            shapes,
            by_fips,
        }
    }

    pub fn counties(&self) -> &[County] {
        &self.counties
    }

    pub fn shapes(&self) -> &[CountyShape] {
        &self.shapes
    }

    pub fn county(&self, fips: &Fips) -> Option<&County> {
        self.by_fips.get(fips).map(|&i| &self.counties[i])
    }

    pub fn is_empty(&self) -> bool {
        self.counties.is_empty()
    }

    /// The value of `attribute` for `fips`; NaN when the county is unknown or
    /// its value is missing.
    pub fn value(&self, fips: &Fips, attribute: Attribute) -> f64 {
        self.county(fips).map_or(f64::NAN, |c| c.value(attribute))
    }

    /// Every county's value for `attribute`, NaN included, in record order.
    pub fn values(&self, attribute: Attribute) -> Vec<f64> {
        self.counties.iter().map(|c| c.value(attribute)).collect()
    }

    /// Minimum and maximum of the non-NaN values of `attribute`.
    pub fn extent(&self, attribute: Attribute) -> Option<(f64, f64)> {
        self.counties
            .iter()
            .filter_map(|c| c.try_value(attribute))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Label for a county: its display name, else `FIPS: {code}`.
    pub fn label(&self, fips: &Fips) -> String {
        if let Some(c) = self.county(fips).filter(|c| !c.display_name.is_empty()) {
            return c.display_name.clone();
        }
        format!("FIPS: {}", fips)
    }

    /// County records with no matching shape.
    pub fn counties_without_shape(&self) -> Vec<&County> {
        let shaped: HashSet<&Fips> = self.shapes.iter().map(|s| &s.fips).collect();
        self.counties.iter().filter(|c| !shaped.contains(&c.fips)).collect()
    }

    /// Shapes with no matching county record.
    pub fn shapes_without_data(&self) -> Vec<&CountyShape> {
        self.shapes.iter().filter(|s| self.county(&s.fips).is_none()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::county::parse_county_csv;
    use crate::topology::parse_counties;

    fn sample() -> Dataset {
        let counties = parse_county_csv(include_str!("../../fixtures/sample_health.csv")).unwrap();
        let shapes = parse_counties(include_str!("../../fixtures/sample_counties.topo.json")).unwrap();
        Dataset::new(counties, shapes)
    }

    #[test]
    fn looks_up_by_fips() {
        let ds = sample();
        let fips = Fips::parse("1003").unwrap();
        assert_eq!(ds.county(&fips).unwrap().display_name, "Baldwin County, AL");
        assert_eq!(ds.value(&fips, Attribute::PovertyPerc), 10.4);
    }

    #[test]
    fn extent_ignores_nan() {
        let ds = sample();
        assert_eq!(ds.extent(Attribute::PovertyPerc), Some((10.4, 30.7)));
        assert_eq!(ds.extent(Attribute::PercentSmoking), Some((16.8, 19.2)));
    }

    #[test]
    fn extent_of_empty_dataset_is_none() {
        assert_eq!(Dataset::default().extent(Attribute::PercentStroke), None);
    }

    #[test]
    fn unknown_county_value_is_nan_and_labelled_by_fips() {
        let ds = sample();
        let fips = Fips::parse("99001").unwrap();
        assert!(ds.value(&fips, Attribute::PovertyPerc).is_nan());
        assert_eq!(ds.label(&fips), "FIPS: 99001");
    }

    #[test]
    fn duplicate_fips_keeps_only_the_last_row() {
        let csv = "cnty_fips,display_name,poverty_perc\n1001,Old,5\n01001,New,25\n1003,B,15\n";
        let ds = Dataset::new(parse_county_csv(csv).unwrap(), Vec::new());
        let fips = Fips::parse("1001").unwrap();
        assert_eq!(ds.counties().len(), 2);
        assert_eq!(ds.value(&fips, Attribute::PovertyPerc), 25.0);
        assert_eq!(ds.extent(Attribute::PovertyPerc), Some((15.0, 25.0)));
        let order: Vec<&str> = ds.counties().iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(order, vec!["New", "B"]);
        assert_eq!(ds.county(&fips).unwrap().display_name, "New");
    }

    #[test]
    fn reports_join_gaps() {
        let ds = sample();
        let missing: Vec<&str> = ds.counties_without_shape().iter().map(|c| c.fips.as_str()).collect();
        assert_eq!(missing, vec!["01007"]);
        assert!(ds.shapes_without_data().is_empty());
    }
}
