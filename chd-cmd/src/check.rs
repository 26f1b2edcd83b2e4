//! `check` subcommand: join a CSV against a topology and report gaps.

use anyhow::Context;
use chd_core::county::parse_county_csv;
use chd_core::topology::parse_counties;
use chd_core::{Attribute, Dataset};
use serde::Serialize;

/// Coverage of a statistics CSV against county shapes.
#[derive(Debug, Serialize, PartialEq)]
pub struct CheckReport {
    pub counties: usize,
    pub shapes: usize,
    /// FIPS codes of counties with no shape (never drawn on the map).
    pub without_shape: Vec<String>,
    /// FIPS codes of shapes with no county row (drawn gray).
    pub without_data: Vec<String>,
    /// N/A count per attribute column.
    pub missing: Vec<(Attribute, usize)>,
}

impl CheckReport {
    pub fn build(csv: &str, topojson: &str) -> anyhow::Result<Self> {
        let counties = parse_county_csv(csv)?;
        let shapes = parse_counties(topojson)?;
        let dataset = Dataset::new(counties, shapes);

        let without_shape = dataset
            .counties_without_shape()
            .iter()
            .map(|c| c.fips.to_string())
            .collect();
        let without_data = dataset
            .shapes_without_data()
            .iter()
            .map(|s| s.fips.to_string())
            .collect();
        let missing = Attribute::ALL
            .iter()
            .map(|&a| (a, dataset.values(a).iter().filter(|v| v.is_nan()).count()))
            .collect();

        Ok(Self {
            counties: dataset.counties().len(),
            shapes: dataset.shapes().len(),
            without_shape,
            without_data,
            missing,
        })
    }

    pub fn is_clean(&self) -> bool {
        self.without_shape.is_empty() && self.without_data.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = format!("{} counties, {} shapes\n", self.counties, self.shapes);
        out.push_str(&format!(
            "counties without shape: {}{}\n",
            self.without_shape.len(),
            preview(&self.without_shape)
        ));
        out.push_str(&format!(
            "shapes without data: {}{}\n",
            self.without_data.len(),
            preview(&self.without_data)
        ));
        for (attribute, n) in &self.missing {
            out.push_str(&format!("{} N/A: {}\n", attribute.column(), n));
        }
        out
    }
}

/// ` (a, b, c, ...)` for the first few codes.
fn preview(codes: &[String]) -> String {
    const SHOWN: usize = 5;
    if codes.is_empty() {
        return String::new();
    }
    let mut list = codes.iter().take(SHOWN).cloned().collect::<Vec<_>>().join(", ");
    if codes.len() > SHOWN {
        list.push_str(", ...");
    }
    format!(" ({})", list)
}

pub fn run_check(csv_path: &str, topology_path: &str, json: bool) -> anyhow::Result<()> {
    let csv = std::fs::read_to_string(csv_path).with_context(|| format!("reading {}", csv_path))?;
    let topojson =
        std::fs::read_to_string(topology_path).with_context(|| format!("reading {}", topology_path))?;
    let report = CheckReport::build(&csv, &topojson)?;
    if !report.is_clean() {
        log::warn!(
            "{} counties lack a shape and {} shapes lack data",
            report.without_shape.len(),
            report.without_data.len()
        );
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = include_str!("../../fixtures/sample_health.csv");
    const TOPOLOGY: &str = include_str!("../../fixtures/sample_counties.topo.json");

    #[test]
    fn reports_join_gaps_and_missing_values() {
        let report = CheckReport::build(CSV, TOPOLOGY).unwrap();
        assert_eq!(report.counties, 4);
        assert_eq!(report.shapes, 3);
        assert_eq!(report.without_shape, vec!["01007"]);
        assert!(report.without_data.is_empty());
        assert_eq!(
            report.missing,
            vec![
                (Attribute::PovertyPerc, 1),
                (Attribute::PercentSmoking, 1),
                (Attribute::MedianHouseholdIncome, 1),
                (Attribute::PercentStroke, 0),
            ]
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn render_lists_codes() {
        let report = CheckReport::build(CSV, TOPOLOGY).unwrap();
        let text = report.render();
        assert!(text.starts_with("4 counties, 3 shapes\n"));
        assert!(text.contains("counties without shape: 1 (01007)\n"));
        assert!(text.contains("shapes without data: 0\n"));
        assert!(text.contains("percent_stroke N/A: 0\n"));
    }

    #[test]
    fn duplicate_rows_count_once() {
        let csv = format!("{}1001,\"Autauga County, AL\",20.0,1,1,1,Rural\n", CSV);
        let report = CheckReport::build(&csv, TOPOLOGY).unwrap();
        assert_eq!(report.counties, 4);
        assert_eq!(report.missing[0], (Attribute::PovertyPerc, 1));
    }

    #[test]
    fn preview_truncates() {
        let codes: Vec<String> = (1..=7).map(|i| format!("0100{}", i)).collect();
        assert_eq!(preview(&codes), " (01001, 01002, 01003, 01004, 01005, ...)");
    }
}
