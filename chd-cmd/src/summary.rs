//! `summary` subcommand: per-attribute statistics and a text histogram.

use anyhow::Context;
use chd_core::{Attribute, Dataset};
use chd_data::bins::{histogram, max_count, Bin, DEFAULT_THRESHOLDS};
use chd_data::format::{format_grouped_fixed, format_range, MISSING_LABEL};
use chd_db::models::AttributeSummary;
use chd_db::Database;
use serde::Serialize;

/// Widest histogram bar, in characters.
const BAR_WIDTH: usize = 40;

#[derive(Serialize)]
struct SummaryReport<'a> {
    summaries: &'a [AttributeSummary],
    attribute: Attribute,
    bins: &'a [Bin],
}

pub fn run_summary(csv_path: &str, attribute: Attribute, json: bool) -> anyhow::Result<()> {
    let csv = std::fs::read_to_string(csv_path).with_context(|| format!("reading {}", csv_path))?;
    let db = Database::new()?;
    let loaded = db.load_counties(&csv)?;
    log::info!("Loaded {} counties from {}", loaded, csv_path);

    let summaries = db.query_all_summaries()?;
    let dataset = Dataset::new(db.query_counties()?, Vec::new());
    let bins = histogram(&dataset, attribute, DEFAULT_THRESHOLDS);

    if json {
        let report = SummaryReport {
            summaries: &summaries,
            attribute,
            bins: &bins,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_summaries(&summaries));
        println!();
        println!("Histogram of {}", attribute.display_name());
        print!("{}", render_histogram(&bins));
    }
    Ok(())
}

fn stat(value: Option<f64>) -> String {
    value
        .map(|v| format_grouped_fixed(v, 2))
        .unwrap_or_else(|| MISSING_LABEL.to_string())
}

/// One row per attribute: count, N/A count, min, max, mean.
pub fn render_summaries(summaries: &[AttributeSummary]) -> String {
    let mut out = format!(
        "{:<24} {:>6} {:>6} {:>12} {:>12} {:>12}\n",
        "attribute", "count", "n/a", "min", "max", "mean"
    );
    for s in summaries {
        out.push_str(&format!(
            "{:<24} {:>6} {:>6} {:>12} {:>12} {:>12}\n",
            s.attribute.display_name(),
            s.count,
            s.missing,
            stat(s.min),
            stat(s.max),
            stat(s.mean)
        ));
    }
    out
}

/// Horizontal bars scaled so the fullest bin spans `BAR_WIDTH` characters.
pub fn render_histogram(bins: &[Bin]) -> String {
    let max = max_count(bins).max(1);
    bins.iter()
        .map(|bin| {
            let len = (bin.count() * BAR_WIDTH + max / 2) / max;
            format!(
                "{:>15} | {} {}\n",
                format_range(bin.x0, bin.x1),
                "#".repeat(len),
                bin.count()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chd_core::Fips;

    #[test]
    fn histogram_bars_scale_to_fullest_bin() {
        let f = |c: &str| Fips::parse(c).unwrap();
        let bins = vec![
            Bin {
                x0: 10.0,
                x1: 20.0,
                members: vec![f("1001"), f("1003")],
            },
            Bin {
                x0: 20.0,
                x1: 30.0,
                members: vec![f("1005")],
            },
            Bin {
                x0: 30.0,
                x1: 40.0,
                members: vec![],
            },
        ];
        let text = render_histogram(&bins);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!("{:>15} | {} 2", "10 - 20", "#".repeat(40)));
        assert_eq!(lines[1], format!("{:>15} | {} 1", "20 - 30", "#".repeat(20)));
        assert_eq!(lines[2], format!("{:>15} |  0", "30 - 40"));
    }

    #[test]
    fn summary_table_from_fixture() {
        let db = Database::new().unwrap();
        db.load_counties(include_str!("../../fixtures/sample_health.csv")).unwrap();
        let text = render_summaries(&db.query_all_summaries().unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("attribute"));
        assert!(lines[1].starts_with("Poverty Percent"));
        assert!(lines[1].contains("10.40"));
        assert!(lines[1].contains("30.70"));
        assert!(lines[3].contains("58,731.00"));
    }
}
