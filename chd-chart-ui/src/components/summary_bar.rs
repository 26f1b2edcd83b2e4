//! One-line statistics for the current attribute, read from the store.

use crate::state::AppState;
use chd_data::format::{format_grouped_fixed, MISSING_LABEL};
use chd_db::models::AttributeSummary;
use dioxus::prelude::*;

fn stat(value: Option<f64>) -> String {
    value
        .map(|v| format_grouped_fixed(v, 2))
        .unwrap_or_else(|| MISSING_LABEL.to_string())
}

/// `Poverty Percent: 3 counties (1 N/A), min 10.40, max 30.70, mean 18.77`
pub fn summary_text(summary: &AttributeSummary) -> String {
    format!(
        "{}: {} counties ({} {}), min {}, max {}, mean {}",
        summary.attribute.display_name(),
        summary.count,
        summary.missing,
        MISSING_LABEL,
        stat(summary.min),
        stat(summary.max),
        stat(summary.mean),
    )
}

#[component]
pub fn SummaryBar() -> Element {
    let state = use_context::<AppState>();
    let attribute = (state.attribute)();
    let selected = state.selection.read().len();

    let text = match &*state.db.read() {
        Some(db) => match db.query_attribute_summary(attribute) {
            Ok(summary) => summary_text(&summary),
            Err(e) => {
                log::warn!("[CHD] summary for {} failed: {}", attribute.column(), e);
                return rsx! {};
            }
        },
        None => return rsx! {},
    };

    rsx! {
        div {
            style: "margin: 4px 0 12px 0; font-size: 13px; color: #444;",
            "{text}"
            if selected > 0 {
                span {
                    style: "margin-left: 12px; font-weight: bold;",
                    "{selected} selected"
                }
            }
        }
    }
}
