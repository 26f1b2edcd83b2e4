//! US County Health Dashboard
//!
//! Three linked views of county health statistics: a choropleth map, a
//! histogram and a scatterplot. Clicking a county or point, toggling a
//! histogram bin, or brushing the scatterplot highlights the same counties
//! in every view.
//!
//! Data flow:
//! 1. On mount, `data/counties-10m.json` and
//!    `data/national_health_data_2024.csv` are fetched.
//! 2. The CSV is loaded into an in-memory SQLite database and the county
//!    shapes are decoded and projected once.
//! 3. The views re-render from `AppState` whenever the attribute dropdowns
//!    or the selection change.

use chd_chart_ui::components::{
    AttributeSelector, ChartHeader, ChoroplethMap, ClearSelectionButton, ErrorDisplay, Histogram,
    LoadingSpinner, Scatterplot, SummaryBar, TooltipBox, YAxisSelector,
};
use chd_chart_ui::config::{HEALTH_CSV_URL, ROOT_NAME, TOPOLOGY_URL};
use chd_chart_ui::loader::load_dashboard;
use chd_chart_ui::state::AppState;
use dioxus::prelude::*;
use std::rc::Rc;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_NAME))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load data once on mount
    use_future(move || async move {
        match load_dashboard(TOPOLOGY_URL, HEALTH_CSV_URL).await {
            Ok(data) => {
                state.dataset.set(Rc::new(data.dataset));
                state.map_features.set(Rc::new(data.features));
                state.db.set(Some(data.db));
            }
            Err(e) => {
                log::error!("Error loading data: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
        state.loading.set(false);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "US County Health Dashboard".to_string(),
                subtitle: "Click counties, points or histogram bars to select; drag on the scatterplot to brush.".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; align-items: center;",
                    AttributeSelector {}
                    YAxisSelector {}
                    ClearSelectionButton {}
                }
                SummaryBar {}
                ChoroplethMap {}
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px;",
                    Histogram {}
                    Scatterplot {}
                }
            }
            TooltipBox {}
        }
    }
}
