//! Dioxus RSX components for the county health dashboard.

mod attribute_selector;
mod axis;
mod chart_header;
mod choropleth_map;
mod clear_selection_button;
mod error_display;
mod histogram;
mod loading_spinner;
mod map_legend;
mod scatterplot;
mod summary_bar;
mod tooltip;
mod y_axis_selector;

pub use attribute_selector::AttributeSelector;
pub use axis::{AxisBottom, AxisLeft};
pub use chart_header::ChartHeader;
pub use choropleth_map::ChoroplethMap;
pub use clear_selection_button::ClearSelectionButton;
pub use error_display::ErrorDisplay;
pub use histogram::Histogram;
pub use loading_spinner::LoadingSpinner;
pub use map_legend::MapLegend;
pub use scatterplot::Scatterplot;
pub use summary_bar::SummaryBar;
pub use tooltip::TooltipBox;
pub use y_axis_selector::YAxisSelector;
