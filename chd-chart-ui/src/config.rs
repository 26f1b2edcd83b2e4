//! Compile-time dashboard configuration.

/// DOM element the app mounts into.
pub const ROOT_NAME: &str = "county-health-root";

/// County boundaries, us-atlas TopoJSON.
pub const TOPOLOGY_URL: &str = "data/counties-10m.json";
/// Per-county health statistics.
pub const HEALTH_CSV_URL: &str = "data/national_health_data_2024.csv";

pub const MAP_WIDTH: f64 = 800.0;
pub const MAP_HEIGHT: f64 = 500.0;
/// Albers USA scale for the map.
pub const MAP_SCALE: f64 = 900.0;

pub const LEGEND_WIDTH: f64 = 200.0;
pub const LEGEND_HEIGHT: f64 = 10.0;
/// Legend position, measured from the map's bottom-right corner.
pub const LEGEND_RIGHT: f64 = 20.0;
pub const LEGEND_BOTTOM: f64 = 40.0;

pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Margins shared by the histogram and scatterplot.
pub const CHART_MARGIN: Margin = Margin {
    top: 30.0,
    right: 20.0,
    bottom: 50.0,
    left: 70.0,
};

impl Margin {
    pub fn inner_width(&self, width: f64) -> f64 {
        width - self.left - self.right
    }

    pub fn inner_height(&self, height: f64) -> f64 {
        height - self.top - self.bottom
    }
}

pub const BAR_COLOR: &str = "steelblue";
pub const POINT_COLOR: &str = "orange";
pub const POINT_RADIUS: f64 = 3.0;
/// Outline drawn around toggled histogram bins.
pub const SELECTED_OUTLINE: &str = "#333";

/// Tooltip offset from the pointer, in pixels.
pub const TOOLTIP_OFFSET: f64 = 10.0;

/// Requested tick count for chart axes.
pub const AXIS_TICKS: usize = 10;
