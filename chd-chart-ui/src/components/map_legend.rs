//! Color legend for the choropleth.
//!
//! Nine swatches, each labelled with the SI-formatted lower bound of its
//! class; the last class's upper bound closes the scale at the right edge.

use crate::config::{LEGEND_BOTTOM, LEGEND_HEIGHT, LEGEND_RIGHT, LEGEND_WIDTH, MAP_HEIGHT, MAP_WIDTH};
use chd_data::format::format_si;
use chd_data::scale::QuantizeScale;
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendSwatch {
    pub x: f64,
    pub width: f64,
    pub color: &'static str,
    pub label: String,
}

/// Swatches laid out across `width`, plus the closing upper-bound label.
pub fn legend_swatches(scale: &QuantizeScale, width: f64) -> (Vec<LegendSwatch>, String) {
    let colors = scale.colors();
    let item_width = width / colors.len().max(1) as f64;
    let swatches = colors
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            let lower = scale.invert_extent(i).map_or(f64::NAN, |(lo, _)| lo);
            LegendSwatch {
                x: i as f64 * item_width,
                width: item_width,
                color,
                label: format_si(lower, 2),
            }
        })
        .collect();
    let upper = scale.domain().1;
    (swatches, format_si(upper, 2))
}

#[derive(Props, Clone, PartialEq)]
pub struct MapLegendProps {
    pub scale: QuantizeScale,
}

#[component]
pub fn MapLegend(props: MapLegendProps) -> Element {
    let (swatches, end_label) = legend_swatches(&props.scale, LEGEND_WIDTH);
    let left = MAP_WIDTH - LEGEND_WIDTH - LEGEND_RIGHT;
    let top = MAP_HEIGHT - LEGEND_BOTTOM;
    let label_y = LEGEND_HEIGHT + 12.0;

    rsx! {
        g {
            class: "legend",
            transform: "translate({left},{top})",
            for swatch in swatches {
                rect {
                    x: "{swatch.x}",
                    y: "0",
                    width: "{swatch.width}",
                    height: "{LEGEND_HEIGHT}",
                    fill: swatch.color,
                }
                text {
                    x: "{swatch.x}",
                    y: "{label_y}",
                    text_anchor: "middle",
                    font_size: "10px",
                    "{swatch.label}"
                }
            }
            text {
                x: "{LEGEND_WIDTH}",
                y: "{label_y}",
                text_anchor: "middle",
                font_size: "10px",
                "{end_label}"
            }
        }
    }
}
