//! SVG axes with d3-style tick placement and labels.

use crate::config::AXIS_TICKS;
use chd_data::scale::LinearScale;
use dioxus::prelude::*;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

#[derive(Props, Clone, PartialEq)]
pub struct AxisProps {
    pub scale: LinearScale,
    /// Translation of the axis inside its parent group (pixels).
    #[props(default = 0.0)]
    pub offset: f64,
    #[props(default = AXIS_TICKS)]
    pub ticks: usize,
}

/// Horizontal axis with ticks below the line.
#[component]
pub fn AxisBottom(props: AxisProps) -> Element {
    let (r0, r1) = props.scale.range();
    let domain_path = format!("M{},{}V0H{}V{}", r0, TICK_SIZE, r1, TICK_SIZE);
    let ticks = props.scale.axis_ticks(props.ticks);
    let label_y = TICK_SIZE + TICK_PADDING;

    rsx! {
        g {
            transform: "translate(0,{props.offset})",
            font_size: "10",
            font_family: "sans-serif",
            text_anchor: "middle",
            path { d: "{domain_path}", stroke: "currentColor", fill: "none" }
            for (x, label) in ticks {
                g {
                    transform: "translate({x},0)",
                    line { y2: "{TICK_SIZE}", stroke: "currentColor" }
                    text {
                        y: "{label_y}",
                        dy: "0.71em",
                        fill: "currentColor",
                        "{label}"
                    }
                }
            }
        }
    }
}

/// Vertical axis with ticks left of the line.
#[component]
pub fn AxisLeft(props: AxisProps) -> Element {
    let (r0, r1) = props.scale.range();
    let domain_path = format!("M{},{}H0V{}H{}", -TICK_SIZE, r0, r1, -TICK_SIZE);
    let ticks = props.scale.axis_ticks(props.ticks);
    let tick_x = -TICK_SIZE;
    let label_x = -(TICK_SIZE + TICK_PADDING);

    rsx! {
        g {
            transform: "translate({props.offset},0)",
            font_size: "10",
            font_family: "sans-serif",
            text_anchor: "end",
            path { d: "{domain_path}", stroke: "currentColor", fill: "none" }
            for (y, label) in ticks {
                g {
                    transform: "translate(0,{y})",
                    line { x2: "{tick_x}", stroke: "currentColor" }
                    text {
                        x: "{label_x}",
                        dy: "0.32em",
                        fill: "currentColor",
                        "{label}"
                    }
                }
            }
        }
    }
}
