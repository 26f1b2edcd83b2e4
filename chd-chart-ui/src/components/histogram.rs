//! Histogram of the selected attribute.
//!
//! Bars fade while a selection exists, with an overlay showing how many of
//! each bin's counties are highlighted. Clicking a bar toggles all its
//! counties; a fully-clicked bin gets an outline.

use super::{AxisBottom, AxisLeft};
use crate::config::{BAR_COLOR, CHART_HEIGHT, CHART_MARGIN, CHART_WIDTH, SELECTED_OUTLINE};
use crate::state::{AppState, Tooltip};
use chd_data::bins::{histogram, max_count, Bin, DEFAULT_THRESHOLDS};
use chd_data::scale::LinearScale;
use chd_data::selection::{Emphasis, Selection};
use dioxus::prelude::*;

/// Pixel geometry of one bar inside the plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    /// Height of the highlighted-members overlay; zero without a selection.
    pub overlay_height: f64,
    pub selected: bool,
}

/// Lay out bars for `bins`. Bars are 1px narrower than their bin. A bin with
/// no width (every value equal) spans the whole x range.
pub fn layout_bars(bins: &[Bin], x: &LinearScale, y: &LinearScale, selection: &Selection) -> Vec<Bar> {
    let baseline = y.range().0;
    let opacity = if selection.is_empty() {
        Emphasis::Normal.opacity()
    } else {
        Emphasis::Faded.opacity()
    };
    bins.iter()
        .map(|bin| {
            let top = y.scale(bin.count() as f64);
            let (left, right) = if bin.x1 > bin.x0 {
                (x.scale(bin.x0), x.scale(bin.x1))
            } else {
                x.range()
            };
            let overlay_height = if selection.is_empty() {
                0.0
            } else {
                baseline - y.scale(bin.highlighted_count(selection) as f64)
            };
            Bar {
                x: left,
                y: top,
                width: (right - left - 1.0).max(0.0),
                height: baseline - top,
                opacity,
                overlay_height,
                selected: bin.is_selected(selection),
            }
        })
        .collect()
}

#[component]
pub fn Histogram() -> Element {
    let mut state = use_context::<AppState>();
    let attribute = (state.attribute)();
    let dataset = state.dataset.read().clone();
    let display = attribute.display_name();

    let inner_width = CHART_MARGIN.inner_width(CHART_WIDTH);
    let inner_height = CHART_MARGIN.inner_height(CHART_HEIGHT);
    let title_x = CHART_WIDTH / 2.0;
    let title_y = CHART_MARGIN.top / 2.0;
    let label_y = CHART_HEIGHT - 10.0;
    let y_label_x = -inner_height / 2.0;
    let y_label_y = -CHART_MARGIN.left + 15.0;
    let plot_transform = format!("translate({},{})", CHART_MARGIN.left, CHART_MARGIN.top);

    let Some(extent) = dataset.extent(attribute) else {
        return rsx! {
            div {
                id: "histogram",
                p { style: "color: #666;", "No {display} values to plot." }
            }
        };
    };

    let bins = histogram(&dataset, attribute, DEFAULT_THRESHOLDS);
    let x = LinearScale::new(extent, (0.0, inner_width));
    let y = LinearScale::new((0.0, max_count(&bins) as f64), (inner_height, 0.0));
    let bars = layout_bars(&bins, &x, &y, &state.selection.read());

    rsx! {
        div {
            id: "histogram",
            svg {
                width: "{CHART_WIDTH}",
                height: "{CHART_HEIGHT}",
                text {
                    class: "chart-title",
                    x: "{title_x}",
                    y: "{title_y}",
                    text_anchor: "middle",
                    font_size: "14px",
                    "Histogram of {display}"
                }
                g {
                    transform: "{plot_transform}",
                    {bins.into_iter().zip(bars).map(|(bin, bar)| {
                        let tooltip = Tooltip::bin(&bin);
                        let tooltip_move = tooltip.clone();
                        let members = bin.members;
                        let overlay_y = bar.y + bar.height - bar.overlay_height;
                        let stroke = if bar.selected { SELECTED_OUTLINE } else { "none" };
                        rsx! {
                            g {
                                cursor: "pointer",
                                onmouseenter: move |evt: MouseEvent| {
                                    let page = evt.page_coordinates();
                                    state.tooltip.set(Some(tooltip.clone().at((page.x, page.y))));
                                },
                                onmousemove: move |evt: MouseEvent| {
                                    let page = evt.page_coordinates();
                                    state.tooltip.set(Some(tooltip_move.clone().at((page.x, page.y))));
                                },
                                onmouseleave: move |_| state.tooltip.set(None),
                                onclick: move |_| {
                                    let added = state.selection.write().toggle_bin(&members);
                                    log::info!(
                                        "[CHD] histogram: bin of {} counties {}",
                                        members.len(),
                                        if added { "selected" } else { "deselected" }
                                    );
                                },
                                rect {
                                    x: "{bar.x}",
                                    y: "{bar.y}",
                                    width: "{bar.width}",
                                    height: "{bar.height}",
                                    fill: BAR_COLOR,
                                    fill_opacity: "{bar.opacity}",
                                    stroke: stroke,
                                    stroke_width: "1.5",
                                }
                                if bar.overlay_height > 0.0 {
                                    rect {
                                        x: "{bar.x}",
                                        y: "{overlay_y}",
                                        width: "{bar.width}",
                                        height: "{bar.overlay_height}",
                                        fill: BAR_COLOR,
                                        pointer_events: "none",
                                    }
                                }
                            }
                        }
                    })}
                    AxisBottom { scale: x, offset: inner_height }
                    AxisLeft { scale: y }
                    text {
                        class: "axis-label",
                        transform: "rotate(-90)",
                        x: "{y_label_x}",
                        y: "{y_label_y}",
                        text_anchor: "middle",
                        font_size: "12px",
                        "Frequency"
                    }
                }
                text {
                    class: "axis-label",
                    x: "{title_x}",
                    y: "{label_y}",
                    text_anchor: "middle",
                    font_size: "12px",
                    "{display}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chd_core::county::parse_county_csv;
    use chd_core::{Attribute, Dataset, Fips};

    fn fips(code: &str) -> Fips {
        Fips::parse(code).unwrap()
    }

    fn bins() -> Vec<Bin> {
        vec![
            Bin {
                x0: 0.0,
                x1: 5.0,
                members: vec![fips("1001"), fips("1003")],
            },
            Bin {
                x0: 5.0,
                x1: 10.0,
                members: vec![fips("1005")],
            },
        ]
    }

    fn scales() -> (LinearScale, LinearScale) {
        (
            LinearScale::new((0.0, 10.0), (0.0, 100.0)),
            LinearScale::new((0.0, 2.0), (200.0, 0.0)),
        )
    }

    #[test]
    fn bars_fill_bins_with_a_gap() {
        let (x, y) = scales();
        let bars = layout_bars(&bins(), &x, &y, &Selection::new());
        assert_eq!(bars[0].x, 0.0);
        assert_eq!(bars[0].width, 49.0);
        assert_eq!(bars[0].height, 200.0);
        assert_eq!(bars[1].y, 100.0);
        assert_eq!(bars[1].height, 100.0);
        assert!(bars.iter().all(|b| b.opacity == 1.0 && b.overlay_height == 0.0 && !b.selected));
    }

    #[test]
    fn selection_fades_bars_and_shows_overlay() {
        let (x, y) = scales();
        let mut sel = Selection::new();
        sel.toggle_clicked(&fips("1001"));
        let bars = layout_bars(&bins(), &x, &y, &sel);
        assert_eq!(bars[0].opacity, 0.25);
        assert_eq!(bars[0].overlay_height, 100.0);
        assert!(!bars[0].selected);
        assert_eq!(bars[1].overlay_height, 0.0);

        sel.toggle_bin(&bins()[0].members);
        let bars = layout_bars(&bins(), &x, &y, &sel);
        assert!(bars[0].selected);
        assert_eq!(bars[0].overlay_height, 200.0);
    }

    #[test]
    fn constant_values_fill_the_plot() {
        let counties = "cnty_fips,display_name,percent_stroke\n1001,A,4.0\n1003,B,4.0\n";
        let ds = Dataset::new(parse_county_csv(counties).unwrap(), Vec::new());
        let extent = ds.extent(Attribute::PercentStroke).unwrap();
        let bins = histogram(&ds, Attribute::PercentStroke, DEFAULT_THRESHOLDS);
        assert_eq!(bins.iter().map(Bin::count).sum::<usize>(), 2);

        let x = LinearScale::new(extent, (0.0, 100.0));
        let y = LinearScale::new((0.0, max_count(&bins) as f64), (200.0, 0.0));
        let bars = layout_bars(&bins, &x, &y, &Selection::new());
        let full = bars.iter().find(|b| b.height > 0.0).unwrap();
        assert_eq!(full.x, 0.0);
        assert_eq!(full.width, 99.0);
    }
}
