//! Scatterplot of the selected attribute against the Y-axis attribute, with
//! click-to-toggle points and a rectangular brush.
//!
//! Dragging on the plot background draws the brush and replaces the brushed
//! set on every move. Releasing without dragging clears it.

use super::{AxisBottom, AxisLeft};
use crate::config::{CHART_HEIGHT, CHART_MARGIN, CHART_WIDTH, POINT_COLOR, POINT_RADIUS};
use crate::state::{AppState, Tooltip};
use chd_data::brush::{BrushDrag, BrushExtent};
use chd_data::scatter::{ScatterLayout, ScatterPoint};
use chd_data::selection::{raise_selected, Selection};
use dioxus::prelude::*;
use std::rc::Rc;

/// Points in paint order (selected last) with their opacity.
pub fn ordered_points(layout: &ScatterLayout, selection: &Selection) -> Vec<(ScatterPoint, f64)> {
    let mut points = layout.points.clone();
    raise_selected(&mut points, selection, |p| &p.fips);
    points
        .into_iter()
        .map(|p| {
            let opacity = selection.emphasis(&p.fips).opacity();
            (p, opacity)
        })
        .collect()
}

/// Replace the brushed set from the live drag extent. A brush with no area
/// brushes nothing.
pub fn apply_live_brush(selection: &mut Selection, layout: &ScatterLayout, extent: Option<BrushExtent>) {
    match extent.filter(|e| !e.is_empty()) {
        Some(extent) => selection.set_brushed(layout.brushed(&extent)),
        None => selection.clear_brushed(),
    }
}

#[component]
pub fn Scatterplot() -> Element {
    let mut state = use_context::<AppState>();
    let x_attr = (state.attribute)();
    let y_attr = (state.y_attribute)();
    let dataset = state.dataset.read().clone();
    let mut drag = use_signal(BrushDrag::default);

    let inner_width = CHART_MARGIN.inner_width(CHART_WIDTH);
    let inner_height = CHART_MARGIN.inner_height(CHART_HEIGHT);
    let title_x = CHART_WIDTH / 2.0;
    let title_y = CHART_MARGIN.top / 2.0;
    let label_y = CHART_HEIGHT - 10.0;
    let y_label_x = -inner_height / 2.0;
    let y_label_y = -CHART_MARGIN.left + 15.0;
    let plot_transform = format!("translate({},{})", CHART_MARGIN.left, CHART_MARGIN.top);
    let x_display = x_attr.display_name();
    let y_display = y_attr.display_name();

    let Some(layout) = ScatterLayout::new(&dataset, x_attr, y_attr, inner_width, inner_height) else {
        return rsx! {
            div {
                id: "scatterplot",
                p { style: "color: #666;", "No values to plot for {x_display} vs. {y_display}." }
            }
        };
    };
    let layout = Rc::new(layout);
    let points = ordered_points(&layout, &state.selection.read());

    // Live extent while dragging, else the last committed brush.
    let brush_rect: Option<BrushExtent> = if drag.read().is_active() {
        drag.read().current()
    } else {
        (state.brush)()
    };
    let brush_rect = brush_rect.map(|b| (b.x0, b.y0, b.width(), b.height()));

    let on_move = {
        let layout = layout.clone();
        move |evt: MouseEvent| {
            if !drag.peek().is_active() {
                return;
            }
            let page = evt.page_coordinates();
            let extent = drag.write().update((page.x, page.y), inner_width, inner_height);
            apply_live_brush(&mut state.selection.write(), &layout, extent);
        }
    };

    let finish = {
        let layout = layout.clone();
        move || {
            if !drag.peek().is_active() {
                return;
            }
            let result = drag.write().finish();
            match result {
                Some(extent) => {
                    let ids = layout.brushed(&extent);
                    log::info!("[CHD] scatterplot: brushed {} counties", ids.len());
                    state.brush.set(Some(extent));
                    state.selection.write().set_brushed(ids);
                }
                None => state.reset_brush(),
            }
        }
    };
    let mut finish_up = finish.clone();
    let mut finish_leave = finish;

    rsx! {
        div {
            id: "scatterplot",
            svg {
                width: "{CHART_WIDTH}",
                height: "{CHART_HEIGHT}",
                onmousemove: on_move,
                onmouseup: move |_| finish_up(),
                onmouseleave: move |_| finish_leave(),
                text {
                    class: "chart-title",
                    x: "{title_x}",
                    y: "{title_y}",
                    text_anchor: "middle",
                    font_size: "14px",
                    "{x_display} vs. {y_display}"
                }
                g {
                    transform: "{plot_transform}",
                    rect {
                        class: "brush-overlay",
                        width: "{inner_width}",
                        height: "{inner_height}",
                        fill: "transparent",
                        cursor: "crosshair",
                        onmousedown: move |evt: MouseEvent| {
                            let local = evt.element_coordinates();
                            let page = evt.page_coordinates();
                            drag.set(BrushDrag::start((local.x, local.y), (page.x, page.y)));
                        },
                    }
                    if let Some((bx, by, bw, bh)) = brush_rect {
                        rect {
                            class: "selection",
                            x: "{bx}",
                            y: "{by}",
                            width: "{bw}",
                            height: "{bh}",
                            fill: "#777",
                            fill_opacity: "0.3",
                            stroke: "#fff",
                            pointer_events: "none",
                        }
                    }
                    {points.into_iter().map(|(point, opacity)| {
                        let key = point.fips.to_string();
                        let (cx, cy) = (point.x, point.y);
                        let fips = point.fips.clone();
                        let tooltip = Tooltip::point(&dataset, &point, x_attr, y_attr);
                        let tooltip_move = tooltip.clone();
                        rsx! {
                            circle {
                                key: "{key}",
                                cx: "{cx}",
                                cy: "{cy}",
                                r: "{POINT_RADIUS}",
                                fill: POINT_COLOR,
                                opacity: "{opacity}",
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
                                    state.selection.write().toggle_clicked(&fips);
                                },
                            }
                        }
                    })}
                    AxisBottom { scale: layout.x_scale, offset: inner_height }
                    AxisLeft { scale: layout.y_scale }
                    text {
                        class: "axis-label",
                        transform: "rotate(-90)",
                        x: "{y_label_x}",
                        y: "{y_label_y}",
                        text_anchor: "middle",
                        font_size: "12px",
                        "{y_display}"
                    }
                }
                text {
                    class: "axis-label",
                    x: "{title_x}",
                    y: "{label_y}",
                    text_anchor: "middle",
                    font_size: "12px",
                    "{x_display}"
                }
            }
        }
    }
}
