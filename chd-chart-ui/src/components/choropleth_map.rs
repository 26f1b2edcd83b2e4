//! Choropleth map of the selected attribute.

use super::MapLegend;
use crate::config::{MAP_HEIGHT, MAP_WIDTH};
use crate::state::{AppState, Tooltip};
use chd_core::{Attribute, Dataset, Fips};
use chd_data::path::MapFeature;
use chd_data::scale::{QuantizeScale, NO_DATA_COLOR};
use chd_data::selection::{raise_selected, Selection};
use dioxus::prelude::*;

/// A county path with its resolved style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledPath {
    pub fips: Fips,
    pub d: String,
    pub fill: &'static str,
    pub opacity: f64,
}

/// Fill every feature from the quantize scale, fade unselected counties and
/// order selected ones last so they paint on top.
pub fn style_features(
    features: &[MapFeature],
    dataset: &Dataset,
    attribute: Attribute,
    scale: Option<&QuantizeScale>,
    selection: &Selection,
) -> Vec<StyledPath> {
    let mut paths: Vec<StyledPath> = features
        .iter()
        .map(|f| StyledPath {
            fips: f.fips.clone(),
            d: f.d.clone(),
            fill: scale.map_or(NO_DATA_COLOR, |s| s.fill(dataset.value(&f.fips, attribute))),
            opacity: selection.emphasis(&f.fips).opacity(),
        })
        .collect();
    raise_selected(&mut paths, selection, |p| &p.fips);
    paths
}

/// County paths filled by a Blues-9 quantize scale over the attribute
/// extent. Hover shows name and value; click toggles the county.
#[component]
pub fn ChoroplethMap() -> Element {
    let mut state = use_context::<AppState>();
    let attribute = (state.attribute)();
    let dataset = state.dataset.read().clone();
    let features = state.map_features.read().clone();
    let scale = QuantizeScale::blues(dataset.extent(attribute));
    let paths = style_features(
        &features,
        &dataset,
        attribute,
        scale.as_ref(),
        &state.selection.read(),
    );
    let title = format!("Choropleth Map of {}", attribute.display_name());
    let title_x = MAP_WIDTH / 2.0;

    rsx! {
        div {
            id: "map",
            svg {
                width: "{MAP_WIDTH}",
                height: "{MAP_HEIGHT}",
                text {
                    class: "map-title",
                    x: "{title_x}",
                    y: "20",
                    text_anchor: "middle",
                    font_size: "16px",
                    "{title}"
                }
                g {
                    {paths.into_iter().map(|path| {
                        let StyledPath { fips, d, fill, opacity } = path;
                        let key = fips.to_string();
                        let hover = {
                            let dataset = dataset.clone();
                            let fips = fips.clone();
                            move |evt: MouseEvent| {
                                let page = evt.page_coordinates();
                                state.tooltip.set(Some(
                                    Tooltip::county(&dataset, &fips, attribute).at((page.x, page.y)),
                                ));
                            }
                        };
                        rsx! {
                            path {
                                key: "{key}",
                                d: "{d}",
                                fill: fill,
                                stroke: "#fff",
                                stroke_width: "0.5",
                                opacity: "{opacity}",
                                cursor: "pointer",
                                onmouseenter: hover.clone(),
                                onmousemove: hover,
                                onmouseleave: move |_| state.tooltip.set(None),
                                onclick: move |_| {
                                    let added = state.selection.write().toggle_clicked(&fips);
                                    log::info!("[CHD] map: {} {}", fips, if added { "selected" } else { "deselected" });
                                },
                            }
                        }
                    })}
                }
                if let Some(scale) = scale {
                    MapLegend { scale }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chd_core::county::parse_county_csv;
    use chd_data::scale::SCHEME_BLUES_9;

    fn fixture() -> (Dataset, Vec<MapFeature>) {
        let counties = parse_county_csv(include_str!("../../../fixtures/sample_health.csv")).unwrap();
        let features = ["1001", "1003", "1005", "56045"]
            .iter()
            .map(|code| MapFeature {
                fips: Fips::parse(code).unwrap(),
                d: "M0,0Z".to_string(),
            })
            .collect();
        (Dataset::new(counties, Vec::new()), features)
    }

    #[test]
    fn missing_data_is_gray() {
        let (ds, features) = fixture();
        let scale = QuantizeScale::blues(ds.extent(Attribute::PercentSmoking));
        let paths = style_features(&features, &ds, Attribute::PercentSmoking, scale.as_ref(), &Selection::new());
        // Barbour's smoking rate is negative in the CSV; 56045 has no row.
        assert_eq!(paths[2].fill, NO_DATA_COLOR);
        assert_eq!(paths[3].fill, NO_DATA_COLOR);
        assert_eq!(paths[0].fill, SCHEME_BLUES_9[4]);
        assert_eq!(paths[1].fill, SCHEME_BLUES_9[0]);
    }

    #[test]
    fn selected_counties_are_raised_and_others_faded() {
        let (ds, features) = fixture();
        let mut sel = Selection::new();
        sel.toggle_clicked(&Fips::parse("1001").unwrap());
        let paths = style_features(&features, &ds, Attribute::PovertyPerc, None, &sel);
        let last = paths.last().unwrap();
        assert_eq!(last.fips.as_str(), "01001");
        assert_eq!(last.opacity, 1.0);
        assert_eq!(paths[0].opacity, 0.25);
        assert!(paths.iter().all(|p| p.fill == NO_DATA_COLOR));
    }
}
