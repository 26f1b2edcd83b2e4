//! Browser data loading.
//!
//! Fetches the topology and statistics CSV with `window.fetch`, loads the CSV
//! into the in-memory store and projects the county shapes once.

use crate::config::{MAP_HEIGHT, MAP_SCALE, MAP_WIDTH};
use anyhow::{anyhow, bail, Context};
use chd_core::topology::parse_counties;
use chd_core::Dataset;
use chd_data::path::{project_shapes, MapFeature};
use chd_data::projection::AlbersUsa;
use chd_db::Database;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Everything the dashboard needs after startup.
pub struct LoadedData {
    pub db: Database,
    pub dataset: Dataset,
    pub features: Vec<MapFeature>,
}

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

/// GET `url` and return the body as text.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window available"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if !response.ok() {
        bail!("GET {} failed with HTTP {}", url, response.status());
    }
    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| anyhow!("response body of {} is not text", url))
}

/// Fetch both data files and build the dashboard data.
pub async fn load_dashboard(topology_url: &str, csv_url: &str) -> anyhow::Result<LoadedData> {
    let started = js_sys::Date::now();
    let topojson = fetch_text(topology_url)
        .await
        .with_context(|| format!("loading {}", topology_url))?;
    let csv = fetch_text(csv_url)
        .await
        .with_context(|| format!("loading {}", csv_url))?;
    let data = build_dashboard(&topojson, &csv)?;
    log::info!(
        "[CHD] loader: data ready in {:.0} ms",
        js_sys::Date::now() - started
    );
    Ok(data)
}

/// Parse, store and project already-fetched data files.
pub fn build_dashboard(topojson: &str, csv: &str) -> anyhow::Result<LoadedData> {
    let db = Database::new()?;
    let loaded = db.load_counties(csv)?;
    let counties = db.query_counties()?;
    let shapes = parse_counties(topojson)?;
    log::info!(
        "[CHD] loader: {} CSV rows, {} counties, {} shapes",
        loaded,
        counties.len(),
        shapes.len()
    );

    let dataset = Dataset::new(counties, shapes);
    let unmatched = dataset.counties_without_shape().len();
    if unmatched > 0 {
        log::warn!("[CHD] loader: {} counties have no shape", unmatched);
    }

    let projection = AlbersUsa::new(MAP_SCALE, (MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0));
    let features = project_shapes(&projection, dataset.shapes());
    Ok(LoadedData {
        db,
        dataset,
        features,
    })
}
