//! Download the dashboard's data files.

use anyhow::Context;
use log::info;
use std::path::Path;
use std::time::Duration;

/// us-atlas county boundaries at 1:10m, as loaded by the dashboard.
pub const DEFAULT_TOPOLOGY_URL: &str = "https://cdn.jsdelivr.net/npm/us-atlas@3/counties-10m.json";

/// File names the dashboard requests under `data/`.
pub const TOPOLOGY_FILE: &str = "counties-10m.json";
pub const CSV_FILE: &str = "national_health_data_2024.csv";

/// Fetch the topology and, when given, the CSV into `out_dir`.
pub async fn run_fetch(out_dir: &str, topology_url: &str, csv_url: Option<&str>) -> anyhow::Result<()> {
    let out = Path::new(out_dir);
    tokio::fs::create_dir_all(out)
        .await
        .with_context(|| format!("creating {}", out.display()))?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?;

    let mut downloads = vec![(topology_url, out.join(TOPOLOGY_FILE))];
    match csv_url {
        Some(url) => downloads.push((url, out.join(CSV_FILE))),
        None => info!("No --csv-url given; expecting {} to be provided separately", CSV_FILE),
    }

    for (url, dest) in downloads {
        let bytes = download(&client, url).await?;
        tokio::fs::write(&dest, &bytes)
            .await
            .with_context(|| format!("writing {}", dest.display()))?;
        info!("Wrote {} bytes to {}", bytes.len(), dest.display());
    }
    Ok(())
}

async fn download(client: &reqwest::Client, url: &str) -> anyhow::Result<Vec<u8>> {
    info!("Fetching {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("requesting {}", url))?;
    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("GET {} returned {}", url, status);
    }
    Ok(response.bytes().await?.to_vec())
}
