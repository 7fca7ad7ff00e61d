//! Reading record files and heatmap configs from disk.

use anyhow::Context;
use rain_grid::HeatmapConfig;
use rain_store::DataStore;

/// Read a record file and ingest it into a fresh store.
pub async fn load_store(path: &str) -> anyhow::Result<DataStore> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read record file {}", path))?;
    let mut store = DataStore::new();
    let count = store
        .load_bytes(&bytes)
        .with_context(|| format!("Failed to load records from {}", path))?;
    log::info!(
        "Loaded {} records for {} years from {}",
        count,
        store.available_years().len(),
        path
    );
    Ok(store)
}

/// Read a heatmap config, or use the defaults when no path is given.
pub async fn load_config(path: Option<&str>) -> anyhow::Result<HeatmapConfig> {
    let Some(path) = path else {
        return Ok(HeatmapConfig::default());
    };
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config {}", path))?;
    HeatmapConfig::from_json(&text).with_context(|| format!("Invalid config {}", path))
}
