//! `fetch` subcommand: download a record file and save it unchanged.

use anyhow::Context;
use rain_records::source::decode_bytes;
use rain_records::fetch::{client, fetch_bytes};

pub async fn run_fetch(url: &str, output: &str) -> anyhow::Result<()> {
    let client = client()?;
    let bytes = fetch_bytes(&client, url)
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    // Refuse to save anything the loaders could not read back.
    let records = decode_bytes(&bytes).with_context(|| format!("{} is not a record file", url))?;

    tokio::fs::write(output, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", output))?;
    log::info!("Saved {} records from {} to {}", records.len(), url, output);
    Ok(())
}
