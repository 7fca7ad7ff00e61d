//! HTTP retrieval of daily record payloads (native builds only).

use crate::error::{RecordError, Result};
use crate::record::DailyRecord;
use crate::source::decode_bytes;
use std::time::Duration;

/// Build the HTTP client used for record downloads.
pub fn client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?)
}

/// Download the raw payload at `url`.
///
/// The body is returned untouched (it may be gzip-compressed) so callers
/// can store it as-is.
pub async fn fetch_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(RecordError::HttpStatus(status.as_u16()));
    }
    let body = response.bytes().await?;
    log::info!("fetch: downloaded {} bytes from {}", body.len(), url);
    Ok(body.to_vec())
}

/// Download and decode the records at `url`.
pub async fn fetch_records(client: &reqwest::Client, url: &str) -> Result<Vec<DailyRecord>> {
    let bytes = fetch_bytes(client, url).await?;
    decode_bytes(&bytes)
}
