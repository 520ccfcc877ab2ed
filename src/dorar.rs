use std::time::Duration;

use anyhow::{ensure, Context, Result};
use tracing::{info, warn};

const API_URL: &str = "https://dorar.net/dorar_api.json";
const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_MS: u64 = 1500;

/// Search dorar.net and return the raw HTML fragment embedded in the JSON
/// envelope. An empty string means the upstream found nothing.
pub async fn search(skey: &str) -> Result<String> {
    ensure!(!skey.trim().is_empty(), "search keyword must not be empty");

    info!("Searching dorar.net for {:?}", skey);
    let client = reqwest::Client::new();
    let body = fetch_with_retry(&client, skey).await?;
    fragment_from_envelope(&body)
}

/// GET the search endpoint, backing off on transient upstream errors.
async fn fetch_with_retry(client: &reqwest::Client, skey: &str) -> Result<String> {
    let mut attempt = 0;
    loop {
        let response = client
            .get(API_URL)
            .query(&[("skey", skey)])
            .send()
            .await
            .context("Failed to reach dorar.net")?;

        let status = response.status();
        if status.is_success() {
            return response
                .text()
                .await
                .context("Failed to read dorar.net response body");
        }

        let transient = status.as_u16() == 429 || status.is_server_error();
        if !transient || attempt == MAX_RETRIES {
            anyhow::bail!("dorar.net responded with status {}", status);
        }

        let backoff = Duration::from_millis(BASE_BACKOFF_MS * 2u64.pow(attempt));
        warn!(
            "dorar.net returned {} (attempt {}/{}), backing off {:.1}s",
            status,
            attempt + 1,
            MAX_RETRIES,
            backoff.as_secs_f64()
        );
        tokio::time::sleep(backoff).await;
        attempt += 1;
    }
}

/// Pull `ahadith.result` out of the JSON envelope. A missing or null field is
/// the upstream's "no results" shape, not an error.
pub fn fragment_from_envelope(body: &str) -> Result<String> {
    let envelope: serde_json::Value =
        serde_json::from_str(body).context("dorar.net returned invalid JSON")?;

    let fragment = envelope
        .get("ahadith")
        .and_then(|a| a.get("result"))
        .and_then(|r| r.as_str())
        .unwrap_or_default();

    Ok(fragment.to_string())
}

// ── Tests ──
