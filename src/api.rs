use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::Config;
use crate::results::ResultRecord;

static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .build()
        .expect("failed to build blocking reqwest client")
});

/// POSTs the aggregate payload to the team's solutions resource.
///
/// The service authenticates with HTTP basic auth, blank username and the
/// API token as password. The response status is returned for display but
/// not judged here; submission is fire-and-forget by contract, so a non-2xx
/// answer is the caller's to notice.
pub fn submit_solutions(config: &Config, payload: &[Value]) -> Result<StatusCode> {
    let url = config.solutions_url();
    let res = CLIENT
        .post(&url)
        .basic_auth("", Some(&config.api_token))
        .json(&payload)
        .send()
        .with_context(|| format!("failed to POST {url}"))?;
    Ok(res.status())
}

/// GETs the team's submitted-solutions listing, the same records the
/// `metadata.json` log holds.
pub fn fetch_results(config: &Config) -> Result<Vec<ResultRecord>> {
    let url = config.solutions_url();
    let res = CLIENT
        .get(&url)
        .basic_auth("", Some(&config.api_token))
        .send()
        .with_context(|| format!("failed to GET {url}"))?;
    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().unwrap_or_default();
        anyhow::bail!("{url} returned {status}: {body}");
    }
    res.json()
        .with_context(|| format!("failed to parse solutions listing from {url}"))
}
