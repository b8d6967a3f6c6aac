use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::warn;
use url::Url;

/// Tenable plugin search page.
pub const SEARCH_ENDPOINT: &str = "https://www.tenable.com/plugins/search";

/// Accept header the search page is served for.
const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";

/// Network calls must not block indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("failed to build HTTP client")
}

/// Build the search URL with the keyword form-encoded into the `q` parameter
/// (spaces become `+`, `&` and `=` are percent-encoded).
pub fn search_url(endpoint: &str, query: &str) -> Result<Url> {
    let mut url =
        Url::parse(endpoint).with_context(|| format!("invalid endpoint: {endpoint}"))?;
    url.query_pairs_mut().append_pair("q", query);
    Ok(url)
}

/// Fetch the search results page for `query`.
///
/// Returns `Ok(Some(body))` on HTTP 200 and `Ok(None)` on any other status
/// (the status code is logged). Transport failures (DNS, timeout, connection
/// reset) surface as `Err`.
pub fn fetch(client: &Client, endpoint: &str, query: &str) -> Result<Option<String>> {
    let url = search_url(endpoint, query)?;
    let resp = client
        .get(url.clone())
        .header(reqwest::header::ACCEPT, ACCEPT_HTML)
        .send()
        .with_context(|| format!("request to {url} failed"))?;

    let status = resp.status();
    if status != StatusCode::OK {
        warn!(%url, status = status.as_u16(), "request failed with non-200 status");
        return Ok(None);
    }

    let body = resp.text().context("failed to read response body")?;
    Ok(Some(body))
}
