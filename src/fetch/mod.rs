mod basic;
mod client;
pub mod auth;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Result, anyhow};

/// Issues one GET for `url` and returns the response body.
///
/// Exactly one outbound call; no retries. A non-2xx status is a failure,
/// same as a transport error.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?;
    if !resp.status().is_success() {
        return Err(anyhow!("server answered with status {}", resp.status()));
    }
    Ok(resp.bytes().await?.to_vec())
}
