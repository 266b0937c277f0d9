// src/net.rs
// Fetch layer. Both source hosts are HTTPS-only, so this rides reqwest's
// blocking client with rustls instead of a hand-rolled socket.

use std::sync::OnceLock;
use std::time::Duration;

use log::warn;
use reqwest::blocking::Client;

const USER_AGENT: &str = concat!("cbb_scrape/", env!("CARGO_PKG_VERSION"));

fn client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_default()
    })
}

/// GET `url` and return the body as owned lines. Every failure mode
/// (transport, non-2xx, body decode) degrades to an empty sequence; the
/// scanners treat an empty document like any other document.
pub fn fetch_lines(url: &str) -> Vec<String> {
    match fetch(url) {
        Ok(body) => body.lines().map(str::to_string).collect(),
        Err(e) => {
            warn!("fetch failed for {url}: {e}");
            Vec::new()
        }
    }
}

/// GET `url` and return the raw body. Used by the snapshot refresh, where
/// a failure must surface to the caller instead of degrading.
pub fn fetch(url: &str) -> Result<String, Box<dyn std::error::Error>> {
    let resp = client().get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} for {}", status, url).into());
    }
    Ok(resp.text()?)
}
