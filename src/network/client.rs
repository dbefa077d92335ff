//! HTTP clients for the Serper API
//!
//! [`HttpClient`] suspends the calling task while the request is in flight,
//! [`BlockingHttpClient`] blocks the calling thread. Both are configured from
//! the same [`OutgoingSettings`], send the same [`PostRequest`] and decode
//! through [`decode_response`].

use super::request::{decode_response, PostRequest};
use crate::config::OutgoingSettings;
use crate::error::Result;
use reqwest::Proxy;
use serde_json::Value;
use tracing::debug;

/// Proxies to install, `all` taking precedence over per-scheme entries
fn proxies(settings: &OutgoingSettings) -> Result<Vec<Proxy>> {
    let proxies = &settings.proxies;
    if let Some(ref proxy_url) = proxies.all {
        return Ok(vec![Proxy::all(proxy_url)?]);
    }

    let mut list = Vec::new();
    if let Some(ref http) = proxies.http {
        list.push(Proxy::http(http)?);
    }
    if let Some(ref https) = proxies.https {
        list.push(Proxy::https(https)?);
    }
    Ok(list)
}

/// Applies the shared settings to either reqwest builder; the two builder
/// types expose the same methods but share no trait.
macro_rules! configure_builder {
    ($builder:expr, $settings:expr) => {{
        let settings: &OutgoingSettings = $settings;
        let mut builder = $builder
            .timeout(settings.timeout()?)
            .user_agent(&settings.user_agent)
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        for proxy in proxies(settings)? {
            builder = builder.proxy(proxy);
        }

        builder.build()?
    }};
}

/// Async HTTP client
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        Ok(Self {
            client: configure_builder!(reqwest::Client::builder(), settings),
        })
    }

    /// Send the request and decode the JSON body
    pub async fn post_json(&self, request: &PostRequest) -> Result<Value> {
        let response = self
            .client
            .post(&request.url)
            .headers(request.header_map()?)
            .body(request.body.to_string())
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!("POST {} -> {} ({} bytes)", request.url, status, text.len());

        decode_response(status, &text)
    }
}

/// Blocking HTTP client
///
/// Must not be called from inside an async runtime; use
/// `tokio::task::spawn_blocking` there.
#[derive(Clone)]
pub struct BlockingHttpClient {
    client: reqwest::blocking::Client,
}

impl BlockingHttpClient {
    /// Create a new blocking client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        Ok(Self {
            client: configure_builder!(reqwest::blocking::Client::builder(), settings),
        })
    }

    /// Send the request and decode the JSON body
    pub fn post_json(&self, request: &PostRequest) -> Result<Value> {
        let response = self
            .client
            .post(&request.url)
            .headers(request.header_map()?)
            .body(request.body.to_string())
            .send()?;

        let status = response.status();
        let text = response.text()?;
        debug!("POST {} -> {} ({} bytes)", request.url, status, text.len());

        decode_response(status, &text)
    }
}
