use std::time::SystemTime;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use gem_mirror::{FetchError, Fetcher};

/// Conditional HTTP(S) fetcher.
///
/// The freshness hint is sent as an `If-Modified-Since` header; a `304 Not
/// Modified` response maps to "unchanged" (no body).
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a timestamp as an HTTP-date (RFC 7231), e.g.
/// `Sat, 01 Jan 2022 00:00:00 GMT`.
fn http_date(t: SystemTime) -> String {
    let dt: DateTime<Utc> = t.into();
    dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_if_newer(
        &self,
        locator: &str,
        newer_than: Option<SystemTime>,
    ) -> Result<Option<Bytes>, FetchError> {
        let mut req = self
            .client
            .get(locator)
            .header("User-Agent", "gem-mirror");

        if let Some(t) = newer_than {
            req = req.header("If-Modified-Since", http_date(t));
        }

        let response = req
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();

        if status.as_u16() == 304 {
            return Ok(None);
        }

        if status.as_u16() == 404 {
            return Err(FetchError::NotFound(locator.to_owned()));
        }

        if !status.is_success() {
            return Err(FetchError::Network(format!("HTTP {status}: {locator}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Some(body))
    }
}
