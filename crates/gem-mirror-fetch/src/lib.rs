pub mod file;
pub mod http;

use std::time::SystemTime;

use bytes::Bytes;
use gem_mirror::{FetchError, Fetcher};

pub use file::FileFetcher;
pub use http::HttpFetcher;

/// Fetcher that resolves both HTTP(S) URLs and local filesystem paths,
/// dispatching on the locator's scheme.
pub struct RemoteFetcher {
    http: HttpFetcher,
    file: FileFetcher,
}

impl RemoteFetcher {
    pub fn new() -> Self {
        Self {
            http: HttpFetcher::new(),
            file: FileFetcher,
        }
    }
}

impl Default for RemoteFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Fetcher for RemoteFetcher {
    async fn fetch_if_newer(
        &self,
        locator: &str,
        newer_than: Option<SystemTime>,
    ) -> Result<Option<Bytes>, FetchError> {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            self.http.fetch_if_newer(locator, newer_than).await
        } else {
            self.file.fetch_if_newer(locator, newer_than).await
        }
    }
}
