use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

use bytes::Bytes;

use crate::fetcher::{FetchError, Fetcher};
use crate::update::is_stale;

/// In-memory fetcher for testing. Maps locators to bodies with a fixed
/// last-modified time and counts every request it serves.
pub struct InMemoryFetcher {
    entries: HashMap<String, Entry>,
    requests: AtomicU64,
}

struct Entry {
    modified: SystemTime,
    body: Bytes,
}

impl InMemoryFetcher {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            requests: AtomicU64::new(0),
        }
    }

    /// Add a resource with an explicit last-modified time.
    pub fn insert(
        &mut self,
        locator: impl Into<String>,
        body: impl Into<Bytes>,
        modified: SystemTime,
    ) {
        self.entries.insert(
            locator.into(),
            Entry {
                modified,
                body: body.into(),
            },
        );
    }

    /// Add a resource last modified at the epoch, so any on-disk copy
    /// written afterwards counts as fresh.
    pub fn insert_old(&mut self, locator: impl Into<String>, body: impl Into<Bytes>) {
        self.insert(locator, body, SystemTime::UNIX_EPOCH);
    }

    /// Number of fetch requests served so far.
    pub fn request_count(&self) -> u64 {
        self.requests.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Fetcher for InMemoryFetcher {
    async fn fetch_if_newer(
        &self,
        locator: &str,
        newer_than: Option<SystemTime>,
    ) -> Result<Option<Bytes>, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);

        let entry = self
            .entries
            .get(locator)
            .ok_or_else(|| FetchError::NotFound(locator.to_owned()))?;

        if is_stale(entry.modified, newer_than) {
            Ok(Some(entry.body.clone()))
        } else {
            Ok(None)
        }
    }
}
