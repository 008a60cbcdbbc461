use std::path::Path;
use std::time::SystemTime;

use bytes::Bytes;
use gem_mirror::{FetchError, Fetcher, is_stale};

/// Conditional fetcher for local filesystem sources.
///
/// The freshness hint is compared against the source file's modified time;
/// a source not newer than the hint is "unchanged".
pub struct FileFetcher;

#[async_trait::async_trait]
impl Fetcher for FileFetcher {
    async fn fetch_if_newer(
        &self,
        locator: &str,
        newer_than: Option<SystemTime>,
    ) -> Result<Option<Bytes>, FetchError> {
        let path = Path::new(locator);

        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FetchError::NotFound(locator.to_owned()));
            }
            Err(e) => return Err(e.into()),
        };

        if let Ok(source_modified) = metadata.modified()
            && !is_stale(source_modified, newer_than)
        {
            return Ok(None);
        }

        let body = std::fs::read(path)?;
        Ok(Some(Bytes::from(body)))
    }
}
