use std::time::SystemTime;

use bytes::Bytes;

/// Errors that can occur when fetching from a source locator.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A capability for conditionally fetching remote or local resources.
///
/// Implementations resolve a locator (an HTTP(S) URL or a filesystem path)
/// and honor the `newer_than` freshness hint: when the resource has not
/// changed since that instant, they return `None` without a body.
///
/// The driver takes a `Fetcher` at construction time, so tests can
/// substitute an in-memory double.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the full body at `locator`, unless it is not newer than the
    /// `newer_than` hint. `None` means unchanged.
    async fn fetch_if_newer(
        &self,
        locator: &str,
        newer_than: Option<SystemTime>,
    ) -> Result<Option<Bytes>, FetchError>;
}

#[async_trait::async_trait]
impl<T: Fetcher + ?Sized> Fetcher for &T {
    async fn fetch_if_newer(
        &self,
        locator: &str,
        newer_than: Option<SystemTime>,
    ) -> Result<Option<Bytes>, FetchError> {
        (**self).fetch_if_newer(locator, newer_than).await
    }
}
