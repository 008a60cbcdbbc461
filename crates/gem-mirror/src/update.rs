use std::path::Path;
use std::time::SystemTime;

use crate::fetcher::{FetchError, Fetcher};

/// Last-modified time of `path`, or `None` if the file does not exist.
/// Absence is not an error: a missing destination is infinitely stale.
pub fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).ok()?.modified().ok()
}

/// Whether a destination with modified time `dest` is stale relative to a
/// source last modified at `source`.
pub fn is_stale(source: SystemTime, dest: Option<SystemTime>) -> bool {
    match dest {
        None => true,
        Some(dest) => source > dest,
    }
}

/// Conditionally sync `source` to `dest`.
///
/// Reads the destination's modified time (if any) and passes it to the
/// fetcher as a freshness hint. When the fetcher reports the content
/// unchanged, nothing is written and `false` is returned. Otherwise the
/// body overwrites `dest` in full and `true` is returned.
///
/// The overwrite is not atomic; an interruption mid-write can leave `dest`
/// truncated.
pub async fn update_file<F>(fetcher: &F, source: &str, dest: &Path) -> Result<bool, FetchError>
where
    F: Fetcher + ?Sized,
{
    update_file_with(fetcher, source, dest, || Ok(())).await
}

/// Like [`update_file`], but runs `on_update` exactly once after the write,
/// only on the update-taken path. Used to decompress the index after it has
/// been fetched.
pub async fn update_file_with<F, H>(
    fetcher: &F,
    source: &str,
    dest: &Path,
    on_update: H,
) -> Result<bool, FetchError>
where
    F: Fetcher + ?Sized,
    H: FnOnce() -> std::io::Result<()>,
{
    let last_modified = modified_time(dest);

    match fetcher.fetch_if_newer(source, last_modified).await? {
        None => Ok(false),
        Some(body) => {
            std::fs::write(dest, &body)?;
            on_update()?;
            Ok(true)
        }
    }
}
