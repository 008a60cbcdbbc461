use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::fetcher::FetchError;

/// A configured (source repository, destination directory) association.
///
/// `from` is an HTTP(S) URL or a filesystem path (optionally with a `file:`
/// scheme); `to` must exist as a directory before syncing begins.
#[derive(Debug, Clone, Deserialize)]
pub struct MirrorPair {
    pub from: String,
    pub to: PathBuf,
}

/// Fatal errors: configuration and validation problems, and index failures
/// that leave a mirror pair with nothing to enumerate.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    #[error("directory not found: {0}")]
    MissingDirectory(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to fetch index {source}: {cause}")]
    IndexFetch {
        source: String,
        #[source]
        cause: FetchError,
    },

    #[error("failed to decode index {path}: {cause}")]
    IndexDecode { path: PathBuf, cause: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MirrorPair {
    /// Validate the destination and ensure the `gems` subdirectory exists,
    /// creating it when absent. Runs before any fetch is issued.
    pub fn ensure_layout(&self) -> Result<PathBuf, MirrorError> {
        if !self.to.exists() {
            return Err(MirrorError::MissingDirectory(self.to.clone()));
        }
        if !self.to.is_dir() {
            return Err(MirrorError::NotADirectory(self.to.clone()));
        }

        let gems_dir = self.to.join("gems");
        ensure_dir(&gems_dir)?;
        Ok(gems_dir)
    }
}

fn ensure_dir(path: &Path) -> Result<(), MirrorError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(MirrorError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }
    std::fs::create_dir(path)?;
    Ok(())
}
