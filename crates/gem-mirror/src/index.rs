use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Version component of the index filename convention.
pub const INDEX_VERSION: &str = "4.8";

/// Filename of the plain (decompressed) index: `Marshal.4.8`.
pub fn index_file_name() -> String {
    format!("Marshal.{INDEX_VERSION}")
}

/// Filename of the compressed index as served by sources: `Marshal.4.8.Z`.
pub fn compressed_index_file_name() -> String {
    format!("{}.Z", index_file_name())
}

/// Errors that can occur while reading or decoding the package index.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decode error: {0}")]
    Decode(String),
}

/// Metadata for one package in the index. Only `file_name` is consumed by
/// the mirror driver; the remaining fields ride along for other consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
    pub file_name: String,
}

/// The catalog of packages available at a source, keyed by package full
/// name. Decoded from the plain index file; iteration follows the map's
/// sorted order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageIndex {
    entries: BTreeMap<String, PackageInfo>,
}

impl PackageIndex {
    pub fn new(entries: BTreeMap<String, PackageInfo>) -> Self {
        Self { entries }
    }

    /// Read and decode the plain index file at `path`.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let bytes = std::fs::read(path)?;
        Self::decode(&bytes)
    }

    /// Decode an index from its binary serialized form.
    pub fn decode(bytes: &[u8]) -> Result<Self, IndexError> {
        let entries = bincode::deserialize(bytes).map_err(|e| IndexError::Decode(e.to_string()))?;
        Ok(Self { entries })
    }

    /// Serialize to the binary on-disk form.
    pub fn encode(&self) -> Result<Vec<u8>, IndexError> {
        bincode::serialize(&self.entries).map_err(|e| IndexError::Decode(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries as (full name, metadata), in sorted order.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &PackageInfo)> {
        self.entries.iter()
    }
}

/// Decompress the fetched `.Z` index blob at `src` into the plain index
/// file at `dst`. Runs as the conditional fetcher's completion hook.
pub fn inflate_file(src: &Path, dst: &Path) -> std::io::Result<()> {
    let compressed = std::fs::read(src)?;
    let mut decoder = flate2::read::ZlibDecoder::new(compressed.as_slice());
    let mut plain = Vec::new();
    decoder.read_to_end(&mut plain)?;
    std::fs::write(dst, plain)
}
