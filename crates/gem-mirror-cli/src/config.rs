use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gem_mirror::MirrorPair;

/// Default config file path: `~/.gemmirrorrc`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|d| d.join(".gemmirrorrc"))
}

/// Load mirror pairs from a YAML config file.
///
/// The document is a sequence of mappings, each with required `from` and
/// `to` keys:
///
/// ```yaml
/// - from: http://gems.example.com   # source repository
///   to: /path/to/mirror            # destination directory
/// ```
///
/// A missing file, a non-sequence document, or an entry missing a key is a
/// fatal configuration error, reported before any fetch begins.
pub fn load_config(path: &Path) -> Result<Vec<MirrorPair>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("config file not found: {}", path.display()))?;

    let pairs: Vec<MirrorPair> = serde_yaml_ng::from_str(&contents)
        .with_context(|| format!("invalid config file: {}", path.display()))?;

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".gemmirrorrc");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn parses_a_sequence_of_mirror_pairs() {
        let (_dir, path) = write_config(
            "- from: http://gems.example.com\n  to: /path/to/mirror\n\
             - from: file:///var/repo\n  to: /other/mirror\n",
        );

        let pairs = load_config(&path).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].from, "http://gems.example.com");
        assert_eq!(pairs[0].to, PathBuf::from("/path/to/mirror"));
        assert_eq!(pairs[1].from, "file:///var/repo");
    }

    #[test]
    fn missing_from_key_is_fatal() {
        let (_dir, path) = write_config("- to: /path/to/mirror\n");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn missing_to_key_is_fatal() {
        let (_dir, path) = write_config("- from: http://gems.example.com\n");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn non_sequence_document_is_fatal() {
        let (_dir, path) = write_config("from: http://gems.example.com\nto: /mirror\n");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join(".gemmirrorrc")).is_err());
    }
}
