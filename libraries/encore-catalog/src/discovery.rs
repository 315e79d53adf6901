//! Catalog file discovery

use crate::source::FileSource;
use std::io;
use std::path::{Path, PathBuf};

/// Discovery configuration
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// File name suffixes recognized as catalog files
    pub suffixes: Vec<String>,

    /// Follow symlinks while walking (default: false)
    pub follow_links: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            suffixes: vec![".exolist.json".to_string()],
            follow_links: false,
        }
    }
}

/// Discover catalog files under `root`, sorted by path
///
/// The sorted path order fixes the order sources are loaded in, and with
/// it the presentation order of first-seen groups.
pub fn discover_sources(root: &Path, config: &DiscoveryConfig) -> io::Result<Vec<FileSource>> {
    if !root.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} not found", root.display()),
        ));
    }

    let mut paths: Vec<PathBuf> = Vec::new();

    if root.is_file() {
        if is_catalog_file(root, config) {
            paths.push(root.to_path_buf());
        }
    } else {
        for entry in walkdir::WalkDir::new(root)
            .follow_links(config.follow_links)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_catalog_file(path, config) {
                paths.push(path.to_path_buf());
            }
        }
    }

    paths.sort();
    Ok(paths.into_iter().map(FileSource::new).collect())
}

/// Check if a file name carries one of the configured catalog suffixes
fn is_catalog_file(path: &Path, config: &DiscoveryConfig) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| config.suffixes.iter().any(|suffix| name.ends_with(suffix)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_match_is_on_file_name() {
        let config = DiscoveryConfig::default();
        assert!(is_catalog_file(
            Path::new("/assets/main.exolist.json"),
            &config
        ));
        assert!(!is_catalog_file(Path::new("/assets/main.json"), &config));
        assert!(!is_catalog_file(
            Path::new("/some.exolist.json/readme.txt"),
            &config
        ));
    }

    #[test]
    fn missing_root_is_not_found() {
        let err = discover_sources(Path::new("/nonexistent"), &DiscoveryConfig::default())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
