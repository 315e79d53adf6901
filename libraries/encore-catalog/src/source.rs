//! Byte-stream sources for catalog loading

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A single catalog source, independently readable
///
/// The loader reads each source to completion or first error and nothing
/// more; source lifetime stays with the implementation. Network-backed
/// sources live in collaborator crates behind this same trait.
pub trait CatalogSource: Send {
    /// Human-readable label used in logs
    fn label(&self) -> String;

    /// Open the source for reading
    fn open(&self) -> std::io::Result<Box<dyn Read + '_>>;
}

/// A catalog file on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The underlying path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> std::io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(&self.path)?))
    }
}

/// An in-memory catalog, used by tests and embedded default lists
#[derive(Debug, Clone)]
pub struct MemorySource {
    label: String,
    bytes: Vec<u8>,
}

impl MemorySource {
    /// Create a source over `bytes`, labelled `label` in logs
    pub fn new(label: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            label: label.into(),
            bytes: bytes.into(),
        }
    }
}

impl CatalogSource for MemorySource {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn open(&self) -> std::io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(self.bytes.as_slice()))
    }
}
