//! Local JSON file source.
//!
//! Accepts the same payload shapes as the portal: a saved `datastore_search`
//! response or a bare array of records.

use std::path::{Path, PathBuf};

use super::client::{DataSource, SourceError};

/// Reads the complex-declaration payload from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a source from `RENEWAL_DATA_FILE`, if that variable is set and non-empty.
    pub fn from_env() -> Option<Self> {
        std::env::var("RENEWAL_DATA_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(Self::new)
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    fn fetch(&self) -> Result<serde_json::Value, SourceError> {
        log::info!("Reading dataset from {}", self.path.display());

        let contents = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(SourceError::Serialization)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
