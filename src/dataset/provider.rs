//! Lazily loaded, cached dataset in front of a `DataSource`.

use std::sync::{Arc, Mutex, MutexGuard};

use super::{DatasetError, decode_payload};
use crate::datagov::DataSource;
use crate::models::Dataset;

/// Serves one immutable `Dataset` per provider instance.
///
/// The first `load()` fetches and decodes the payload; later calls return the
/// same `Arc` without touching the source. The cache lock is held across the
/// first fetch, so concurrent first callers trigger a single fetch.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use renewal::dataset::DatasetProvider;
/// use renewal::datagov::{DataSource, SourceError};
///
/// struct Fixed;
///
/// impl DataSource for Fixed {
///     fn fetch(&self) -> Result<serde_json::Value, SourceError> {
///         Ok(serde_json::json!([{"MisparMitham": 1, "Yeshuv": "חיפה"}]))
///     }
///     fn describe(&self) -> String {
///         "fixed".to_string()
///     }
/// }
///
/// let provider = DatasetProvider::new(Arc::new(Fixed));
/// let first = provider.load().unwrap();
/// let second = provider.load().unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
pub struct DatasetProvider {
    source: Arc<dyn DataSource>,
    cache: Mutex<Option<Arc<Dataset>>>,
}

impl DatasetProvider {
    /// Creates a provider with an empty cache slot.
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            cache: Mutex::new(None),
        }
    }

    /// Returns the cached dataset, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Unavailable` if the source cannot be reached or
    /// reports failure, and `DatasetError::Format` if the payload does not
    /// decode into records. Failures are not cached; the next call fetches again.
    pub fn load(&self) -> Result<Arc<Dataset>, DatasetError> {
        let mut slot = self.slot();
        if let Some(dataset) = slot.as_ref() {
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(self.fetch_and_decode()?);
        *slot = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Drops the cached dataset so the next `load()` fetches again.
    ///
    /// Datasets already handed out stay valid.
    pub fn invalidate(&self) {
        if self.slot().take().is_some() {
            log::info!("Dropped cached dataset from {}", self.source.describe());
        }
    }

    /// Invalidates the cache and loads a fresh dataset.
    pub fn refresh(&self) -> Result<Arc<Dataset>, DatasetError> {
        self.invalidate();
        self.load()
    }

    /// Returns true if a dataset is currently cached.
    pub fn is_loaded(&self) -> bool {
        self.slot().is_some()
    }

    /// Returns the description of the underlying source.
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    fn fetch_and_decode(&self) -> Result<Dataset, DatasetError> {
        let description = self.source.describe();

        let payload = self.source.fetch().map_err(|e| {
            log::error!("Failed to fetch dataset from {description}: {e}");
            DatasetError::from(e)
        })?;

        let dataset = decode_payload(payload).map_err(|e| {
            log::error!("Failed to decode dataset from {description}: {e}");
            e
        })?;

        log::info!("Loaded {} records from {description}", dataset.len());
        Ok(dataset)
    }

    fn slot(&self) -> MutexGuard<'_, Option<Arc<Dataset>>> {
        // The slot only ever holds a fully built dataset, so a poisoned lock is still consistent.
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
