/// Raw payload sources for the complex-declaration table.
///
/// This module provides a blocking client for the data.gov.il CKAN datastore,
/// a local JSON file source for offline use, and the `DataSource` trait both
/// implement.
mod client;
mod file_source;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_LIMIT, DEFAULT_RESOURCE_ID, DEFAULT_TIMEOUT_SECS, DataGovClient,
    DataGovClientBuilder, DataSource, SourceError,
};
pub use file_source::FileSource;
