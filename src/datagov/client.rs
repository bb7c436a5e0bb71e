/// data.gov.il CKAN client implementation.
///
/// This module provides `DataGovClient` for fetching the complex-declaration table
/// from the CKAN `datastore_search` action, along with the error type shared by
/// every `DataSource`.
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default portal host.
pub const DEFAULT_BASE_URL: &str = "https://data.gov.il";

/// CKAN resource holding the urban-renewal complex declarations.
pub const DEFAULT_RESOURCE_ID: &str = "f65a0daf-f737-49c5-9424-d378d52104f5";

/// Maximum number of rows requested from the datastore.
pub const DEFAULT_LIMIT: u32 = 32_000;

/// Request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DATASTORE_SEARCH_PATH: &str = "/api/3/action/datastore_search";

/// Errors that can occur while reading a raw payload from a data source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network-related errors (connection failures, DNS resolution, etc.)
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Request or response timeout errors
    #[error("Request timed out")]
    Timeout(#[source] reqwest::Error),

    /// HTTP errors with status code
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    /// The body is not valid JSON
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Invalid URL configuration error
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Reading a local payload file failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A place the raw complex-declaration payload can be read from.
///
/// Implementations return the payload as JSON without interpreting its shape;
/// shape detection and record decoding happen in the dataset layer. This trait
/// also enables mocking the remote portal in tests.
pub trait DataSource: Send + Sync {
    /// Fetches the raw JSON payload.
    fn fetch(&self) -> Result<serde_json::Value, SourceError>;

    /// Short human-readable description used in logs and error messages.
    fn describe(&self) -> String;
}

/// Builder for constructing `DataGovClient` instances.
///
/// # Examples
///
/// ```
/// use renewal::datagov::DataGovClientBuilder;
///
/// let client = DataGovClientBuilder::new()
///     .base_url("https://data.gov.il")
///     .limit(500)
///     .build()
///     .expect("Failed to create client");
/// assert_eq!(client.limit(), 500);
/// ```
#[derive(Debug, Default)]
pub struct DataGovClientBuilder {
    base_url: Option<String>,
    resource_id: Option<String>,
    limit: Option<u32>,
    timeout: Option<Duration>,
}

impl DataGovClientBuilder {
    /// Creates a new `DataGovClientBuilder` with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the portal base URL (e.g., "https://data.gov.il").
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the CKAN resource identifier.
    pub fn resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Sets the maximum number of rows to request.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the `DataGovClient` with the configured settings.
    ///
    /// # Environment Variables
    ///
    /// Values not set on the builder are read from the environment, then
    /// defaulted:
    ///
    /// - `RENEWAL_API_URL` (default `https://data.gov.il`)
    /// - `RENEWAL_RESOURCE_ID` (default: the urban-renewal complexes resource)
    /// - `RENEWAL_LIMIT` (default 32000)
    /// - `RENEWAL_TIMEOUT_SECS` (default 30)
    ///
    /// Unparseable numeric variables are ignored with a warning.
    pub fn build(self) -> Result<DataGovClient, SourceError> {
        let base_url = self.base_url.unwrap_or_else(|| {
            std::env::var("RENEWAL_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
        });
        let base_url = base_url.trim_end_matches('/').to_string();

        let resource_id = self.resource_id.unwrap_or_else(|| {
            std::env::var("RENEWAL_RESOURCE_ID")
                .unwrap_or_else(|_| DEFAULT_RESOURCE_ID.to_string())
        });

        let limit = self
            .limit
            .unwrap_or_else(|| env_number("RENEWAL_LIMIT").unwrap_or(DEFAULT_LIMIT));

        let timeout = self.timeout.unwrap_or_else(|| {
            Duration::from_secs(
                env_number("RENEWAL_TIMEOUT_SECS").unwrap_or(DEFAULT_TIMEOUT_SECS),
            )
        });

        let endpoint = format!("{base_url}{DATASTORE_SEARCH_PATH}");
        reqwest::Url::parse(&endpoint)
            .map_err(|e| SourceError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5).min(timeout))
            .build()
            .map_err(SourceError::Network)?;

        Ok(DataGovClient {
            client,
            base_url,
            resource_id,
            limit,
            timeout,
        })
    }
}

fn env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {name}={raw:?}: not a valid number");
            None
        }
    }
}

/// Synchronous client for the data.gov.il datastore.
///
/// Issues a single GET per `fetch()`. There is no retry; the caller decides
/// what a failure means.
pub struct DataGovClient {
    client: reqwest::blocking::Client,
    base_url: String,
    resource_id: String,
    limit: u32,
    timeout: Duration,
}

impl DataGovClient {
    /// Returns the base URL configured for this client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the resource identifier configured for this client.
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// Returns the row limit configured for this client.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the request timeout configured for this client.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the full `datastore_search` endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, DATASTORE_SEARCH_PATH)
    }
}

impl DataSource for DataGovClient {
    fn fetch(&self) -> Result<serde_json::Value, SourceError> {
        let limit = self.limit.to_string();
        log::info!(
            "Fetching resource {} from {} (limit {})",
            self.resource_id,
            self.base_url,
            limit
        );

        let response = self
            .client
            .get(self.endpoint())
            .query(&[("resource_id", self.resource_id.as_str()), ("limit", limit.as_str())])
            .send()
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(classify_transport_error)?;
        serde_json::from_str(&body).map_err(SourceError::Serialization)
    }

    fn describe(&self) -> String {
        format!("{} (resource {})", self.base_url, self.resource_id)
    }
}

fn classify_transport_error(error: reqwest::Error) -> SourceError {
    if error.is_timeout() {
        SourceError::Timeout(error)
    } else {
        SourceError::Network(error)
    }
}
