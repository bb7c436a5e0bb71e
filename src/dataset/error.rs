use thiserror::Error;

use crate::datagov::SourceError;

/// Errors that can occur while loading the dataset.
///
/// Both variants are terminal for the load attempt; nothing is cached.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The source could not be reached, timed out, or reported failure
    #[error("Data source unavailable: {message}")]
    Unavailable {
        message: String,
        #[source]
        source: Option<SourceError>,
    },

    /// The payload does not have the expected record shape
    #[error("Unexpected payload format: {0}")]
    Format(String),
}

impl DatasetError {
    /// Creates an `Unavailable` error that has no underlying source error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true for the unavailable (transport or portal-side) category.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

impl From<SourceError> for DatasetError {
    fn from(error: SourceError) -> Self {
        match error {
            SourceError::Serialization(e) => Self::Format(format!("body is not valid JSON: {e}")),
            other => Self::Unavailable {
                message: other.to_string(),
                source: Some(other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn serialization_failures_are_format_errors() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = DatasetError::from(SourceError::Serialization(json_error));

        assert!(matches!(error, DatasetError::Format(_)));
        assert!(!error.is_unavailable());
    }

    #[test]
    fn http_failures_are_unavailable_with_source() {
        let error = DatasetError::from(SourceError::Http { status: 502 });

        assert!(error.is_unavailable());
        assert!(error.to_string().contains("502"));
        assert!(error.source().is_some());
    }

    #[test]
    fn unavailable_constructor_has_no_source() {
        let error = DatasetError::unavailable("success flag is false");
        assert_eq!(
            error.to_string(),
            "Data source unavailable: success flag is false"
        );
        assert!(error.source().is_none());
    }
}
