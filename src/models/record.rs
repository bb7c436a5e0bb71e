use serde_json::{Map, Value};

use super::ComplexId;

/// One declared urban-renewal complex entry.
///
/// The three text fields are always trimmed and never null; fields the engine
/// does not read are kept in `extra` untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    complex_id: Option<ComplexId>,
    municipality: String,
    complex_name: String,
    declaration_date: String,
    extra: Map<String, Value>,
}

impl Record {
    /// Returns the complex identifier, if the row carried one.
    pub fn complex_id(&self) -> Option<&ComplexId> {
        self.complex_id.as_ref()
    }

    /// Returns the municipality name.
    pub fn municipality(&self) -> &str {
        &self.municipality
    }

    /// Returns the complex name.
    pub fn complex_name(&self) -> &str {
        &self.complex_name
    }

    /// Returns the declaration date text.
    pub fn declaration_date(&self) -> &str {
        &self.declaration_date
    }

    /// Returns the attributes the engine ignores.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

/// Builder for constructing `Record` instances.
///
/// Text fields are trimmed on `build()`, so the builder is also the
/// normalization point for decoded rows.
///
/// # Examples
///
/// ```
/// use renewal::RecordBuilder;
///
/// let record = RecordBuilder::new()
///     .complex_id("A")
///     .municipality("  חיפה ")
///     .declaration_date("2025-03-01")
///     .build();
///
/// assert_eq!(record.municipality(), "חיפה");
/// assert_eq!(record.complex_name(), "");
/// ```
#[derive(Debug, Default)]
pub struct RecordBuilder {
    complex_id: Option<String>,
    municipality: Option<String>,
    complex_name: Option<String>,
    declaration_date: Option<String>,
    extra: Map<String, Value>,
}

impl RecordBuilder {
    /// Creates a new `RecordBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the complex ID.
    pub fn complex_id(mut self, id: impl Into<String>) -> Self {
        self.complex_id = Some(id.into());
        self
    }

    /// Sets the municipality.
    pub fn municipality(mut self, municipality: impl Into<String>) -> Self {
        self.municipality = Some(municipality.into());
        self
    }

    /// Sets the complex name.
    pub fn complex_name(mut self, name: impl Into<String>) -> Self {
        self.complex_name = Some(name.into());
        self
    }

    /// Sets the declaration date text.
    pub fn declaration_date(mut self, date: impl Into<String>) -> Self {
        self.declaration_date = Some(date.into());
        self
    }

    /// Adds an attribute the engine does not interpret.
    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Builds the `Record`, trimming text fields and defaulting missing ones to "".
    ///
    /// A complex ID that is empty after trimming is treated as absent.
    pub fn build(self) -> Record {
        let complex_id = self
            .complex_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .map(ComplexId::new);

        Record {
            complex_id,
            municipality: trimmed(self.municipality),
            complex_name: trimmed(self.complex_name),
            declaration_date: trimmed(self.declaration_date),
            extra: self.extra,
        }
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}
