use std::fmt;

/// Identifier of a declared urban-renewal complex (`MisparMitham`).
///
/// Not unique across rows: a complex declared under several tracks shows up
/// once per track, which is why counts are taken over distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComplexId(String);

impl ComplexId {
    /// Creates a new complex ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying ID value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComplexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
