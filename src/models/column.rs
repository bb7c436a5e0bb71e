use std::fmt;

/// A column of the complex-declaration table that the engine reads.
///
/// The wire names are the ones published on the government data portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Complex identifier.
    ComplexId,
    /// Municipality name.
    Municipality,
    /// Complex name.
    ComplexName,
    /// Declaration date (free text).
    DeclarationDate,
}

impl Column {
    /// All columns the engine knows about.
    pub const ALL: [Column; 4] = [
        Column::ComplexId,
        Column::Municipality,
        Column::ComplexName,
        Column::DeclarationDate,
    ];

    /// Returns the field name used in the JSON records.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::ComplexId => "MisparMitham",
            Self::Municipality => "Yeshuv",
            Self::ComplexName => "ShemMitcham",
            Self::DeclarationDate => "TaarichHachraza",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}
