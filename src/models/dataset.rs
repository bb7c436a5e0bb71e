use std::collections::HashSet;

use super::{Column, Record};

/// An immutable snapshot of the complex-declaration table.
///
/// Records keep the order they had in the payload. `columns` holds every
/// known column that at least one record carried; a column absent from the
/// whole payload is treated as missing from the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    columns: HashSet<Column>,
}

impl Dataset {
    /// Creates a dataset with an explicit set of present columns.
    pub fn new(records: Vec<Record>, columns: HashSet<Column>) -> Self {
        Self { records, columns }
    }

    /// Creates a dataset in which every known column is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use renewal::{Column, Dataset, RecordBuilder};
    ///
    /// let dataset = Dataset::from_records(vec![
    ///     RecordBuilder::new().complex_id("A").municipality("חיפה").build(),
    /// ]);
    /// assert_eq!(dataset.len(), 1);
    /// assert!(dataset.has_column(Column::Municipality));
    /// ```
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            columns: Column::ALL.into_iter().collect(),
        }
    }

    /// Returns the records in payload order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if the column appeared in the loaded payload.
    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// Returns the distinct, non-empty municipality names in encounter order.
    ///
    /// Empty when the municipality column is missing.
    pub fn municipalities(&self) -> Vec<&str> {
        if !self.has_column(Column::Municipality) {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(Record::municipality)
            .filter(|name| !name.is_empty())
            .filter(|name| seen.insert(*name))
            .collect()
    }
}
