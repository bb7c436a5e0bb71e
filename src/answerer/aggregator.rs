//! Distinct-count aggregation over the dataset.

use std::collections::HashSet;

use super::types::QueryFilter;
use crate::models::{Column, Dataset, Record};

/// Counts distinct complexes matching a complete filter.
///
/// Returns `None` if the filter lacks a year or a municipality; the caller
/// should answer with the fallback instead.
pub fn count_declarations(dataset: &Dataset, filter: &QueryFilter) -> Option<usize> {
    match (filter.year(), filter.municipality()) {
        (Some(year), Some(municipality)) => Some(count_matching(dataset, year, municipality)),
        _ => None,
    }
}

/// Counts distinct complex IDs among records whose municipality contains
/// `municipality` and whose declaration date contains `year`.
///
/// Both conditions are substring matches, so "תל אביב" matches a stored
/// "תל אביב יפו". Rows without an ID are not counted. A dataset missing any
/// of the three columns involved yields 0.
pub fn count_matching(dataset: &Dataset, year: &str, municipality: &str) -> usize {
    let required = [Column::ComplexId, Column::Municipality, Column::DeclarationDate];
    if let Some(missing) = required.iter().find(|c| !dataset.has_column(**c)) {
        log::debug!("Dataset has no {missing} column, counting 0");
        return 0;
    }

    dataset
        .records()
        .iter()
        .filter(|r| r.municipality().contains(municipality) && r.declaration_date().contains(year))
        .filter_map(Record::complex_id)
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordBuilder;

    fn record(id: &str, municipality: &str, date: &str) -> Record {
        RecordBuilder::new()
            .complex_id(id)
            .municipality(municipality)
            .declaration_date(date)
            .build()
    }

    fn three_record_dataset() -> Dataset {
        Dataset::from_records(vec![
            record("A", "תל אביב יפו", "2025-02-10"),
            record("B", "תל אביב יפו", "14/07/2025"),
            record("C", "חיפה", "2025"),
        ])
    }

    #[test]
    fn counts_distinct_complexes_per_city() {
        let dataset = three_record_dataset();

        assert_eq!(
            count_declarations(&dataset, &QueryFilter::new("2025", "תל אביב יפו")),
            Some(2)
        );
        assert_eq!(
            count_declarations(&dataset, &QueryFilter::new("2025", "חיפה")),
            Some(1)
        );
    }

    #[test]
    fn repeated_complex_counts_once() {
        let dataset = Dataset::from_records(vec![
            record("A", "בת ים", "2024"),
            record("A", "בת ים", "2024"),
            record("B", "בת ים", "2024"),
        ]);

        assert_eq!(count_matching(&dataset, "2024", "בת ים"), 2);
    }

    #[test]
    fn municipality_filter_is_substring_match() {
        let dataset = three_record_dataset();
        assert_eq!(count_matching(&dataset, "2025", "תל אביב"), 2);
    }

    #[test]
    fn year_must_appear_in_declaration_date() {
        let dataset = three_record_dataset();
        assert_eq!(count_matching(&dataset, "2024", "חיפה"), 0);
    }

    #[test]
    fn incomplete_filter_is_not_aggregated() {
        let dataset = three_record_dataset();
        let year_only = QueryFilter {
            year: Some("2025".to_string()),
            municipality: None,
        };
        let city_only = QueryFilter {
            year: None,
            municipality: Some("חיפה".to_string()),
        };

        assert_eq!(count_declarations(&dataset, &year_only), None);
        assert_eq!(count_declarations(&dataset, &city_only), None);
    }

    #[test]
    fn rows_without_id_are_not_counted() {
        let dataset = Dataset::from_records(vec![
            RecordBuilder::new()
                .municipality("חיפה")
                .declaration_date("2025")
                .build(),
            record("C", "חיפה", "2025"),
        ]);

        assert_eq!(count_matching(&dataset, "2025", "חיפה"), 1);
    }

    #[test]
    fn missing_columns_count_zero() {
        let records = vec![record("A", "חיפה", "2025")];

        for dropped in [Column::ComplexId, Column::Municipality, Column::DeclarationDate] {
            let columns = Column::ALL.into_iter().filter(|c| *c != dropped).collect();
            let dataset = Dataset::new(records.clone(), columns);
            assert_eq!(count_matching(&dataset, "2025", "חיפה"), 0, "without {dropped}");
        }
    }

    #[test]
    fn empty_dataset_counts_zero() {
        assert_eq!(count_matching(&Dataset::default(), "2025", "חיפה"), 0);
    }
}
