pub mod answerer;
pub mod datagov;
pub mod dataset;
pub mod models;
pub mod session;
pub mod tui;

pub use answerer::{MatchPolicy, QueryAnswerer, QueryAnswererBuilder, QueryFilter, answer};
pub use datagov::{DataGovClient, DataGovClientBuilder, DataSource, FileSource, SourceError};
pub use dataset::{DatasetError, DatasetProvider};
pub use models::{Column, ComplexId, Dataset, Record, RecordBuilder};
pub use session::{Exchange, Session};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_accessible_from_crate_root() {
        let dataset = Dataset::default();
        assert_eq!(answer("", &dataset), answerer::FALLBACK_ANSWER);
    }

    #[test]
    fn types_accessible_from_crate_root() {
        let record = RecordBuilder::new().complex_id("A").build();
        assert_eq!(record.complex_id(), Some(&ComplexId::new("A")));

        let filter = QueryFilter::new("2025", "חיפה");
        assert!(filter.is_complete());

        let answerer = QueryAnswererBuilder::new()
            .match_policy(MatchPolicy::Longest)
            .build();
        assert_eq!(answerer.match_policy(), MatchPolicy::Longest);

        assert_eq!(Column::ComplexId.field_name(), "MisparMitham");
        assert!(Session::new().is_empty());
    }
}
