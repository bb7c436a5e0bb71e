//! The question-to-answer pipeline.

use super::aggregator::count_matching;
use super::formatter::{compose, fallback};
use super::interpreter::interpret;
use super::types::MatchPolicy;
use crate::models::Dataset;

/// Builder for constructing `QueryAnswerer` instances.
#[derive(Debug, Default)]
pub struct QueryAnswererBuilder {
    match_policy: Option<MatchPolicy>,
}

impl QueryAnswererBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how municipality names are matched against the question.
    pub fn match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = Some(policy);
        self
    }

    /// Builds the `QueryAnswerer`.
    #[must_use]
    pub fn build(self) -> QueryAnswerer {
        QueryAnswerer {
            match_policy: self.match_policy.unwrap_or_default(),
        }
    }
}

/// Answers count questions about declared urban-renewal complexes.
///
/// Stateless: the same question against the same dataset always yields the
/// same text.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryAnswerer {
    match_policy: MatchPolicy,
}

impl QueryAnswerer {
    /// Creates a `QueryAnswerer` with the default (first-encountered) policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configured match policy.
    pub fn match_policy(&self) -> MatchPolicy {
        self.match_policy
    }

    /// Answers a question against a loaded dataset.
    ///
    /// Questions without both a year and a municipality get the fallback answer.
    pub fn answer(&self, question: &str, dataset: &Dataset) -> String {
        let filter = interpret(question, dataset, self.match_policy);

        let (Some(year), Some(municipality)) = (filter.year(), filter.municipality()) else {
            return fallback().to_string();
        };

        let count = count_matching(dataset, year, municipality);
        log::debug!("{count} complexes in {municipality} for {year}");
        compose(year, municipality, count)
    }
}

/// Answers a question with the default match policy.
///
/// # Examples
///
/// ```
/// use renewal::{Dataset, RecordBuilder, answer};
///
/// let dataset = Dataset::from_records(vec![
///     RecordBuilder::new()
///         .complex_id("C")
///         .municipality("חיפה")
///         .declaration_date("2025-05-01")
///         .build(),
/// ]);
///
/// assert_eq!(
///     answer("כמה מתחמים הוכרזו בחיפה בשנת 2025?", &dataset),
///     "בשנת 2025 הוכרזו 1 מתחמי התחדשות עירונית בחיפה."
/// );
/// ```
pub fn answer(question: &str, dataset: &Dataset) -> String {
    QueryAnswerer::new().answer(question, dataset)
}
