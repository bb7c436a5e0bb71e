//! Extraction of the year and municipality from free text.

use std::sync::OnceLock;

use regex::Regex;

use super::types::{MatchPolicy, QueryFilter};
use crate::models::Dataset;

/// Tel Aviv without the municipal suffix, as users usually write it.
pub const TEL_AVIV: &str = "תל אביב";

/// The municipality name the dataset uses for Tel Aviv.
pub const TEL_AVIV_CANONICAL: &str = "תל אביב יפו";

fn digit_runs() -> &'static Regex {
    static DIGIT_RUNS: OnceLock<Regex> = OnceLock::new();
    DIGIT_RUNS.get_or_init(|| Regex::new(r"\d+").expect("digit-run pattern is valid"))
}

/// Extracts the first year-like number from the text.
///
/// A year is a run of exactly four digits starting with `19` or `20`. Digits
/// directly before or after the run disqualify it; letters do not. The value is
/// not range-checked.
///
/// # Examples
///
/// ```
/// use renewal::answerer::extract_year;
///
/// assert_eq!(extract_year("יולי 2025").as_deref(), Some("2025"));
/// assert_eq!(extract_year("12025"), None);
/// assert_eq!(extract_year("202"), None);
/// ```
pub fn extract_year(text: &str) -> Option<String> {
    digit_runs()
        .find_iter(text)
        .map(|run| run.as_str())
        .find(|run| run.chars().count() == 4 && (run.starts_with("19") || run.starts_with("20")))
        .map(str::to_string)
}

/// Finds the municipality from the dataset vocabulary that occurs in the text.
///
/// The vocabulary is the distinct non-empty municipality names in dataset
/// encounter order. Returns `None` when nothing matches, when the vocabulary is
/// empty, or when the municipality column is missing.
pub fn extract_city(text: &str, dataset: &Dataset, policy: MatchPolicy) -> Option<String> {
    let mut candidates = dataset
        .municipalities()
        .into_iter()
        .filter(|name| text.contains(name));

    let found = match policy {
        MatchPolicy::FirstEncountered => candidates.next(),
        MatchPolicy::Longest => candidates.fold(None, |best: Option<&str>, name| match best {
            Some(current) if current.chars().count() >= name.chars().count() => Some(current),
            _ => Some(name),
        }),
    };

    found.map(str::to_string)
}

/// Builds the query filter for a question.
///
/// When the vocabulary scan finds nothing but the question mentions Tel Aviv
/// without the suffix, the municipality falls back to the dataset's Tel Aviv name.
pub fn interpret(text: &str, dataset: &Dataset, policy: MatchPolicy) -> QueryFilter {
    let year = extract_year(text);
    let municipality = extract_city(text, dataset, policy)
        .or_else(|| text.contains(TEL_AVIV).then(|| TEL_AVIV_CANONICAL.to_string()));

    log::debug!("Interpreted {text:?} as year={year:?} municipality={municipality:?}");

    QueryFilter { year, municipality }
}
