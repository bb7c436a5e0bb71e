//! Types shared by the answering pipeline.

/// How a municipality is picked when several vocabulary entries occur in the question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// First entry in dataset encounter order that occurs in the question.
    ///
    /// A short name embedded in a longer one wins if the dataset lists it first.
    #[default]
    FirstEncountered,
    /// Longest entry that occurs in the question; ties go to encounter order.
    Longest,
}

impl MatchPolicy {
    /// Parse from string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "first" | "first_encountered" | "firstencountered" => Some(Self::FirstEncountered),
            "longest" => Some(Self::Longest),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FirstEncountered => write!(f, "first"),
            Self::Longest => write!(f, "longest"),
        }
    }
}

/// The structured filter extracted from a question.
///
/// Aggregation only runs when both parts are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilter {
    /// Four-digit year, e.g. "2025".
    pub year: Option<String>,
    /// Municipality name as it appears in the dataset (or a substring of it).
    pub municipality: Option<String>,
}

impl QueryFilter {
    /// Creates a filter with both parts set.
    pub fn new(year: impl Into<String>, municipality: impl Into<String>) -> Self {
        Self {
            year: Some(year.into()),
            municipality: Some(municipality.into()),
        }
    }

    /// Returns the year, if extracted.
    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    /// Returns the municipality, if extracted.
    pub fn municipality(&self) -> Option<&str> {
        self.municipality.as_deref()
    }

    /// Returns true if both year and municipality are present.
    pub fn is_complete(&self) -> bool {
        self.year.is_some() && self.municipality.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_policy_parse() {
        assert_eq!(MatchPolicy::parse("first"), Some(MatchPolicy::FirstEncountered));
        assert_eq!(MatchPolicy::parse("LONGEST"), Some(MatchPolicy::Longest));
        assert_eq!(MatchPolicy::parse("fuzzy"), None);
    }

    #[test]
    fn match_policy_display_round_trips_through_parse() {
        for policy in [MatchPolicy::FirstEncountered, MatchPolicy::Longest] {
            assert_eq!(MatchPolicy::parse(&policy.to_string()), Some(policy));
        }
    }

    #[test]
    fn default_policy_is_first_encountered() {
        assert_eq!(MatchPolicy::default(), MatchPolicy::FirstEncountered);
    }

    #[test]
    fn filter_completeness() {
        assert!(QueryFilter::new("2025", "חיפה").is_complete());

        let partial = QueryFilter {
            year: Some("2025".to_string()),
            municipality: None,
        };
        assert!(!partial.is_complete());
        assert!(!QueryFilter::default().is_complete());
    }
}
