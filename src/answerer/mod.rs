//! Question interpretation, aggregation and answer composition.
//!
//! This is the engine behind every front end: it takes the raw question text
//! and an already loaded `Dataset`, and always returns answer text. Nothing
//! here fails or keeps state between questions.

mod aggregator;
mod formatter;
mod interpreter;
mod query_answerer;
mod types;

pub use aggregator::{count_declarations, count_matching};
pub use formatter::{FALLBACK_ANSWER, compose, fallback};
pub use interpreter::{TEL_AVIV, TEL_AVIV_CANONICAL, extract_city, extract_year, interpret};
pub use query_answerer::{QueryAnswerer, QueryAnswererBuilder, answer};
pub use types::{MatchPolicy, QueryFilter};
