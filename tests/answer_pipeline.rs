/// End-to-end tests of the question → answer pipeline.
///
/// These load a saved `datastore_search` response through the same provider
/// the CLI uses, so decoding, caching and answering are exercised together.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use renewal::answerer::FALLBACK_ANSWER;
use renewal::{
    DataSource, DatasetProvider, FileSource, MatchPolicy, QueryAnswerer, QueryAnswererBuilder,
    Session, SourceError, answer,
};
use serde_json::Value;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/complexes.json");

/// Wraps a source and counts fetches.
struct CountingSource<S> {
    inner: S,
    calls: AtomicUsize,
}

impl<S: DataSource> DataSource for CountingSource<S> {
    fn fetch(&self) -> Result<Value, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch()
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}

fn fixture_provider() -> DatasetProvider {
    DatasetProvider::new(Arc::new(FileSource::new(FIXTURE)))
}

#[test]
fn answers_tel_aviv_question_from_fixture() -> Result<()> {
    let dataset = fixture_provider().load()?;

    assert_eq!(
        answer(
            "כמה פרויקטים של התחדשות עירונית הוכרזו בתל אביב ב-2025?",
            &dataset
        ),
        "בשנת 2025 הוכרזו 2 מתחמי התחדשות עירונית בתל אביב יפו."
    );
    Ok(())
}

#[test]
fn answers_other_cities_and_years() -> Result<()> {
    let dataset = fixture_provider().load()?;

    assert_eq!(
        answer("כמה מתחמים הוכרזו בחיפה בשנת 2019?", &dataset),
        "בשנת 2019 הוכרזו 1 מתחמי התחדשות עירונית בחיפה."
    );
    assert_eq!(
        answer("כמה מתחמים הוכרזו בבת ים בשנת 2025?", &dataset),
        "לא נמצאו מתחמי התחדשות עירונית בבת ים בשנת 2025."
    );
    Ok(())
}

#[test]
fn unsupported_questions_get_the_fallback() -> Result<()> {
    let dataset = fixture_provider().load()?;

    for question in ["", "מה שלומך?", "כמה מתחמים בחיפה?", "מה היה ב-2025?"] {
        assert_eq!(answer(question, &dataset), FALLBACK_ANSWER);
    }
    Ok(())
}

#[test]
fn match_policies_diverge_on_embedded_names() -> Result<()> {
    let dataset = fixture_provider().load()?;
    let question = "כמה מתחמים הוכרזו באור יהודה בשנת 2023?";

    assert_eq!(
        QueryAnswerer::new().answer(question, &dataset),
        "בשנת 2023 הוכרזו 2 מתחמי התחדשות עירונית באור."
    );
    assert_eq!(
        QueryAnswererBuilder::new()
            .match_policy(MatchPolicy::Longest)
            .build()
            .answer(question, &dataset),
        "בשנת 2023 הוכרזו 1 מתחמי התחדשות עירונית באור יהודה."
    );
    Ok(())
}

#[test]
fn repeated_answers_fetch_once_and_are_identical() -> Result<()> {
    let source = Arc::new(CountingSource {
        inner: FileSource::new(FIXTURE),
        calls: AtomicUsize::new(0),
    });
    let provider = DatasetProvider::new(source.clone());
    let question = "כמה מתחמים הוכרזו בחיפה בשנת 2025?";

    let mut answers = Vec::new();
    for _ in 0..5 {
        let dataset = provider.load()?;
        answers.push(answer(question, &dataset));
    }

    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert!(answers.windows(2).all(|pair| pair[0] == pair[1]));
    Ok(())
}

#[test]
fn session_over_loaded_dataset() -> Result<()> {
    let dataset = fixture_provider().load()?;
    let answerer = QueryAnswerer::new();
    let mut session = Session::new();

    session.ask(&answerer, "חיפה 2025", &dataset);
    session.ask(&answerer, "ומה בתל אביב?", &dataset);

    let answers: Vec<&str> = session
        .exchanges()
        .iter()
        .map(|e| e.answer.as_str())
        .collect();
    assert_eq!(
        answers,
        vec![
            "בשנת 2025 הוכרזו 1 מתחמי התחדשות עירונית בחיפה.",
            FALLBACK_ANSWER
        ]
    );
    Ok(())
}

#[test]
fn fixture_vocabulary_is_in_encounter_order() -> Result<()> {
    let dataset = fixture_provider().load()?;
    assert_eq!(
        dataset.municipalities(),
        vec!["תל אביב יפו", "חיפה", "אור", "אור יהודה", "בת ים"]
    );
    Ok(())
}
