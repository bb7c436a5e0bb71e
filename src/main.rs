use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use renewal::{
    DataGovClientBuilder, DataSource, Dataset, DatasetProvider, FileSource, MatchPolicy,
    QueryAnswerer, QueryAnswererBuilder,
};

/// renewal - answers questions about declared urban-renewal complexes in Israel
#[derive(Parser)]
#[command(name = "renewal")]
#[command(about = "Counts urban-renewal complex declarations by city and year")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    source: SourceArgs,

    /// How a city is picked when several names occur in the question: first or longest
    #[arg(
        long,
        global = true,
        value_name = "POLICY",
        value_parser = parse_match_policy,
        default_value_t = MatchPolicy::FirstEncountered
    )]
    match_policy: MatchPolicy,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Answer a single question
    Ask(AskCommand),
    /// Open the interactive chat
    Chat,
    /// List the city names found in the dataset
    Cities,
}

/// Answer a single question
#[derive(Parser)]
struct AskCommand {
    /// The question, e.g. "כמה מתחמים הוכרזו בחיפה בשנת 2025?"
    #[arg(value_name = "QUESTION")]
    question: String,
}

/// Where the dataset is read from
#[derive(Args)]
struct SourceArgs {
    /// Read records from a local JSON file instead of data.gov.il
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// CKAN resource identifier
    #[arg(long, global = true, value_name = "ID")]
    resource_id: Option<String>,

    /// Maximum number of rows to fetch
    #[arg(long, global = true, value_name = "ROWS")]
    limit: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECONDS")]
    timeout_secs: Option<u64>,
}

fn main() {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(&cli);

    if let Err(e) = result {
        let exit_code = if is_user_error(&e) { 1 } else { 2 };
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code);
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(cli: &Cli) -> Result<()> {
    let answerer = build_answerer(cli.match_policy);

    match &cli.command {
        Commands::Ask(cmd) => {
            validate_question(&cmd.question)?;
            let provider = build_provider(&cli.source)?;
            println!("{}", execute_ask(&cmd.question, &provider, &answerer)?);
            Ok(())
        }
        Commands::Chat => {
            let provider = build_provider(&cli.source)?;
            let dataset = load_dataset(&provider)?;
            renewal::tui::run(dataset, answerer)
        }
        Commands::Cities => {
            let provider = build_provider(&cli.source)?;
            let dataset = load_dataset(&provider)?;
            for city in dataset.municipalities() {
                println!("{city}");
            }
            Ok(())
        }
    }
}

/// Determines if an error is a user error (vs a data or internal error).
fn is_user_error(error: &anyhow::Error) -> bool {
    error.to_string().contains("cannot be empty")
}

fn validate_question(question: &str) -> Result<()> {
    if question.trim().is_empty() {
        anyhow::bail!("Question cannot be empty");
    }
    Ok(())
}

fn parse_match_policy(value: &str) -> Result<MatchPolicy, String> {
    MatchPolicy::parse(value)
        .ok_or_else(|| format!("unknown match policy '{value}' (expected first or longest)"))
}

fn build_answerer(policy: MatchPolicy) -> QueryAnswerer {
    log::debug!("Using {policy} match policy");
    QueryAnswererBuilder::new().match_policy(policy).build()
}

/// Builds the dataset provider from CLI flags, falling back to the environment.
///
/// `--file` wins over `RENEWAL_DATA_FILE`, which wins over the portal.
fn build_provider(args: &SourceArgs) -> Result<DatasetProvider> {
    let source: Arc<dyn DataSource> = match args.file.clone().map(FileSource::new) {
        Some(file) => Arc::new(file),
        None => match FileSource::from_env() {
            Some(file) => Arc::new(file),
            None => Arc::new(build_client(args)?),
        },
    };

    log::debug!("Using data source {}", source.describe());
    Ok(DatasetProvider::new(source))
}

fn build_client(args: &SourceArgs) -> Result<renewal::DataGovClient> {
    let mut builder = DataGovClientBuilder::new();
    if let Some(resource_id) = &args.resource_id {
        builder = builder.resource_id(resource_id.clone());
    }
    if let Some(limit) = args.limit {
        builder = builder.limit(limit);
    }
    if let Some(secs) = args.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .context("Failed to configure data.gov.il client")
}

fn load_dataset(provider: &DatasetProvider) -> Result<Arc<Dataset>> {
    provider.load().context("שגיאה בטעינת הנתונים")
}

/// Loads the dataset and answers one question.
///
/// Separated from `run` to allow testing with an injected provider.
fn execute_ask(
    question: &str,
    provider: &DatasetProvider,
    answerer: &QueryAnswerer,
) -> Result<String> {
    let dataset = load_dataset(provider)?;
    Ok(answerer.answer(question, &dataset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use renewal::SourceError;
    use serde_json::{Value, json};

    struct StaticSource(Value);

    impl DataSource for StaticSource {
        fn fetch(&self) -> Result<Value, SourceError> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    struct DownSource;

    impl DataSource for DownSource {
        fn fetch(&self) -> Result<Value, SourceError> {
            Err(SourceError::Http { status: 503 })
        }

        fn describe(&self) -> String {
            "down".to_string()
        }
    }

    fn provider() -> DatasetProvider {
        DatasetProvider::new(Arc::new(StaticSource(json!({
            "success": true,
            "result": {"records": [
                {"MisparMitham": 1, "Yeshuv": "תל אביב יפו", "TaarichHachraza": "2025-01-01"},
                {"MisparMitham": 2, "Yeshuv": "תל אביב יפו", "TaarichHachraza": "2025-02-01"}
            ]}
        }))))
    }

    #[test]
    fn question_validation_rejects_blank_input() {
        let result = validate_question("  \n ");
        assert!(result.is_err());
        assert!(is_user_error(&result.unwrap_err()));
        assert!(validate_question("חיפה 2025").is_ok());
    }

    #[test]
    fn execute_ask_answers_from_provider() {
        let answer = execute_ask(
            "כמה מתחמים הוכרזו בתל אביב בשנת 2025?",
            &provider(),
            &QueryAnswerer::new(),
        )
        .unwrap();

        assert_eq!(answer, "בשנת 2025 הוכרזו 2 מתחמי התחדשות עירונית בתל אביב יפו.");
    }

    #[test]
    fn load_failure_is_reported_in_hebrew_and_is_not_a_user_error() {
        let provider = DatasetProvider::new(Arc::new(DownSource));
        let error = execute_ask("חיפה 2025", &provider, &QueryAnswerer::new()).unwrap_err();

        let message = format!("{error:#}");
        assert!(message.starts_with("שגיאה בטעינת הנתונים: "));
        assert!(message.contains("503"));
        assert!(!is_user_error(&error));
    }

    #[test]
    fn match_policy_flag_selects_policy() {
        let cli = Cli::try_parse_from(["renewal", "cities", "--match-policy", "longest"]).unwrap();
        assert_eq!(cli.match_policy, MatchPolicy::Longest);
        assert_eq!(
            build_answerer(cli.match_policy).match_policy(),
            MatchPolicy::Longest
        );

        let cli = Cli::try_parse_from(["renewal", "cities"]).unwrap();
        assert_eq!(cli.match_policy, MatchPolicy::FirstEncountered);
    }

    #[test]
    fn unknown_match_policy_is_rejected() {
        let result = Cli::try_parse_from(["renewal", "cities", "--match-policy", "fuzzy"]);
        assert!(result.is_err());
        assert!(parse_match_policy("fuzzy").unwrap_err().contains("first or longest"));
    }

    #[test]
    fn file_flag_selects_file_source() {
        let args = SourceArgs {
            file: Some(PathBuf::from("/data/complexes.json")),
            resource_id: None,
            limit: None,
            timeout_secs: None,
        };
        let provider = build_provider(&args).unwrap();
        assert_eq!(provider.source_description(), "/data/complexes.json");
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "renewal",
            "ask",
            "חיפה 2025",
            "--file",
            "records.json",
            "--match-policy",
            "longest",
        ])
        .unwrap();

        assert_eq!(cli.match_policy, MatchPolicy::Longest);
        assert_eq!(cli.source.file, Some(PathBuf::from("records.json")));
        match cli.command {
            Commands::Ask(cmd) => assert_eq!(cmd.question, "חיפה 2025"),
            _ => panic!("expected ask"),
        }
    }
}
