use clap::{Parser, Subcommand};
use extractor::{
    HtmlExtractor, QuestionSearch,
    canonical::{
        QuestionValidator,
        preview::{DEFAULT_PREVIEW_COUNT, render_preview},
        store,
    },
    search::render_question,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_OUTPUT: &str = "extracted_questions.json";

#[derive(Parser)]
#[command(name = "extract")]
#[command(about = "Extracts exam questions from a saved HTML page into JSON", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Used when no subcommand is given
    #[command(flatten)]
    extract: ExtractArgs,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the exam page and write the questions as JSON
    Extract(ExtractArgs),
    /// Search an extracted question file
    Search {
        query: String,

        #[arg(short, long, env = "EXAM_OUTPUT", default_value = DEFAULT_OUTPUT)]
        file: PathBuf,

        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Check an extracted question file for inconsistent records
    Validate {
        #[arg(env = "EXAM_OUTPUT", default_value = DEFAULT_OUTPUT)]
        file: PathBuf,
    },
}

#[derive(clap::Args)]
struct ExtractArgs {
    #[arg(short, long, env = "EXAM_INPUT", default_value = "exam.html")]
    input: PathBuf,

    #[arg(short, long, env = "EXAM_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Number of questions printed after extraction
    #[arg(long, default_value_t = DEFAULT_PREVIEW_COUNT)]
    preview: usize,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("extract={},extractor={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command.unwrap_or(Commands::Extract(cli.extract)) {
        Commands::Extract(args) => handle_extract(args).await?,
        Commands::Search { query, file, limit } => handle_search(&query, &file, limit).await?,
        Commands::Validate { file } => handle_validate(&file).await?,
    }

    Ok(())
}

async fn handle_extract(args: ExtractArgs) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Extracting questions from: {}", args.input.display());

    let extractor = HtmlExtractor::default();
    let questions = extractor.extract_and_save(&args.input, &args.output).await?;

    if questions.is_empty() {
        tracing::warn!("No questions found. Check the filename or HTML structure.");
        return Ok(());
    }

    tracing::info!("Successfully extracted {} questions.", questions.len());
    print!("{}", render_preview(&questions, args.preview));
    tracing::info!("Full data saved to '{}'", args.output.display());
    tracing::info!("Search it with:");
    tracing::info!(
        "   cargo run --bin extract -- search <query> --file {}",
        args.output.display()
    );

    Ok(())
}

async fn handle_search(
    query: &str,
    file: &Path,
    limit: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let questions = store::load_questions(file).await?;
    let search = QuestionSearch::new(&questions);

    let matched = search.filter(query);
    tracing::info!("{}", search.summary(query, matched.len()));

    if matched.is_empty() {
        tracing::info!("No questions found matching your search.");
        return Ok(());
    }

    let limit = limit.unwrap_or_else(|| QuestionSearch::default_limit(query));
    for question in matched.iter().take(limit) {
        println!("{}", render_question(question, query));
    }

    if matched.len() > limit {
        tracing::info!(
            "Showing {} of {} matches; raise --limit to see more",
            limit,
            matched.len()
        );
    }

    Ok(())
}

async fn handle_validate(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Validating extracted questions in: {}", file.display());

    let questions = store::load_questions(file).await?;
    let report = QuestionValidator::validate(&questions)?;
    report.log_warnings();

    tracing::info!(
        "✓ Validation successful! {} question(s), {} warning(s)",
        questions.len(),
        report.warnings.len()
    );

    Ok(())
}
