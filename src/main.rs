use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use tracing::info;

use docdistance::config::Config;
use docdistance::output::{self, terminal, Comparison};
use docdistance::text::{normalize, DocumentLoader, FsLoader};
use docdistance::{
    calculate_similarity_score, get_frequencies, get_letter_frequencies, get_most_frequent_words,
    text_to_list, TfIdfEngine,
};

/// docdistance: compare documents by word statistics.
///
/// Similarity of letter or word frequency profiles, the most frequent words
/// across two documents, and TF-IDF ranking against a corpus.
#[derive(Parser)]
#[command(name = "docdistance", version, about)]
struct Cli {
    /// Print results as JSON instead of the colored view
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the letter frequencies of two words
    Words { left: String, right: String },

    /// Compare the word frequencies of two documents
    Compare { left: PathBuf, right: PathBuf },

    /// Rank the words of a document by TF-IDF against a corpus
    Tfidf {
        /// Document to rank
        document: PathBuf,

        /// Corpus files or directories (default: DOCDISTANCE_CORPUS_DIR)
        corpus: Vec<PathBuf>,

        /// Rows to show in the terminal view (default: DOCDISTANCE_TOP_N or 20)
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        top: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docdistance=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Words { left, right } => {
            let left_word = normalize(&left);
            let right_word = normalize(&right);
            let left_freqs = get_letter_frequencies(left_word.as_str());
            let right_freqs = get_letter_frequencies(right_word.as_str());

            let comparison = Comparison {
                similarity: calculate_similarity_score(&left_freqs, &right_freqs)?,
                most_frequent: get_most_frequent_words(&left_freqs, &right_freqs)?
                    .into_iter()
                    .map(String::from)
                    .collect(),
                left,
                right,
            };
            emit_comparison(&comparison, "letters", cli.json)?;
        }

        Commands::Compare { left, right } => {
            let left_text = FsLoader.load(&left)?;
            let right_text = FsLoader.load(&right)?;
            let left_freqs = get_frequencies(text_to_list(left_text.as_str()));
            let right_freqs = get_frequencies(text_to_list(right_text.as_str()));

            info!(
                left_words = left_freqs.len(),
                right_words = right_freqs.len(),
                "Comparing documents"
            );

            let comparison = Comparison {
                left: left.display().to_string(),
                right: right.display().to_string(),
                similarity: calculate_similarity_score(&left_freqs, &right_freqs)?,
                most_frequent: get_most_frequent_words(&left_freqs, &right_freqs)?,
            };
            emit_comparison(&comparison, "words", cli.json)?;
        }

        Commands::Tfidf {
            document,
            corpus,
            top,
        } => {
            let config = Config::load()?;
            let corpus = if corpus.is_empty() {
                vec![config.require_corpus()?.clone()]
            } else {
                corpus
            };
            let corpus_paths = docdistance::corpus::expand_paths(&corpus)?;
            if corpus_paths.is_empty() {
                anyhow::bail!("Corpus {} contains no documents", display_list(&corpus));
            }

            let engine = TfIdfEngine::new(FsLoader);
            let ranked = engine.tfidf(&document, &corpus_paths)?;

            if cli.json {
                println!("{}", output::to_json(&ranked)?);
            } else {
                let top_n = top.unwrap_or(config.top_n);
                terminal::display_ranking(&document.display().to_string(), &ranked, top_n);
            }
        }
    }

    Ok(())
}

fn emit_comparison(comparison: &Comparison, unit: &str, json: bool) -> Result<()> {
    if json {
        let rendered = output::to_json(comparison).context("Failed to render comparison")?;
        println!("{rendered}");
    } else {
        terminal::display_comparison(comparison, unit);
    }
    Ok(())
}

fn display_list(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
