//! banter — channel-log analyzer.
//!
//! Reads message text from a CSV export (for example a LinkedIn channel
//! log), folds it through the banter-core analyzer, and prints the
//! report: totals, frequent words, matched topics.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use banter_core::Analyzer;
use banter_types::{AnalyzerConfig, CharCount, DEFAULT_PUNCTUATION};

mod loader;
mod topics;

/// Analyze message text from a CSV channel export.
#[derive(Parser, Debug)]
#[command(name = "banter", version, about, long_about = None)]
struct Cli {
    /// Path to the CSV export.
    input: PathBuf,

    /// Name of the column holding the message text.
    #[arg(long, default_value = "message")]
    column: String,

    /// Number of frequent words to report.
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Keywords that must be present in the corpus for a topic to match.
    #[arg(long, default_value_t = 1)]
    min_keyword_matches: usize,

    /// Drop English stop words before counting.
    #[arg(long)]
    filter_stop_words: bool,

    /// Punctuation characters stripped from tokens.
    #[arg(long, default_value = DEFAULT_PUNCTUATION)]
    punctuation: String,

    /// Count characters as UTF-8 bytes instead of Unicode scalars.
    #[arg(long)]
    bytes: bool,

    /// JSON file overriding the built-in topic set.
    #[arg(long)]
    topics: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let topic_set = match &cli.topics {
        Some(path) => topics::load_topics(path)
            .with_context(|| format!("loading topics from {}", path.display()))?,
        None => topics::default_topics(),
    };

    let config = AnalyzerConfig {
        top_n: cli.top,
        min_keyword_matches: cli.min_keyword_matches,
        char_count: if cli.bytes {
            CharCount::Bytes
        } else {
            CharCount::Scalars
        },
        filter_stop_words: cli.filter_stop_words,
        punctuation: cli.punctuation.clone(),
    };

    let mut analyzer = Analyzer::with_topics(&topic_set, config);

    info!(
        path = %cli.input.display(),
        column = %cli.column,
        "starting message analysis"
    );

    let rows = loader::load_column(&cli.input, &cli.column, |message| {
        analyzer.add(message);
    })?;

    info!(
        rows,
        unique_tokens = analyzer.unique_tokens(),
        "analysis complete"
    );

    print!("{}", analyzer.report());
    Ok(())
}
