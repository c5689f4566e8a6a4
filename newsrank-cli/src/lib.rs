//! Command-line interface for ranking pre-fetched news items.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod score;

pub use error::CliError;
use score::{ScoreArgs, run_score};

pub(crate) const ARG_SCORE_INPUT: &str = "input";
pub(crate) const ARG_SCORE_TOPIC_SCORES: &str = "topic-scores";
pub(crate) const ARG_SCORE_SCORING_CONFIG: &str = "scoring-config";
pub(crate) const ARG_SCORE_SOURCES: &str = "sources";
pub(crate) const ARG_SCORE_NOW: &str = "now";
pub(crate) const ARG_SCORE_LIMIT: &str = "limit";
pub(crate) const ARG_SCORE_OUTPUT: &str = "output";
pub(crate) const ENV_SCORE_INPUT: &str = "NEWSRANK_CMDS_SCORE_INPUT_PATH";

/// Number of ranked results written when `--limit` is not given.
pub const DEFAULT_LIMIT: usize = 20;

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, loading inputs,
/// or writing the report fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose);
    match cli.command {
        Command::Score(args) => run_score(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let env = env_logger::Env::default().default_filter_or(level);
    if let Err(err) = env_logger::Builder::from_env(env).try_init() {
        log::debug!("logger already installed: {err}");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "newsrank",
    about = "Rank pre-fetched news items by personalised relevance",
    version
)]
struct Cli {
    /// Log per-article scores and configuration lookups.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score, aggregate, and rank a JSON file of feed items.
    Score(ScoreArgs),
}

#[cfg(test)]
mod tests;
