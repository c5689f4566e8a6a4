//! Score command implementation for the newsrank CLI.

use std::io::{BufReader, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use newsrank_core::{ScoringConfig, SourceCatalogue};
use newsrank_fs::{open_utf8_file, read_utf8_to_string, write_utf8_file};
use newsrank_scorer::{KeywordScorer, RankedReport, RelevanceAggregator};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    ARG_SCORE_INPUT, ARG_SCORE_LIMIT, ARG_SCORE_NOW, ARG_SCORE_OUTPUT, ARG_SCORE_SCORING_CONFIG,
    ARG_SCORE_SOURCES, ARG_SCORE_TOPIC_SCORES, CliError, DEFAULT_LIMIT, ENV_SCORE_INPUT,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a JSON file of pre-fetched feed items against the \
                 personalised topic scores, blend in any semantic or AI \
                 scores carried by the items, apply freshness, source, and \
                 regional weights, and print the ranked report as JSON. \
                 The input is either an array of items or an object with an \
                 `items` array.",
    about = "Rank feed items by relevance"
)]
#[ortho_config(prefix = "NEWSRANK")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file of feed items.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input_path: Option<Utf8PathBuf>,
    /// Topic score file; otherwise the default locations are searched.
    #[arg(long = ARG_SCORE_TOPIC_SCORES, value_name = "path")]
    #[serde(default)]
    pub(crate) topic_scores: Option<Utf8PathBuf>,
    /// JSON scoring configuration overriding the built-in defaults.
    #[arg(long = ARG_SCORE_SCORING_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) scoring_config: Option<Utf8PathBuf>,
    /// JSON map of source names to reliability tier and region.
    #[arg(long = ARG_SCORE_SOURCES, value_name = "path")]
    #[serde(default)]
    pub(crate) sources: Option<Utf8PathBuf>,
    /// Reference time in Unix seconds; defaults to the system clock.
    #[arg(long = ARG_SCORE_NOW, value_name = "epoch")]
    #[serde(default)]
    pub(crate) now: Option<i64>,
    /// Number of ranked results to keep.
    #[arg(long = ARG_SCORE_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Write the report here instead of stdout.
    #[arg(long = ARG_SCORE_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    /// Feed item file.
    pub(crate) input_path: Utf8PathBuf,
    /// Explicit topic score file.
    pub(crate) topic_scores: Option<Utf8PathBuf>,
    /// Explicit scoring configuration file.
    pub(crate) scoring_config: Option<Utf8PathBuf>,
    /// Explicit source catalogue file.
    pub(crate) sources: Option<Utf8PathBuf>,
    /// Reference time, when pinned.
    pub(crate) now: Option<i64>,
    /// Number of ranked results to keep.
    pub(crate) limit: usize,
    /// Report destination; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.input_path, ARG_SCORE_INPUT)?;
        let optional = [
            (self.topic_scores.as_deref(), ARG_SCORE_TOPIC_SCORES),
            (self.scoring_config.as_deref(), ARG_SCORE_SCORING_CONFIG),
            (self.sources.as_deref(), ARG_SCORE_SOURCES),
        ];
        for (path, field) in optional {
            if let Some(path) = path {
                Self::require_existing(path, field)?;
            }
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match newsrank_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn reference_time(&self) -> i64 {
        self.now.unwrap_or_else(current_epoch_seconds)
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let input_path = args.input_path.ok_or(CliError::MissingArgument {
            field: ARG_SCORE_INPUT,
            env: ENV_SCORE_INPUT,
        })?;
        Ok(Self {
            input_path,
            topic_scores: args.topic_scores,
            scoring_config: args.scoring_config,
            sources: args.sources,
            now: args.now,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            output: args.output,
        })
    }
}

/// Feed item files hold either a bare array or an `items` wrapper.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedDocument {
    Items(Vec<serde_json::Value>),
    Wrapped { items: Vec<serde_json::Value> },
}

impl FeedDocument {
    fn into_items(self) -> Vec<serde_json::Value> {
        match self {
            Self::Items(items) | Self::Wrapped { items } => items,
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_score_config(args)?;
    let report = execute_score(&config)?;
    write_report(&config, writer, &report)
}

fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Load every input named by `config` and rank the feed items.
pub(crate) fn execute_score(config: &ScoreConfig) -> Result<RankedReport, CliError> {
    let items = load_feed_items(&config.input_path)?;
    let scoring = load_scoring_config(config.scoring_config.as_deref())?;
    let sources = load_sources(config.sources.as_deref())?;
    let scorer = keyword_scorer(config.topic_scores.as_deref()).with_defaults(scoring.defaults)?;
    let now = config.reference_time();
    log::debug!("ranking {} item(s) at {now}", items.len());
    let aggregator = RelevanceAggregator::new(&scoring, &sources)?;
    let report = aggregator.rank_feed_items(&scorer, items, now);
    Ok(report.top(config.limit))
}

/// Loads the feed items in `path`.
pub(crate) fn load_feed_items(path: &Utf8Path) -> Result<Vec<serde_json::Value>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::ReadInput {
        field: ARG_SCORE_INPUT,
        path: path.to_path_buf(),
        source,
    })?;
    let document: FeedDocument =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
            field: ARG_SCORE_INPUT,
            path: path.to_path_buf(),
            source,
        })?;
    Ok(document.into_items())
}

/// Loads and validates the scoring configuration, or the defaults.
pub(crate) fn load_scoring_config(path: Option<&Utf8Path>) -> Result<ScoringConfig, CliError> {
    let config = match path {
        Some(path) => load_json::<ScoringConfig>(path, ARG_SCORE_SCORING_CONFIG)?,
        None => ScoringConfig::default(),
    };
    Ok(config.validate()?)
}

fn load_sources(path: Option<&Utf8Path>) -> Result<SourceCatalogue, CliError> {
    path.map_or_else(
        || Ok(SourceCatalogue::new()),
        |path| load_json(path, ARG_SCORE_SOURCES),
    )
}

fn keyword_scorer(topic_scores: Option<&Utf8Path>) -> KeywordScorer {
    topic_scores.map_or_else(KeywordScorer::from_default_locations, |path| {
        KeywordScorer::from_candidates(&[path.to_path_buf()])
    })
}

fn load_json<T: DeserializeOwned>(path: &Utf8Path, field: &'static str) -> Result<T, CliError> {
    let contents = read_utf8_to_string(path).map_err(|source| CliError::ReadInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn write_report(
    config: &ScoreConfig,
    writer: &mut dyn Write,
    report: &RankedReport,
) -> Result<(), CliError> {
    let mut payload = serde_json::to_vec_pretty(report).map_err(CliError::SerialiseReport)?;
    payload.push(b'\n');
    match &config.output {
        Some(path) => write_utf8_file(path, &payload).map_err(|source| {
            CliError::WriteOutputFile {
                path: path.clone(),
                source,
            }
        }),
        None => writer.write_all(&payload).map_err(CliError::WriteOutput),
    }
}

fn current_epoch_seconds() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX)
        })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
