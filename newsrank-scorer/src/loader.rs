//! Loading personalised topic base scores from disk.
//!
//! The file layout is
//! `{"complete_topic_list": [{"topic": "...", "score": 0..=100}, ...]}`.
//! Scores may be integers or decimals; they are rounded to the nearest whole
//! number and clamped to `0..=100`. Entries may carry extra fields, which are
//! ignored.

use camino::{Utf8Path, Utf8PathBuf};
use newsrank_core::{MAX_TOPIC_SCORE, TopicScoreTable};
use newsrank_fs::{first_existing_file, read_utf8_to_string};
use serde::Deserialize;

use crate::TopicScoreLoadError;

/// File name searched for by [`default_candidates`].
pub const TOPIC_SCORE_FILE_NAME: &str = "topic_scores_100_personalized.json";

#[derive(Debug, Deserialize)]
struct TopicScoreFile {
    complete_topic_list: Vec<TopicScoreEntry>,
}

#[derive(Debug, Deserialize)]
struct TopicScoreEntry {
    topic: String,
    score: f64,
}

impl TopicScoreEntry {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the score is rounded and clamped to 0..=100 before the cast"
    )]
    fn clamped_score(&self) -> u8 {
        self.score.round().clamp(0.0, f64::from(MAX_TOPIC_SCORE)) as u8
    }
}

/// Candidate locations of the topic score file, in search order.
///
/// The working directory, its parent, and the parent of the running
/// executable's directory.
#[must_use]
pub fn default_candidates() -> Vec<Utf8PathBuf> {
    let mut candidates = vec![
        Utf8PathBuf::from(TOPIC_SCORE_FILE_NAME),
        Utf8Path::new("..").join(TOPIC_SCORE_FILE_NAME),
    ];
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| Utf8PathBuf::from_path_buf(exe).ok())
        .and_then(|exe| exe.parent().map(Utf8Path::to_path_buf));
    if let Some(dir) = exe_dir {
        candidates.push(dir.join("..").join(TOPIC_SCORE_FILE_NAME));
    }
    candidates
}

/// Parse topic score JSON.
///
/// # Errors
/// Returns the `serde_json` error when the document does not match the
/// expected layout.
///
/// # Examples
/// ```
/// use newsrank_scorer::parse_topic_scores;
///
/// let table = parse_topic_scores(
///     r#"{"complete_topic_list": [
///         {"topic": "Cybersecurity", "score": 92},
///         {"topic": "Celebrity", "score": -4}
///     ]}"#,
/// ).expect("valid document");
/// assert_eq!(table.get("Cybersecurity"), Some(92));
/// assert_eq!(table.get("Celebrity"), Some(0));
/// ```
pub fn parse_topic_scores(json: &str) -> Result<TopicScoreTable, serde_json::Error> {
    let file: TopicScoreFile = serde_json::from_str(json)?;
    Ok(file
        .complete_topic_list
        .iter()
        .map(|entry| (entry.topic.clone(), entry.clamped_score()))
        .collect())
}

/// Read and parse the topic score file at `path`.
///
/// # Errors
/// Returns [`TopicScoreLoadError::Read`] or [`TopicScoreLoadError::Parse`].
pub fn load_topic_scores(path: &Utf8Path) -> Result<TopicScoreTable, TopicScoreLoadError> {
    let contents = read_utf8_to_string(path).map_err(|source| TopicScoreLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_topic_scores(&contents).map_err(|source| TopicScoreLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the first candidate that exists as a regular file.
///
/// # Errors
/// Returns [`TopicScoreLoadError::NotFound`] when no candidate exists, and
/// propagates errors from [`load_topic_scores`].
pub fn find_topic_scores(
    candidates: &[Utf8PathBuf],
) -> Result<TopicScoreTable, TopicScoreLoadError> {
    let path = first_existing_file(candidates.iter().map(Utf8PathBuf::as_path))
        .ok_or_else(|| TopicScoreLoadError::NotFound {
            candidates: candidates.to_vec(),
        })?;
    let table = load_topic_scores(&path)?;
    log::debug!("loaded {} topic scores from {path}", table.len());
    Ok(table)
}

/// Load topic scores, logging a warning and returning an empty table on
/// failure.
///
/// With an empty table every matched topic falls back to the default base
/// score.
#[must_use]
pub fn load_topic_scores_or_default(candidates: &[Utf8PathBuf]) -> TopicScoreTable {
    find_topic_scores(candidates).unwrap_or_else(|err| {
        log::warn!("using default topic scores: {err}");
        TopicScoreTable::new()
    })
}
