//! Error types raised while loading topic scores.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading a topic score file.
///
/// [`load_topic_scores_or_default`](crate::load_topic_scores_or_default)
/// logs these and falls back to an empty table.
#[derive(Debug, Error)]
pub enum TopicScoreLoadError {
    /// No candidate path pointed at a regular file.
    #[error("no topic score file found among {candidates:?}")]
    NotFound {
        /// Paths that were searched, in order.
        candidates: Vec<Utf8PathBuf>,
    },
    /// Reading the file failed.
    #[error("failed to read topic score file at {path}")]
    Read {
        /// File that could not be read.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The file was not valid topic score JSON.
    #[error("failed to parse topic score file at {path}")]
    Parse {
        /// File that could not be parsed.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
