//! Result types produced by keyword scoring.
#![forbid(unsafe_code)]

use newsrank_core::Article;
use serde::{Deserialize, Serialize};

use crate::ScoreBreakdown;

/// Method used to derive a keyword score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMethod {
    /// Topic keyword matching.
    #[default]
    Keyword,
}

impl ScoringMethod {
    /// Return the method as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
        }
    }
}

impl std::fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword score of one article together with its diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredArticle {
    /// The scored article.
    pub article: Article,
    /// Keyword score in `0..=100`.
    pub keyword_score: f32,
    /// How the score was reached.
    pub details: ScoreBreakdown,
    /// Always [`ScoringMethod::Keyword`].
    pub scoring_method: ScoringMethod,
}

/// An input that a batch could not score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedArticle {
    /// Position of the input within the batch.
    pub index: usize,
    /// Identifier, when one could be read.
    pub id: Option<String>,
    /// Human-readable reason.
    pub reason: String,
}

/// Outcome of scoring a batch.
///
/// `results` keep the relative order of the accepted inputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// Scored articles in input order.
    pub results: Vec<ScoredArticle>,
    /// Inputs that were skipped.
    pub skipped: Vec<SkippedArticle>,
}

impl BatchReport {
    /// Number of articles that were scored.
    #[must_use]
    pub const fn processed(&self) -> usize {
        self.results.len()
    }

    /// Number of inputs that were skipped.
    #[must_use]
    pub const fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}
