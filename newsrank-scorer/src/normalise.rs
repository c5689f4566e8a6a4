//! Collapse per-topic match strengths into a keyword score.

use std::collections::BTreeMap;

use newsrank_core::{ScoringDefaults, TopicScoreTable, sanitise_score};
use serde::{Deserialize, Serialize};

use crate::TopicMatch;

/// Diagnostic record of how a keyword score was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Net match strength of every configured topic, including zeroes.
    pub keyword_matches: BTreeMap<String, f32>,
    /// Sum of all match strengths.
    pub total_matches: f32,
    /// Topics with positive strength, in configuration order.
    pub contributing_topics: Vec<String>,
    /// Resulting keyword score in `0..=100`.
    pub keyword_score: f32,
}

/// Weighted average of topic base scores, weighted by match strength.
///
/// Topics without a base score in the table use
/// [`ScoringDefaults::missing_topic_score`]; an article that matches nothing
/// receives [`ScoringDefaults::no_match_score`]. Either way the keyword score
/// is clamped to `0..=100`.
///
/// # Examples
/// ```
/// use newsrank_core::{ScoringDefaults, TopicScoreTable};
/// use newsrank_scorer::{TopicMatch, TopicScoreNormalizer};
///
/// let table = TopicScoreTable::new().with_score("Security", 90);
/// let normalizer = TopicScoreNormalizer::new(&table, ScoringDefaults::default());
/// let breakdown = normalizer.normalise(&[
///     TopicMatch { topic: "Security".into(), strength: 1.0 },
///     TopicMatch { topic: "Gardening".into(), strength: 1.0 },
/// ]);
/// assert_eq!(breakdown.keyword_score, 70.0);
/// assert_eq!(breakdown.contributing_topics, ["Security", "Gardening"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TopicScoreNormalizer<'t> {
    scores: &'t TopicScoreTable,
    defaults: ScoringDefaults,
}

impl<'t> TopicScoreNormalizer<'t> {
    /// Build a normaliser over `scores`.
    #[must_use]
    pub const fn new(scores: &'t TopicScoreTable, defaults: ScoringDefaults) -> Self {
        Self { scores, defaults }
    }

    /// Base score for `topic`, falling back to the configured default.
    #[must_use]
    pub fn base_score(&self, topic: &str) -> u8 {
        self.scores
            .get(topic)
            .unwrap_or(self.defaults.missing_topic_score)
    }

    /// Reduce topic matches to a [`ScoreBreakdown`].
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the keyword score is a strength-weighted mean"
    )]
    pub fn normalise(&self, matches: &[TopicMatch]) -> ScoreBreakdown {
        let mut total_score = 0.0_f32;
        let mut total_weight = 0.0_f32;
        let mut contributing_topics = Vec::new();
        for topic_match in matches.iter().filter(|m| m.strength > 0.0) {
            total_score += f32::from(self.base_score(&topic_match.topic)) * topic_match.strength;
            total_weight += topic_match.strength;
            contributing_topics.push(topic_match.topic.clone());
        }

        let raw_score = if total_weight > 0.0 {
            total_score / total_weight
        } else {
            self.defaults.no_match_score
        };

        ScoreBreakdown {
            keyword_matches: matches
                .iter()
                .map(|m| (m.topic.clone(), m.strength))
                .collect(),
            total_matches: matches.iter().map(|m| m.strength).sum(),
            contributing_topics,
            keyword_score: sanitise_score(raw_score),
        }
    }
}
