//! Keyword relevance scoring for news articles.
//!
//! The crate turns pre-fetched [`Article`]s into relevance scores in two
//! stages:
//! - **Keyword scoring** matches every configured topic's positive and
//!   negative keywords against the article text
//!   ([`TopicMatcher`]), then reduces the per-topic strengths to a keyword
//!   score weighted by personalised topic base scores
//!   ([`TopicScoreNormalizer`]). [`KeywordScorer`] runs both steps and
//!   implements the [`Scorer`](newsrank_core::Scorer) trait.
//! - **Aggregation** blends the keyword score with optional semantic and
//!   model-derived signals, then applies freshness decay
//!   ([`FreshnessDecay`]) and source/regional multipliers
//!   ([`WeightApplier`]) via [`RelevanceAggregator`].
//!
//! Topic base scores come from a JSON file located by [`default_candidates`];
//! a missing or malformed file degrades to default base scores with a logged
//! warning.
//!
//! # Examples
//!
//! ```
//! use newsrank_core::{Article, TopicKeywordSet, TopicScoreTable};
//! use newsrank_scorer::KeywordScorer;
//!
//! # fn main() -> Result<(), newsrank_core::ArticleError> {
//! let scorer = KeywordScorer::new(
//!     TopicKeywordSet::default(),
//!     TopicScoreTable::new().with_score("Cybersecurity", 95),
//! );
//! let article = Article::new("1", "Malware spreads", "Encryption keys stolen", 0)?;
//! let (score, breakdown) = scorer.score_article(&article);
//! assert_eq!(score, 95.0);
//! assert_eq!(breakdown.contributing_topics, ["Cybersecurity"]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use camino::Utf8PathBuf;
use newsrank_core::{
    Article, ArticleError, ConfigError, FeedItem, FeedItemError, Scorer, ScoringDefaults,
    TopicKeywordSet, TopicScoreTable,
};

mod aggregate;
mod error;
mod freshness;
mod keywords;
mod loader;
mod matcher;
mod normalise;
mod types;
mod weights;

pub use aggregate::{
    AggregateScore, RankedArticle, RankedReport, RelevanceAggregator, RelevanceSignals,
    rank_by_score, top_n,
};
pub use error::TopicScoreLoadError;
pub use freshness::FreshnessDecay;
pub use keywords::{KeywordExtractor, KeywordIter};
pub use loader::{
    TOPIC_SCORE_FILE_NAME, default_candidates, find_topic_scores, load_topic_scores,
    load_topic_scores_or_default, parse_topic_scores,
};
pub use matcher::{TopicMatch, TopicMatcher};
pub use normalise::{ScoreBreakdown, TopicScoreNormalizer};
pub use types::{BatchReport, ScoredArticle, ScoringMethod, SkippedArticle};
pub use weights::{WeightApplier, combine};

/// Keyword scoring facade over a topic keyword set and topic score table.
///
/// The scorer owns immutable configuration and may be shared across threads
/// by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordScorer {
    keywords: TopicKeywordSet,
    scores: TopicScoreTable,
    defaults: ScoringDefaults,
}

impl Default for KeywordScorer {
    /// Built-in topics with an empty score table.
    fn default() -> Self {
        Self::new(TopicKeywordSet::default(), TopicScoreTable::new())
    }
}

impl KeywordScorer {
    /// Build a scorer with default fallbacks.
    #[must_use]
    pub fn new(keywords: TopicKeywordSet, scores: TopicScoreTable) -> Self {
        Self {
            keywords,
            scores,
            defaults: ScoringDefaults::default(),
        }
    }

    /// Built-in topics with base scores read from the first of `candidates`
    /// that exists.
    ///
    /// Load failures are logged and leave the score table empty.
    #[must_use]
    pub fn from_candidates(candidates: &[Utf8PathBuf]) -> Self {
        Self::new(
            TopicKeywordSet::default(),
            load_topic_scores_or_default(candidates),
        )
    }

    /// Built-in topics with base scores read from [`default_candidates`].
    #[must_use]
    pub fn from_default_locations() -> Self {
        Self::from_candidates(&default_candidates())
    }

    /// Replace the fallback values.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidDefaults`] when `defaults` fails
    /// [`ScoringDefaults::validate`].
    pub fn with_defaults(mut self, defaults: ScoringDefaults) -> Result<Self, ConfigError> {
        self.defaults = defaults.validate()?;
        Ok(self)
    }

    /// Configured topic keywords.
    #[must_use]
    pub const fn keywords(&self) -> &TopicKeywordSet {
        &self.keywords
    }

    /// Configured topic base scores.
    #[must_use]
    pub const fn scores(&self) -> &TopicScoreTable {
        &self.scores
    }

    /// Fallback values in use.
    #[must_use]
    pub const fn defaults(&self) -> ScoringDefaults {
        self.defaults
    }

    /// Diagnostic keywords of `text`.
    #[must_use]
    pub fn extract_keywords(text: &str) -> KeywordExtractor<'_> {
        KeywordExtractor::new(text)
    }

    /// Per-topic match strengths for `article`.
    #[must_use]
    pub fn match_topics(&self, article: &Article) -> Vec<TopicMatch> {
        TopicMatcher::new(&self.keywords)
            .with_negative_penalty(self.defaults.negative_penalty)
            .match_article(article)
    }

    /// Keyword score and its breakdown for one article.
    #[must_use]
    pub fn score_article(&self, article: &Article) -> (f32, ScoreBreakdown) {
        let matches = self.match_topics(article);
        let breakdown = TopicScoreNormalizer::new(&self.scores, self.defaults).normalise(&matches);
        log::debug!(
            "article {} keyword score {:.2} from {} topic(s)",
            article.id,
            breakdown.keyword_score,
            breakdown.contributing_topics.len()
        );
        (breakdown.keyword_score, breakdown)
    }

    /// Validate and score one article into a [`ScoredArticle`].
    ///
    /// # Errors
    /// Returns [`ArticleError`] when the article fails
    /// validation.
    pub fn score_result(&self, article: Article) -> Result<ScoredArticle, ArticleError> {
        article.validate()?;
        let (keyword_score, details) = self.score_article(&article);
        Ok(ScoredArticle {
            article,
            keyword_score,
            details,
            scoring_method: ScoringMethod::Keyword,
        })
    }

    /// Decode, convert, and score one raw feed item.
    ///
    /// # Errors
    /// Returns [`FeedItemError`] when the value cannot be decoded or the
    /// resulting article is invalid.
    pub fn score_feed_item(
        &self,
        value: serde_json::Value,
        now: i64,
    ) -> Result<ScoredArticle, FeedItemError> {
        let article = FeedItem::from_value(value)?.into_article(now)?;
        self.score_result(article).map_err(FeedItemError::from)
    }

    /// Score articles in order, skipping any that fail validation.
    #[must_use]
    pub fn score_articles_batch<I>(&self, articles: I) -> BatchReport
    where
        I: IntoIterator<Item = Article>,
    {
        let mut report = BatchReport::default();
        for (index, article) in articles.into_iter().enumerate() {
            let id = non_blank(&article.id);
            match self.score_result(article) {
                Ok(scored) => report.results.push(scored),
                Err(err) => record_skip(&mut report, index, id, &err),
            }
        }
        log_batch_summary(report.processed(), report.skipped_count());
        report
    }

    /// Score raw feed items in order, skipping any that fail to convert.
    ///
    /// `now` stands in for missing publication times.
    #[must_use]
    pub fn score_feed_items<I>(&self, items: I, now: i64) -> BatchReport
    where
        I: IntoIterator<Item = serde_json::Value>,
    {
        let mut report = BatchReport::default();
        for (index, value) in items.into_iter().enumerate() {
            let id = feed_item_id(&value);
            match self.score_feed_item(value, now) {
                Ok(scored) => report.results.push(scored),
                Err(err) => record_skip(&mut report, index, id, &err),
            }
        }
        log_batch_summary(report.processed(), report.skipped_count());
        report
    }
}

impl Scorer for KeywordScorer {
    fn score(&self, article: &Article) -> f32 {
        Self::sanitise(self.score_article(article).0)
    }
}

pub(crate) fn feed_item_id(value: &serde_json::Value) -> Option<String> {
    value
        .get("id")
        .and_then(serde_json::Value::as_str)
        .and_then(non_blank)
}

fn non_blank(id: &str) -> Option<String> {
    let trimmed = id.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

pub(crate) fn record_skip(
    report: &mut BatchReport,
    index: usize,
    id: Option<String>,
    reason: &dyn std::fmt::Display,
) {
    log::warn!(
        "skipping item {index} ({}): {reason}",
        id.as_deref().unwrap_or("no id")
    );
    report.skipped.push(SkippedArticle {
        index,
        id,
        reason: reason.to_string(),
    });
}

pub(crate) fn log_batch_summary(processed: usize, skipped: usize) {
    log::info!("scored {processed} article(s), skipped {skipped}");
}
