//! Blend keyword scores with external signals and contextual multipliers.
//!
//! [`KeywordScorer`](crate::KeywordScorer) stops at the keyword score. The
//! aggregator takes that score, blends in optional semantic and model-derived
//! scores, then applies freshness, source reliability, and regional weights
//! before placing the result in a [`RelevanceLevel`] band.

use newsrank_core::{
    Article, ConfigError, RelevanceLevel, ScoringConfig, SourceCatalogue, sanitise_score,
};
use serde::{Deserialize, Serialize};

use crate::{
    BatchReport, FreshnessDecay, KeywordScorer, ScoredArticle, SkippedArticle, WeightApplier,
    feed_item_id, log_batch_summary, record_skip,
};

/// Externally computed relevance signals, each in `0..=100` when present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelevanceSignals {
    /// Embedding-similarity score.
    #[serde(default, rename = "semantic_score")]
    pub semantic: Option<f32>,
    /// Model-assigned score.
    #[serde(default, rename = "ai_score")]
    pub ai: Option<f32>,
}

impl RelevanceSignals {
    /// Read `semantic_score` and `ai_score` fields carried alongside a feed
    /// item. Absent or non-numeric fields yield `None`.
    ///
    /// # Examples
    /// ```
    /// use newsrank_scorer::RelevanceSignals;
    ///
    /// let value = serde_json::json!({"id": "1", "ai_score": 72});
    /// let signals = RelevanceSignals::from_feed_value(&value);
    /// assert_eq!(signals.ai, Some(72.0));
    /// assert_eq!(signals.semantic, None);
    /// ```
    #[must_use]
    pub fn from_feed_value(value: &serde_json::Value) -> Self {
        Self {
            semantic: numeric_field(value, "semantic_score"),
            ai: numeric_field(value, "ai_score"),
        }
    }
}

fn numeric_field(value: &serde_json::Value, field: &str) -> Option<f32> {
    value
        .get(field)
        .and_then(|raw| f32::deserialize(raw).ok())
}

/// Every intermediate value of one aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateScore {
    /// Keyword score fed into the blend.
    pub keyword_score: f32,
    /// Weighted mean of the present signals.
    pub blended_score: f32,
    /// Freshness multiplier.
    pub freshness: f32,
    /// Source reliability multiplier.
    pub source_weight: f32,
    /// Regional multiplier.
    pub regional_weight: f32,
    /// Final relevance in `0..=100`.
    pub final_score: f32,
    /// Band of `final_score`.
    pub level: RelevanceLevel,
}

/// A keyword-scored article with its aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedArticle {
    /// Keyword scoring output.
    #[serde(flatten)]
    pub scored: ScoredArticle,
    /// Aggregated relevance.
    pub relevance: AggregateScore,
}

/// Ranked outcome of scoring a batch of feed items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RankedReport {
    /// Number of items that were scored.
    pub processed: usize,
    /// Number of items that were skipped.
    pub skipped: usize,
    /// Why each skipped item was rejected.
    pub failures: Vec<SkippedArticle>,
    /// Scored items, in input order until ranked.
    pub results: Vec<RankedArticle>,
}

impl RankedReport {
    /// Rank results by descending final score and keep the best `limit`.
    #[must_use]
    pub fn top(mut self, limit: usize) -> Self {
        self.results = top_n(self.results, limit);
        self
    }
}

/// Combines keyword scores with external signals and contextual weights.
///
/// # Examples
/// ```
/// use newsrank_core::{Article, RelevanceLevel, ScoringConfig, SourceCatalogue};
/// use newsrank_scorer::{RelevanceAggregator, RelevanceSignals};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScoringConfig::default();
/// let sources = SourceCatalogue::new();
/// let aggregator = RelevanceAggregator::new(&config, &sources)?;
/// let article = Article::new("1", "Headline", "Body", 1_000)?;
///
/// let score = aggregator.aggregate(&article, 80.0, RelevanceSignals::default(), 1_000);
/// assert_eq!(score.final_score, 80.0);
/// assert_eq!(score.level, RelevanceLevel::High);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RelevanceAggregator<'c> {
    config: &'c ScoringConfig,
    sources: &'c SourceCatalogue,
    decay: FreshnessDecay,
    weights: WeightApplier,
}

impl<'c> RelevanceAggregator<'c> {
    /// Build an aggregator over a configuration and source catalogue.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] reported by [`ScoringConfig::validate`].
    pub fn new(
        config: &'c ScoringConfig,
        sources: &'c SourceCatalogue,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            sources,
            decay: FreshnessDecay::new(config.freshness)?,
            weights: WeightApplier::new(config.source_weights, config.regional_weights),
        })
    }

    /// Aggregate one article scored at `now`.
    #[must_use]
    pub fn aggregate(
        &self,
        article: &Article,
        keyword_score: f32,
        signals: RelevanceSignals,
        now: i64,
    ) -> AggregateScore {
        let blended_score = sanitise_score(self.config.weights.blend(
            keyword_score,
            signals.semantic.map(sanitise_score),
            signals.ai.map(sanitise_score),
        ));
        let profile = self.sources.profile(&article.source);
        let freshness = self.decay.multiplier(article.published, now);
        let final_score = self
            .weights
            .apply(blended_score, freshness, profile.tier, profile.region);
        AggregateScore {
            keyword_score,
            blended_score,
            freshness,
            source_weight: self.weights.source_weight(profile.tier),
            regional_weight: self.weights.regional_weight(profile.region),
            final_score,
            level: self.config.thresholds.classify(final_score),
        }
    }

    /// Aggregate a keyword-scored article.
    #[must_use]
    pub fn rank(
        &self,
        scored: ScoredArticle,
        signals: RelevanceSignals,
        now: i64,
    ) -> RankedArticle {
        let relevance = self.aggregate(&scored.article, scored.keyword_score, signals, now);
        RankedArticle { scored, relevance }
    }

    /// Keyword-score and aggregate raw feed items.
    ///
    /// Items that fail to decode or validate are skipped and reported, like
    /// [`KeywordScorer::score_feed_items`]. Results stay in input order.
    #[must_use]
    pub fn rank_feed_items<I>(&self, scorer: &KeywordScorer, items: I, now: i64) -> RankedReport
    where
        I: IntoIterator<Item = serde_json::Value>,
    {
        let mut batch = BatchReport::default();
        let mut ranked = Vec::new();
        for (index, value) in items.into_iter().enumerate() {
            let id = feed_item_id(&value);
            let signals = RelevanceSignals::from_feed_value(&value);
            match scorer.score_feed_item(value, now) {
                Ok(scored) => ranked.push(self.rank(scored, signals, now)),
                Err(err) => record_skip(&mut batch, index, id, &err),
            }
        }
        log_batch_summary(ranked.len(), batch.skipped_count());
        RankedReport {
            processed: ranked.len(),
            skipped: batch.skipped.len(),
            failures: batch.skipped,
            results: ranked,
        }
    }
}

/// Sort by descending final score; ties keep their input order.
pub fn rank_by_score(articles: &mut [RankedArticle]) {
    articles.sort_by(|a, b| {
        b.relevance
            .final_score
            .total_cmp(&a.relevance.final_score)
    });
}

/// Rank `articles` and keep the best `limit`.
#[must_use]
pub fn top_n(mut articles: Vec<RankedArticle>, limit: usize) -> Vec<RankedArticle> {
    rank_by_score(&mut articles);
    articles.truncate(limit);
    articles
}
