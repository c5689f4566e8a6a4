//! Facade crate for the newsrank relevance engine.
//!
//! This crate re-exports the core domain types and exposes feed parsing and
//! the keyword scorer behind feature flags.

#![forbid(unsafe_code)]

pub use newsrank_core::{
    Article, ArticleError, BlendWeights, ConfigError, FreshnessConfig, Keyword, MAX_SCORE,
    MAX_TOPIC_SCORE, Region, RegionalWeights, RelevanceLevel, RelevanceThresholds, Scorer,
    ScoringConfig, ScoringDefaults, SourceCatalogue, SourceProfile, SourceTier, SourceWeights,
    TopicKeywordError, TopicKeywordSet, TopicKeywords, TopicScoreTable, sanitise_score,
};

#[cfg(feature = "feed")]
pub use newsrank_core::{FeedItem, FeedItemError, strip_html};

#[cfg(feature = "scorer")]
pub use newsrank_scorer::{
    AggregateScore, BatchReport, KeywordScorer, RankedArticle, RankedReport, RelevanceAggregator,
    RelevanceSignals, ScoreBreakdown, ScoredArticle, ScoringMethod, SkippedArticle,
    TopicScoreLoadError, rank_by_score, top_n,
};
