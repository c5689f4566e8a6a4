//! Core domain types for the newsrank relevance engine.
//!
//! These models provide basic validation to keep downstream
//! components honest. Constructors return `Result` to surface
//! invalid input early, and configuration structs validate their
//! invariants before a scorer accepts them.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod article;
mod config;
#[cfg(feature = "feed")]
mod feed;
mod scorer;
mod source;
mod topic;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use article::{Article, ArticleError};
pub use config::{
    BlendWeights, ConfigError, DEFAULT_MISSING_TOPIC_SCORE, DEFAULT_NEGATIVE_PENALTY,
    DEFAULT_NO_MATCH_SCORE, FreshnessConfig, RegionalWeights, RelevanceLevel,
    RelevanceThresholds, ScoringConfig, ScoringDefaults, SourceWeights,
};
#[cfg(feature = "feed")]
pub use feed::{FeedContent, FeedItem, FeedItemError, FeedLink, FeedOrigin, strip_html};
pub use scorer::{MAX_SCORE, Scorer, sanitise_score};
pub use source::{Region, SourceCatalogue, SourceProfile, SourceTier};
pub use topic::{
    Keyword, MAX_TOPIC_SCORE, TopicKeywordError, TopicKeywordSet, TopicKeywords, TopicScoreTable,
};
