//! Scoring configuration.
//!
//! [`ScoringConfig`] gathers every tunable used by the scoring pipeline. It is
//! built once at start-up, validated, and then shared by reference. With the
//! `serde` feature each section deserialises with per-field defaults, so a
//! configuration file only needs to name the values it overrides.

use thiserror::Error;

use crate::{Region, SourceTier};

/// Base score used for a matched topic absent from the score table.
pub const DEFAULT_MISSING_TOPIC_SCORE: u8 = 50;
/// Keyword score assigned to an article that matches no topic.
pub const DEFAULT_NO_MATCH_SCORE: f32 = 30.0;
/// Fraction of a negative keyword's weight subtracted from a topic's strength.
pub const DEFAULT_NEGATIVE_PENALTY: f32 = 0.5;

const WEIGHT_SUM_TOLERANCE: f32 = 1e-3;

/// Relative weighting of the keyword, semantic, and AI relevance signals.
///
/// The three weights must sum to `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BlendWeights {
    /// Weight of the keyword-derived score.
    #[cfg_attr(feature = "serde", serde(rename = "keyword_score"))]
    pub keyword: f32,
    /// Weight of the embedding-similarity score.
    #[cfg_attr(feature = "serde", serde(rename = "semantic_score"))]
    pub semantic: f32,
    /// Weight of the model-assigned score.
    #[cfg_attr(feature = "serde", serde(rename = "ai_score"))]
    pub ai: f32,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            keyword: 0.3,
            semantic: 0.4,
            ai: 0.3,
        }
    }
}

impl BlendWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidBlendWeights`] when any weight is
    /// negative or non-finite, or the total differs from `1.0`.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let values = [self.keyword, self.semantic, self.ai];
        let usable = values.iter().all(|w| w.is_finite() && *w >= 0.0);
        let total: f32 = values.iter().sum();
        if usable && (total - 1.0).abs() <= WEIGHT_SUM_TOLERANCE {
            Ok(self)
        } else {
            Err(ConfigError::InvalidBlendWeights { total })
        }
    }

    /// Weighted mean of the signals that are present.
    ///
    /// Missing signals drop out and the remaining weights are renormalised.
    /// When every present signal carries zero weight the keyword score is
    /// returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use newsrank_core::BlendWeights;
    ///
    /// let weights = BlendWeights::default();
    /// assert!((weights.blend(60.0, None, None) - 60.0).abs() < 1e-4);
    /// let blended = weights.blend(60.0, Some(80.0), Some(40.0));
    /// assert!((blended - 62.0).abs() < 1e-4);
    /// ```
    #[must_use]
    pub fn blend(self, keyword: f32, semantic: Option<f32>, ai: Option<f32>) -> f32 {
        let signals = [
            (Some(keyword), self.keyword),
            (semantic, self.semantic),
            (ai, self.ai),
        ];
        let (weighted, total) = signals
            .iter()
            .filter_map(|(score, weight)| score.map(|s| (s, *weight)))
            .fold((0.0_f32, 0.0_f32), |(acc, sum), (score, weight)| {
                (acc + score * weight, sum + weight)
            });
        if total <= 0.0 {
            return keyword;
        }
        weighted / total
    }
}

/// Relevance bands an aggregated score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RelevanceLevel {
    /// At or above the high threshold.
    High,
    /// At or above the medium threshold.
    Medium,
    /// At or above the low threshold.
    Low,
    /// Below every threshold.
    Minimal,
}

/// Lower bounds of the relevance bands.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RelevanceThresholds {
    /// Minimum score for [`RelevanceLevel::High`].
    #[cfg_attr(feature = "serde", serde(rename = "high_relevance"))]
    pub high: f32,
    /// Minimum score for [`RelevanceLevel::Medium`].
    #[cfg_attr(feature = "serde", serde(rename = "medium_relevance"))]
    pub medium: f32,
    /// Minimum score for [`RelevanceLevel::Low`].
    #[cfg_attr(feature = "serde", serde(rename = "low_relevance"))]
    pub low: f32,
}

impl Default for RelevanceThresholds {
    fn default() -> Self {
        Self {
            high: 75.0,
            medium: 50.0,
            low: 25.0,
        }
    }
}

impl RelevanceThresholds {
    /// Validate that thresholds descend within `0..=100`.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidThresholds`] otherwise.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let in_range = [self.high, self.medium, self.low]
            .iter()
            .all(|t| (0.0..=100.0).contains(t));
        if in_range && self.high >= self.medium && self.medium >= self.low {
            Ok(self)
        } else {
            Err(ConfigError::InvalidThresholds)
        }
    }

    /// Place a score in its relevance band.
    ///
    /// # Examples
    /// ```
    /// use newsrank_core::{RelevanceLevel, RelevanceThresholds};
    ///
    /// let thresholds = RelevanceThresholds::default();
    /// assert_eq!(thresholds.classify(75.0), RelevanceLevel::High);
    /// assert_eq!(thresholds.classify(74.9), RelevanceLevel::Medium);
    /// assert_eq!(thresholds.classify(10.0), RelevanceLevel::Minimal);
    /// ```
    #[must_use]
    pub fn classify(self, score: f32) -> RelevanceLevel {
        if score >= self.high {
            RelevanceLevel::High
        } else if score >= self.medium {
            RelevanceLevel::Medium
        } else if score >= self.low {
            RelevanceLevel::Low
        } else {
            RelevanceLevel::Minimal
        }
    }
}

/// Parameters of the exponential freshness decay.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FreshnessConfig {
    /// Articles older than this are treated as maximally stale.
    pub max_age_hours: f32,
    /// Age at which the multiplier halves.
    pub half_life_hours: f32,
    /// Floor of the multiplier.
    pub min_multiplier: f32,
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            max_age_hours: 168.0,
            half_life_hours: 24.0,
            min_multiplier: 0.1,
        }
    }
}

impl FreshnessConfig {
    /// Validate the decay parameters.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidFreshness`] when an age is not a positive
    /// finite number or `min_multiplier` lies outside `0.0..=1.0`.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(self.max_age_hours.is_finite() && self.max_age_hours > 0.0) {
            return Err(ConfigError::InvalidFreshness {
                field: "max_age_hours",
            });
        }
        if !(self.half_life_hours.is_finite() && self.half_life_hours > 0.0) {
            return Err(ConfigError::InvalidFreshness {
                field: "half_life_hours",
            });
        }
        if !(0.0..=1.0).contains(&self.min_multiplier) {
            return Err(ConfigError::InvalidFreshness {
                field: "min_multiplier",
            });
        }
        Ok(self)
    }
}

/// Multipliers per publisher reliability tier.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SourceWeights {
    /// Multiplier for [`SourceTier::High`].
    #[cfg_attr(feature = "serde", serde(rename = "high_reliability"))]
    pub high: f32,
    /// Multiplier for [`SourceTier::Medium`].
    #[cfg_attr(feature = "serde", serde(rename = "medium_reliability"))]
    pub medium: f32,
    /// Multiplier for [`SourceTier::Low`].
    #[cfg_attr(feature = "serde", serde(rename = "low_reliability"))]
    pub low: f32,
}

impl Default for SourceWeights {
    fn default() -> Self {
        Self {
            high: 1.5,
            medium: 1.0,
            low: 0.8,
        }
    }
}

impl SourceWeights {
    /// Multiplier for a tier.
    #[must_use]
    pub const fn weight(self, tier: SourceTier) -> f32 {
        match tier {
            SourceTier::High => self.high,
            SourceTier::Medium => self.medium,
            SourceTier::Low => self.low,
        }
    }
}

/// Multipliers per region.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegionalWeights {
    /// Multiplier for [`Region::Czech`].
    pub czech: f32,
    /// Multiplier for [`Region::European`].
    pub european: f32,
    /// Multiplier for [`Region::Global`].
    pub global: f32,
}

impl Default for RegionalWeights {
    fn default() -> Self {
        Self {
            czech: 1.5,
            european: 1.3,
            global: 1.0,
        }
    }
}

impl RegionalWeights {
    /// Multiplier for a region.
    #[must_use]
    pub const fn weight(self, region: Region) -> f32 {
        match region {
            Region::Czech => self.czech,
            Region::European => self.european,
            Region::Global => self.global,
        }
    }
}

/// Fallback values used by keyword scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringDefaults {
    /// Base score for a matched topic missing from the score table.
    pub missing_topic_score: u8,
    /// Keyword score for an article matching no topic.
    pub no_match_score: f32,
    /// Fraction of negative keyword weight subtracted from a topic.
    pub negative_penalty: f32,
}

impl Default for ScoringDefaults {
    fn default() -> Self {
        Self {
            missing_topic_score: DEFAULT_MISSING_TOPIC_SCORE,
            no_match_score: DEFAULT_NO_MATCH_SCORE,
            negative_penalty: DEFAULT_NEGATIVE_PENALTY,
        }
    }
}

impl ScoringDefaults {
    /// Validate the fallbacks.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidDefaults`] when a score leaves
    /// `0..=100` or the penalty is negative or non-finite.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let scores_ok = self.missing_topic_score <= 100
            && (0.0..=100.0).contains(&self.no_match_score);
        let penalty_ok = self.negative_penalty.is_finite() && self.negative_penalty >= 0.0;
        if scores_ok && penalty_ok {
            Ok(self)
        } else {
            Err(ConfigError::InvalidDefaults)
        }
    }
}

/// Complete scoring configuration.
///
/// # Examples
/// ```
/// use newsrank_core::ScoringConfig;
///
/// let config = ScoringConfig::default().validate().expect("defaults are valid");
/// assert_eq!(config.defaults.missing_topic_score, 50);
/// assert_eq!(config.defaults.no_match_score, 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringConfig {
    /// Signal blend weights.
    pub weights: BlendWeights,
    /// Relevance band thresholds.
    pub thresholds: RelevanceThresholds,
    /// Freshness decay parameters.
    pub freshness: FreshnessConfig,
    /// Publisher reliability multipliers.
    pub source_weights: SourceWeights,
    /// Regional multipliers.
    pub regional_weights: RegionalWeights,
    /// Keyword scoring fallbacks.
    pub defaults: ScoringDefaults,
}

impl ScoringConfig {
    /// Validate every section and return a copy.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] raised by a section, or
    /// [`ConfigError::InvalidMultiplier`] for a negative or non-finite source
    /// or regional weight.
    pub fn validate(self) -> Result<Self, ConfigError> {
        self.weights.validate()?;
        self.thresholds.validate()?;
        self.freshness.validate()?;
        self.defaults.validate()?;
        let multipliers = [
            ("source_weights.high_reliability", self.source_weights.high),
            ("source_weights.medium_reliability", self.source_weights.medium),
            ("source_weights.low_reliability", self.source_weights.low),
            ("regional_weights.czech", self.regional_weights.czech),
            ("regional_weights.european", self.regional_weights.european),
            ("regional_weights.global", self.regional_weights.global),
        ];
        if let Some((field, _)) = multipliers
            .iter()
            .find(|(_, value)| !(value.is_finite() && *value >= 0.0))
        {
            return Err(ConfigError::InvalidMultiplier { field });
        }
        Ok(self)
    }
}

/// Errors raised when validating a [`ScoringConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Blend weights were unusable.
    #[error("blend weights must be finite, non-negative, and sum to 1.0 (got {total})")]
    InvalidBlendWeights {
        /// Sum of the supplied weights.
        total: f32,
    },
    /// Thresholds were out of range or not descending.
    #[error("relevance thresholds must satisfy 100 >= high >= medium >= low >= 0")]
    InvalidThresholds,
    /// A freshness parameter was unusable.
    #[error("freshness parameter {field} is out of range")]
    InvalidFreshness {
        /// Offending field.
        field: &'static str,
    },
    /// A source or regional multiplier was unusable.
    #[error("multiplier {field} must be finite and non-negative")]
    InvalidMultiplier {
        /// Offending field.
        field: &'static str,
    },
    /// A scoring fallback was out of range.
    #[error("default scores must lie in 0..=100 and the negative penalty must be non-negative")]
    InvalidDefaults,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_are_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[rstest]
    #[case(0.5, 0.5, 0.5)]
    #[case(0.2, 0.2, 0.2)]
    #[case(-0.1, 0.6, 0.5)]
    #[case(f32::NAN, 0.5, 0.5)]
    fn rejects_bad_blend_weights(#[case] keyword: f32, #[case] semantic: f32, #[case] ai: f32) {
        let weights = BlendWeights {
            keyword,
            semantic,
            ai,
        };
        assert!(matches!(
            weights.validate(),
            Err(ConfigError::InvalidBlendWeights { .. })
        ));
    }

    #[rstest]
    fn blend_renormalises_over_present_signals() {
        let weights = BlendWeights::default();
        let blended = weights.blend(30.0, Some(90.0), None);
        // (0.3 * 30 + 0.4 * 90) / 0.7
        assert!((blended - 64.285_71).abs() < 1e-3);
    }

    #[rstest]
    fn blend_falls_back_to_keyword_when_weights_vanish() {
        let weights = BlendWeights {
            keyword: 0.0,
            semantic: 0.5,
            ai: 0.5,
        };
        assert!((weights.blend(42.0, None, None) - 42.0).abs() < f32::EPSILON);
    }

    #[rstest]
    #[case(100.0, RelevanceLevel::High)]
    #[case(50.0, RelevanceLevel::Medium)]
    #[case(49.99, RelevanceLevel::Low)]
    #[case(25.0, RelevanceLevel::Low)]
    #[case(0.0, RelevanceLevel::Minimal)]
    fn classifies_scores(#[case] score: f32, #[case] expected: RelevanceLevel) {
        assert_eq!(RelevanceThresholds::default().classify(score), expected);
    }

    #[rstest]
    fn rejects_ascending_thresholds() {
        let thresholds = RelevanceThresholds {
            high: 20.0,
            medium: 50.0,
            low: 25.0,
        };
        assert_eq!(thresholds.validate(), Err(ConfigError::InvalidThresholds));
    }

    #[rstest]
    #[case(FreshnessConfig { max_age_hours: 0.0, ..FreshnessConfig::default() }, "max_age_hours")]
    #[case(FreshnessConfig { half_life_hours: -1.0, ..FreshnessConfig::default() }, "half_life_hours")]
    #[case(FreshnessConfig { min_multiplier: 1.5, ..FreshnessConfig::default() }, "min_multiplier")]
    fn rejects_bad_freshness(#[case] config: FreshnessConfig, #[case] expected: &'static str) {
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidFreshness { field: expected })
        );
    }

    #[rstest]
    fn rejects_negative_multiplier() {
        let config = ScoringConfig {
            regional_weights: RegionalWeights {
                czech: -1.0,
                ..RegionalWeights::default()
            },
            ..ScoringConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidMultiplier {
                field: "regional_weights.czech"
            })
        );
    }

    #[rstest]
    fn weights_lookup_by_enum() {
        assert!((SourceWeights::default().weight(SourceTier::Low) - 0.8).abs() < f32::EPSILON);
        assert!((RegionalWeights::default().weight(Region::European) - 1.3).abs() < f32::EPSILON);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn partial_json_keeps_defaults() {
        let config: ScoringConfig = serde_json::from_str(
            r#"{"weights":{"keyword_score":0.5,"semantic_score":0.5,"ai_score":0.0},
                "freshness":{"half_life_hours":12}}"#,
        )
        .unwrap();
        assert!((config.weights.keyword - 0.5).abs() < f32::EPSILON);
        assert!((config.freshness.half_life_hours - 12.0).abs() < f32::EPSILON);
        assert!((config.freshness.max_age_hours - 168.0).abs() < f32::EPSILON);
        assert_eq!(config.thresholds, RelevanceThresholds::default());
        assert!(config.validate().is_ok());
    }
}
