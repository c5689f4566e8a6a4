//! Score articles for relevance.
//!
//! The `Scorer` trait assigns a relevance score to an
//! [`Article`](crate::Article).

use crate::Article;

/// Highest relevance score.
pub const MAX_SCORE: f32 = 100.0;

/// Calculate a relevance score for an article.
///
/// Higher scores indicate a better match with the reader's interests.
/// Implementations must be thread-safe (`Send` + `Sync`) so batches can be
/// scored across threads against shared configuration.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Return values in the range `0.0..=100.0`.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use newsrank_core::{Article, Scorer};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(&self, _article: &Article) -> f32 {
///         Self::sanitise(140.0)
///     }
/// }
///
/// let article = Article::new("1", "Headline", "", 0).expect("valid article");
/// assert_eq!(FlatScorer.score(&article), 100.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `article`.
    fn score(&self, article: &Article) -> f32;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=100.0`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        sanitise_score(score)
    }
}

/// Clamp a raw score into `0.0..=100.0`, mapping non-finite values to `0.0`.
///
/// # Examples
/// ```
/// use newsrank_core::sanitise_score;
///
/// assert_eq!(sanitise_score(f32::NAN), 0.0);
/// assert_eq!(sanitise_score(-3.0), 0.0);
/// assert_eq!(sanitise_score(250.0), 100.0);
/// ```
#[must_use]
pub fn sanitise_score(score: f32) -> f32 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, MAX_SCORE)
}
