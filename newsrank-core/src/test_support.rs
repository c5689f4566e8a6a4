//! Test-only fixtures shared by unit and behaviour tests.

use crate::{Article, Scorer, TopicKeywordError, TopicKeywordSet, TopicKeywords, sanitise_score};

/// Fixed publication instant used by fixtures (2023-11-14T22:13:20Z).
pub const FIXTURE_NOW: i64 = 1_700_000_000;

/// Build an article published at [`FIXTURE_NOW`] with the given text.
///
/// # Panics
/// Panics when `id` is blank or both `title` and `content` are blank.
#[must_use]
pub fn article(id: &str, title: &str, content: &str) -> Article {
    Article::new(id, title, content, FIXTURE_NOW).expect("fixture article must be valid")
}

/// Build an article published `hours` before [`FIXTURE_NOW`].
///
/// # Panics
/// Panics under the same conditions as [`article`].
#[must_use]
pub fn article_aged(id: &str, title: &str, content: &str, hours: i64) -> Article {
    let mut built = article(id, title, content);
    built.published = FIXTURE_NOW - hours * 3_600;
    built
}

/// Build a keyword set holding exactly one topic.
///
/// # Errors
/// Propagates [`TopicKeywordError`] for blank names or keywords.
pub fn single_topic(
    name: &str,
    positive: &[&str],
    negative: &[&str],
) -> Result<TopicKeywordSet, TopicKeywordError> {
    Ok(TopicKeywordSet::new().with_topic(TopicKeywords::new(
        name,
        positive.iter().copied(),
        negative.iter().copied(),
    )?))
}

/// `Scorer` returning the same score for every article.
#[derive(Debug, Copy, Clone, Default)]
pub struct FixedScorer(pub f32);

impl Scorer for FixedScorer {
    fn score(&self, _article: &Article) -> f32 {
        sanitise_score(self.0)
    }
}
