//! Weighted keyword presence per topic.

use newsrank_core::{Article, DEFAULT_NEGATIVE_PENALTY, Keyword, TopicKeywordSet, TopicKeywords};

/// Net match strength of one topic against one article.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicMatch {
    /// Topic name as configured.
    pub topic: String,
    /// `max(0, positive - penalty * negative)`.
    pub strength: f32,
}

/// Scores keyword presence for every configured topic.
///
/// Matching is literal and case-insensitive: a keyword counts once when its
/// lowercase phrase occurs anywhere in the article's full text, contributing
/// its word count. Frequency is ignored.
///
/// # Examples
/// ```
/// use newsrank_core::{Article, TopicKeywordSet, TopicKeywords};
/// use newsrank_scorer::TopicMatcher;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let keywords = TopicKeywordSet::new()
///     .with_topic(TopicKeywords::new("Security", ["zero-day", "data breach"], ["rumor"])?);
/// let article = Article::new("1", "Data breach at bank", "No rumor here.", 0)?;
///
/// let matches = TopicMatcher::new(&keywords).match_article(&article);
/// assert_eq!(matches.first().map(|m| m.strength), Some(1.5));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TopicMatcher<'k> {
    keywords: &'k TopicKeywordSet,
    negative_penalty: f32,
}

impl<'k> TopicMatcher<'k> {
    /// Build a matcher using the default negative penalty.
    #[must_use]
    pub const fn new(keywords: &'k TopicKeywordSet) -> Self {
        Self {
            keywords,
            negative_penalty: DEFAULT_NEGATIVE_PENALTY,
        }
    }

    /// Override the fraction of negative weight subtracted per topic.
    #[must_use]
    pub const fn with_negative_penalty(mut self, penalty: f32) -> Self {
        self.negative_penalty = penalty;
        self
    }

    /// Match every topic against `article`, in configuration order.
    #[must_use]
    pub fn match_article(&self, article: &Article) -> Vec<TopicMatch> {
        let full_text = article.full_text();
        self.keywords
            .iter()
            .map(|topic| TopicMatch {
                topic: topic.name().to_owned(),
                strength: self.topic_strength(topic, &full_text),
            })
            .collect()
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "net strength subtracts the penalised negative weight"
    )]
    fn topic_strength(&self, topic: &TopicKeywords, full_text: &str) -> f32 {
        let positive = present_weight(topic.positive(), full_text);
        let negative = present_weight(topic.negative(), full_text);
        (positive - self.negative_penalty * negative).max(0.0)
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "keyword word counts are far below f32 precision limits"
)]
fn present_weight(keywords: &[Keyword], full_text: &str) -> f32 {
    let total: u32 = keywords
        .iter()
        .filter(|keyword| full_text.contains(keyword.phrase()))
        .map(Keyword::weight)
        .sum();
    total as f32
}
