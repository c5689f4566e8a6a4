//! News articles submitted for scoring.

use thiserror::Error;

/// A news article as delivered by the feed aggregator.
///
/// Articles are immutable once constructed and borrowed by the scorer for
/// the duration of a scoring pass.
///
/// # Examples
/// ```
/// use newsrank_core::Article;
///
/// # fn main() -> Result<(), newsrank_core::ArticleError> {
/// let article = Article::new(
///     "tag:feed/1",
///     "Neural networks at scale",
///     "A look at training large models.",
///     1_700_000_000,
/// )?
/// .with_source("Reuters", "https://example.org/1")
/// .with_categories(["tech"]);
///
/// assert_eq!(article.source, "Reuters");
/// assert_eq!(article.categories, vec!["tech".to_owned()]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Article {
    /// Identifier unique within a feed.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Plain-text body.
    pub content: String,
    /// Canonical link to the article.
    #[cfg_attr(feature = "serde", serde(default))]
    pub url: String,
    /// Publisher name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: String,
    /// Publication time in seconds since the Unix epoch.
    pub published: i64,
    /// Category labels in feed order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub categories: Vec<String>,
}

/// Reasons an article cannot be scored.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArticleError {
    /// The identifier was empty or whitespace.
    #[error("article identifier must not be blank")]
    MissingId,
    /// Neither title nor body carried any text.
    #[error("article {id} has neither a title nor body text")]
    EmptyText {
        /// Identifier of the offending article.
        id: String,
    },
    /// The publication timestamp predates the Unix epoch.
    #[error("article {id} has invalid publication timestamp {published}")]
    InvalidTimestamp {
        /// Identifier of the offending article.
        id: String,
        /// Timestamp as supplied.
        published: i64,
    },
}

impl Article {
    /// Validate and construct an [`Article`] without source metadata.
    ///
    /// # Errors
    /// Returns [`ArticleError`] when [`Article::validate`] rejects the input.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        published: i64,
    ) -> Result<Self, ArticleError> {
        let article = Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            url: String::new(),
            source: String::new(),
            published,
            categories: Vec::new(),
        };
        article.validate()?;
        Ok(article)
    }

    /// Attach publisher name and link.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>, url: impl Into<String>) -> Self {
        self.source = source.into();
        self.url = url.into();
        self
    }

    /// Replace the category labels.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Check the invariants the scorer relies on.
    ///
    /// Fields are public, so batch scoring re-validates every article
    /// rather than trusting the constructor.
    ///
    /// # Errors
    /// - [`ArticleError::MissingId`] for a blank identifier.
    /// - [`ArticleError::EmptyText`] when title and body are both blank.
    /// - [`ArticleError::InvalidTimestamp`] for negative timestamps.
    pub fn validate(&self) -> Result<(), ArticleError> {
        if self.id.trim().is_empty() {
            return Err(ArticleError::MissingId);
        }
        if self.title.trim().is_empty() && self.content.trim().is_empty() {
            return Err(ArticleError::EmptyText {
                id: self.id.clone(),
            });
        }
        if self.published < 0 {
            return Err(ArticleError::InvalidTimestamp {
                id: self.id.clone(),
                published: self.published,
            });
        }
        Ok(())
    }

    /// Lowercased `title + " " + content`, the haystack for keyword matching.
    #[must_use]
    pub fn full_text(&self) -> String {
        format!("{} {}", self.title, self.content).to_lowercase()
    }
}
