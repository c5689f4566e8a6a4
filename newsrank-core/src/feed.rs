//! Conversion of pre-fetched feed-reader stream items into [`Article`]s.
//!
//! Items follow the Google Reader stream layout served by feed aggregators.
//! Fetching them is the caller's concern; this module only decodes an item
//! that has already been retrieved.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Article, ArticleError};

const UNTITLED: &str = "Untitled";
const UNKNOWN_SOURCE: &str = "Unknown";
const LABEL_MARKER: &str = "label";

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("HTML tag pattern is valid"));

/// Text payload wrapper used by `summary` and `content`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedContent {
    /// HTML body.
    #[serde(default)]
    pub content: String,
}

/// Hyperlink entry in `canonical` or `alternate`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedLink {
    /// Link target.
    #[serde(default)]
    pub href: String,
}

/// Publishing feed metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedOrigin {
    /// Feed title, used as the source name.
    #[serde(default)]
    pub title: Option<String>,
}

/// One item of a stream-contents response.
///
/// # Examples
/// ```
/// use newsrank_core::FeedItem;
///
/// let item: FeedItem = serde_json::from_str(r#"{
///     "id": "tag:google.com,2005:reader/item/1",
///     "title": "Zero-day patched",
///     "summary": {"content": "<p>Vendors shipped a <b>fix</b>.</p>"},
///     "alternate": [{"href": "https://example.org/a"}],
///     "origin": {"title": "Security Weekly"},
///     "published": 1700000000,
///     "categories": ["user/-/label/Security", "user/-/state/com.google/read"]
/// }"#).expect("valid item");
///
/// let article = item.into_article(0).expect("convertible item");
/// assert_eq!(article.content, "Vendors shipped a fix.");
/// assert_eq!(article.source, "Security Weekly");
/// assert_eq!(article.categories, vec!["Security".to_owned()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedItem {
    /// Stream item identifier.
    #[serde(default)]
    pub id: String,
    /// Headline; absent titles become `"Untitled"`.
    #[serde(default)]
    pub title: Option<String>,
    /// Preferred body payload.
    #[serde(default)]
    pub summary: Option<FeedContent>,
    /// Fallback body payload.
    #[serde(default)]
    pub content: Option<FeedContent>,
    /// Canonical links, preferred over `alternate`.
    #[serde(default)]
    pub canonical: Option<Vec<FeedLink>>,
    /// Alternate links.
    #[serde(default)]
    pub alternate: Option<Vec<FeedLink>>,
    /// Publishing feed.
    #[serde(default)]
    pub origin: Option<FeedOrigin>,
    /// Publication time in epoch seconds.
    #[serde(default)]
    pub published: Option<i64>,
    /// Stream category identifiers.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Reasons a feed item cannot become an article.
#[derive(Debug, Error)]
pub enum FeedItemError {
    /// The JSON value did not have the shape of a stream item.
    #[error("feed item could not be decoded")]
    Decode(#[source] serde_json::Error),
    /// The decoded item failed article validation.
    #[error(transparent)]
    Invalid(#[from] ArticleError),
}

impl FeedItem {
    /// Decode a raw JSON value.
    ///
    /// # Errors
    /// Returns [`FeedItemError::Decode`] when the value does not match the
    /// stream item layout.
    pub fn from_value(value: serde_json::Value) -> Result<Self, FeedItemError> {
        serde_json::from_value(value).map_err(FeedItemError::Decode)
    }

    /// Convert into a validated [`Article`].
    ///
    /// HTML tags are stripped from the body and `now` stands in for a
    /// missing publication time.
    ///
    /// # Errors
    /// Returns [`FeedItemError::Invalid`] when the resulting article fails
    /// [`Article::validate`].
    pub fn into_article(self, now: i64) -> Result<Article, FeedItemError> {
        let body = self
            .summary
            .or(self.content)
            .map(|payload| strip_html(&payload.content))
            .unwrap_or_default();
        let links = self.canonical.or(self.alternate).unwrap_or_default();
        let url = links
            .into_iter()
            .next()
            .map(|link| link.href)
            .unwrap_or_default();
        let source = self
            .origin
            .and_then(|origin| origin.title)
            .unwrap_or_else(|| UNKNOWN_SOURCE.to_owned());
        let categories = self
            .categories
            .iter()
            .filter(|category| category.contains(LABEL_MARKER))
            .filter_map(|category| category.rsplit('/').next())
            .map(str::to_owned);

        let article = Article::new(
            self.id,
            self.title.unwrap_or_else(|| UNTITLED.to_owned()),
            body,
            self.published.unwrap_or(now),
        )?
        .with_source(source, url)
        .with_categories(categories);
        Ok(article)
    }
}

/// Remove anything that looks like an HTML tag.
///
/// # Examples
/// ```
/// use newsrank_core::strip_html;
///
/// assert_eq!(strip_html("<p>Hello <em>world</em></p>"), "Hello world");
/// ```
#[must_use]
pub fn strip_html(html: &str) -> String {
    HTML_TAG.replace_all(html, "").into_owned()
}
