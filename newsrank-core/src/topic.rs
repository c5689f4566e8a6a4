//! Topic configuration: keyword lists and personalised base scores.
//!
//! [`TopicKeywordSet`] tells the matcher which phrases signal (or count
//! against) each topic, and [`TopicScoreTable`] records how much the reader
//! cares about each topic. Both are built once and shared read-only.

use std::collections::HashMap;

use thiserror::Error;

/// Highest base score a topic can carry.
pub const MAX_TOPIC_SCORE: u8 = 100;

/// A single keyword phrase, stored lowercase with its word count.
///
/// Longer phrases are more specific, so each contributes one unit of match
/// strength per word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    phrase: String,
    weight: u32,
}

impl Keyword {
    /// Build a keyword from a phrase.
    ///
    /// # Errors
    /// Returns [`TopicKeywordError::BlankKeyword`] when the phrase has no
    /// words.
    pub fn new(topic: &str, phrase: &str) -> Result<Self, TopicKeywordError> {
        if phrase.trim().is_empty() {
            return Err(TopicKeywordError::BlankKeyword {
                topic: topic.to_owned(),
            });
        }
        Ok(Self::from_phrase(phrase))
    }

    fn from_phrase(phrase: &str) -> Self {
        let words = phrase.split_whitespace().count();
        Self {
            phrase: phrase.to_lowercase(),
            weight: u32::try_from(words).unwrap_or(u32::MAX),
        }
    }

    /// Lowercased phrase used for substring matching.
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Number of whitespace-separated words in the phrase.
    #[must_use]
    pub const fn weight(&self) -> u32 {
        self.weight
    }
}

/// Positive and negative keywords for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicKeywords {
    name: String,
    positive: Vec<Keyword>,
    negative: Vec<Keyword>,
}

impl TopicKeywords {
    /// Validate and build a topic entry.
    ///
    /// # Errors
    /// Returns [`TopicKeywordError`] for a blank topic name or keyword.
    pub fn new<P, N>(name: &str, positive: P, negative: N) -> Result<Self, TopicKeywordError>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        if name.trim().is_empty() {
            return Err(TopicKeywordError::BlankTopic);
        }
        let positive = positive
            .into_iter()
            .map(|phrase| Keyword::new(name, phrase.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let negative = negative
            .into_iter()
            .map(|phrase| Keyword::new(name, phrase.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.to_owned(),
            positive,
            negative,
        })
    }

    fn from_static(name: &str, positive: &[&str], negative: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            positive: positive.iter().map(|p| Keyword::from_phrase(p)).collect(),
            negative: negative.iter().map(|p| Keyword::from_phrase(p)).collect(),
        }
    }

    /// Topic name as configured.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Keywords that signal the topic.
    #[must_use]
    pub fn positive(&self) -> &[Keyword] {
        &self.positive
    }

    /// Keywords that count against the topic.
    #[must_use]
    pub fn negative(&self) -> &[Keyword] {
        &self.negative
    }
}

/// Errors raised while building keyword configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TopicKeywordError {
    /// A topic name was empty or whitespace.
    #[error("topic name must not be blank")]
    BlankTopic,
    /// A keyword phrase was empty or whitespace.
    #[error("topic '{topic}' contains a blank keyword")]
    BlankKeyword {
        /// Topic owning the blank keyword.
        topic: String,
    },
}

/// Ordered keyword configuration for every scored topic.
///
/// Topic names are unique; inserting an existing name replaces its keywords
/// in place so iteration order stays stable.
///
/// # Examples
/// ```
/// use newsrank_core::{TopicKeywordSet, TopicKeywords};
///
/// # fn main() -> Result<(), newsrank_core::TopicKeywordError> {
/// let set = TopicKeywordSet::new()
///     .with_topic(TopicKeywords::new("Rust", ["rust", "borrow checker"], ["game"])?);
/// let topic = set.get("Rust").expect("configured topic");
/// assert_eq!(topic.positive()[1].weight(), 2);
/// assert!(TopicKeywordSet::default().get("Cybersecurity").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicKeywordSet {
    topics: Vec<TopicKeywords>,
}

impl TopicKeywordSet {
    /// Create an empty keyword set.
    #[must_use]
    pub const fn new() -> Self {
        Self { topics: Vec::new() }
    }

    /// Insert a topic, replacing any entry with the same name.
    pub fn insert(&mut self, topic: TopicKeywords) {
        match self.topics.iter_mut().find(|t| t.name == topic.name) {
            Some(existing) => *existing = topic,
            None => self.topics.push(topic),
        }
    }

    /// Insert a topic while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_topic(mut self, topic: TopicKeywords) -> Self {
        self.insert(topic);
        self
    }

    /// Look up a topic by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TopicKeywords> {
        self.topics.iter().find(|t| t.name == name)
    }

    /// Iterate topics in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TopicKeywords> {
        self.topics.iter()
    }

    /// Number of configured topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Report whether no topic is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl<'a> IntoIterator for &'a TopicKeywordSet {
    type Item = &'a TopicKeywords;
    type IntoIter = std::slice::Iter<'a, TopicKeywords>;

    fn into_iter(self) -> Self::IntoIter {
        self.topics.iter()
    }
}

impl Default for TopicKeywordSet {
    /// The compiled-in catalogue of high-value topics.
    fn default() -> Self {
        let topics = vec![
            TopicKeywords::from_static(
                "Problem Solving & Critical Thinking",
                &[
                    "critical thinking",
                    "problem solving",
                    "analytical",
                    "logic",
                    "reasoning",
                    "methodology",
                    "analysis",
                    "systematic",
                ],
                &["opinion", "speculation", "rumor"],
            ),
            TopicKeywords::from_static(
                "Artificial Intelligence",
                &[
                    "artificial intelligence",
                    "AI",
                    "machine learning",
                    "ML",
                    "deep learning",
                    "neural networks",
                    "GPT",
                    "LLM",
                    "transformers",
                ],
                &["AI hype", "AI bubble", "overhyped"],
            ),
            TopicKeywords::from_static(
                "Machine Learning",
                &[
                    "machine learning",
                    "ML",
                    "algorithms",
                    "models",
                    "training",
                    "inference",
                    "datasets",
                    "supervised",
                    "unsupervised",
                ],
                &["basic tutorial", "beginner guide"],
            ),
            TopicKeywords::from_static(
                "Investigative Journalism",
                &[
                    "investigation",
                    "investigative",
                    "expose",
                    "revealed",
                    "uncovered",
                    "leaked",
                    "documents",
                    "whistleblower",
                    "exclusive",
                ],
                &["gossip", "rumor", "unverified"],
            ),
            TopicKeywords::from_static(
                "Technology Innovation",
                &[
                    "innovation",
                    "breakthrough",
                    "revolutionary",
                    "cutting-edge",
                    "novel",
                    "advancement",
                    "pioneering",
                ],
                &["incremental", "minor update", "cosmetic"],
            ),
            TopicKeywords::from_static(
                "Computer Science",
                &[
                    "computer science",
                    "algorithms",
                    "data structures",
                    "computational",
                    "programming",
                    "software engineering",
                    "systems",
                ],
                &["basic programming", "hello world"],
            ),
            TopicKeywords::from_static(
                "European Politics",
                &[
                    "european union",
                    "EU",
                    "european parliament",
                    "brussels",
                    "european politics",
                    "eurozone",
                    "schengen",
                ],
                &["celebrity politics", "gossip"],
            ),
            TopicKeywords::from_static(
                "Cybersecurity",
                &[
                    "cybersecurity",
                    "security",
                    "vulnerability",
                    "exploit",
                    "breach",
                    "malware",
                    "encryption",
                    "privacy",
                    "zero-day",
                ],
                &["security theater", "fear mongering"],
            ),
        ];
        Self { topics }
    }
}

/// Personalised base score per topic, in `0..=100`.
///
/// Scores above [`MAX_TOPIC_SCORE`] are clamped on insertion.
///
/// # Examples
/// ```
/// use newsrank_core::TopicScoreTable;
///
/// let table: TopicScoreTable = [("Cybersecurity".to_owned(), 90_u8)].into_iter().collect();
/// assert_eq!(table.get("Cybersecurity"), Some(90));
/// assert_eq!(table.get("Gardening"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopicScoreTable {
    scores: HashMap<String, u8>,
}

impl TopicScoreTable {
    /// Create an empty table; every topic then uses the default base score.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a topic score, clamping to [`MAX_TOPIC_SCORE`].
    pub fn insert(&mut self, topic: impl Into<String>, score: u8) {
        self.scores.insert(topic.into(), score.min(MAX_TOPIC_SCORE));
    }

    /// Add a topic score while returning `self` for chaining.
    #[must_use]
    pub fn with_score(mut self, topic: impl Into<String>, score: u8) -> Self {
        self.insert(topic, score);
        self
    }

    /// Return the configured score for a topic, if any.
    #[must_use]
    pub fn get(&self, topic: &str) -> Option<u8> {
        self.scores.get(topic).copied()
    }

    /// Number of topics with a configured score.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Report whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u8)> for TopicScoreTable {
    fn from_iter<I: IntoIterator<Item = (S, u8)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (topic, score) in iter {
            table.insert(topic, score);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ai", 1)]
    #[case("machine learning", 2)]
    #[case("  software   engineering ", 2)]
    fn keyword_weight_counts_words(#[case] phrase: &str, #[case] expected: u32) {
        let keyword = Keyword::new("t", phrase).unwrap();
        assert_eq!(keyword.weight(), expected);
    }

    #[rstest]
    fn keyword_is_lowercased() {
        let keyword = Keyword::new("t", "LLM").unwrap();
        assert_eq!(keyword.phrase(), "llm");
    }

    #[rstest]
    fn blank_keyword_is_rejected() {
        let err = TopicKeywords::new("Rust", ["rust", " "], [] as [&str; 0]).unwrap_err();
        assert_eq!(
            err,
            TopicKeywordError::BlankKeyword {
                topic: "Rust".into()
            }
        );
    }

    #[rstest]
    fn blank_topic_is_rejected() {
        let err = TopicKeywords::new("", ["rust"], [] as [&str; 0]).unwrap_err();
        assert_eq!(err, TopicKeywordError::BlankTopic);
    }

    #[rstest]
    fn insert_replaces_in_place() {
        let mut set = TopicKeywordSet::new()
            .with_topic(TopicKeywords::new("A", ["a1"], [] as [&str; 0]).unwrap())
            .with_topic(TopicKeywords::new("B", ["b1"], [] as [&str; 0]).unwrap());
        set.insert(TopicKeywords::new("A", ["a2"], [] as [&str; 0]).unwrap());

        let names: Vec<_> = set.iter().map(TopicKeywords::name).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(set.get("A").unwrap().positive()[0].phrase(), "a2");
    }

    #[rstest]
    fn default_catalogue_has_eight_topics() {
        let set = TopicKeywordSet::default();
        assert_eq!(set.len(), 8);
        assert!(
            set.iter()
                .flat_map(|t| t.positive().iter().chain(t.negative()))
                .all(|k| k.weight() > 0 && k.phrase() == k.phrase().to_lowercase())
        );
    }

    #[rstest]
    fn score_table_clamps() {
        let table = TopicScoreTable::new().with_score("A", 250);
        assert_eq!(table.get("A"), Some(MAX_TOPIC_SCORE));
    }
}
