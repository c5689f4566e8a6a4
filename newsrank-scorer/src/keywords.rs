//! Diagnostic keyword extraction.
//!
//! Extraction is not part of the scoring formula. It surfaces the salient
//! words of an article for logging and inspection.

use std::sync::LazyLock;

use regex::{Matches, Regex};

/// Tokens shorter than this many characters are discarded.
const MIN_TOKEN_CHARS: usize = 3;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "can", "this", "that", "these", "those",
];

#[expect(
    clippy::expect_used,
    reason = "the word pattern is a compile-time constant"
)]
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Restartable view over the keywords of a borrowed text.
///
/// Each call to [`KeywordExtractor::iter`] starts a fresh, lazy pass over the
/// text, yielding lowercase word tokens longer than two characters that are
/// not stop words.
///
/// # Examples
/// ```
/// use newsrank_scorer::KeywordExtractor;
///
/// let extractor = KeywordExtractor::new("The Rust compiler is written in Rust");
/// let words: Vec<String> = extractor.iter().collect();
/// assert_eq!(words, ["rust", "compiler", "written", "rust"]);
/// assert_eq!(extractor.iter().count(), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeywordExtractor<'t> {
    text: &'t str,
}

impl<'t> KeywordExtractor<'t> {
    /// Wrap `text` without tokenising it yet.
    #[must_use]
    pub const fn new(text: &'t str) -> Self {
        Self { text }
    }

    /// Start a new pass over the keywords.
    #[must_use]
    pub fn iter(&self) -> KeywordIter<'t> {
        KeywordIter {
            words: WORD.find_iter(self.text),
        }
    }
}

impl<'t> IntoIterator for &KeywordExtractor<'t> {
    type Item = String;
    type IntoIter = KeywordIter<'t>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`KeywordExtractor::iter`].
#[derive(Debug)]
pub struct KeywordIter<'t> {
    words: Matches<'static, 't>,
}

impl Iterator for KeywordIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.words
            .by_ref()
            .map(|word| word.as_str().to_lowercase())
            .find(|word| is_keyword(word))
    }
}

fn is_keyword(word: &str) -> bool {
    word.chars().count() >= MIN_TOKEN_CHARS && !STOP_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", &[])]
    #[case("a an the of", &[])]
    #[case("AI is big", &["big"])]
    #[case("Zero-day EXPLOIT found", &["zero", "day", "exploit", "found"])]
    #[case("Příliš žluťoučký kůň", &["příliš", "žluťoučký", "kůň"])]
    #[case("those were the days", &["days"])]
    fn extracts_expected_tokens(#[case] text: &str, #[case] expected: &[&str]) {
        let words: Vec<String> = KeywordExtractor::new(text).iter().collect();
        assert_eq!(words, expected);
    }

    #[rstest]
    fn passes_are_independent() {
        let extractor = KeywordExtractor::new("machine learning models");
        let mut first = extractor.iter();
        assert_eq!(first.next().as_deref(), Some("machine"));
        let second: Vec<String> = (&extractor).into_iter().collect();
        assert_eq!(second, ["machine", "learning", "models"]);
        assert_eq!(first.next().as_deref(), Some("learning"));
    }
}
