//! Keyword Extraction by raw frequency.
//!
//! Tokens are ASCII letter runs (with hyphens) of at least two characters.
//! Ranking is by count, ties keep first-occurrence order, so the same text
//! always yields the same list.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Maximum number of keywords kept per document
pub const MAX_KEYWORDS: usize = 20;

/// Words never ranked as keywords
pub const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "from", "are", "into", "your", "will", "shall",
    "must", "should", "our", "their", "a", "an", "of", "to", "in", "on", "by", "or", "be", "as",
    "is", "it",
];

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z][a-z\-]+").expect("Invalid regex: keyword token"));

/// A ranked keyword with its raw count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCount {
    pub keyword: String,
    pub frequency: usize,
}

/// Frequency-ranked keyword extractor
pub struct KeywordExtractor {
    max_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create an extractor that keeps the top [`MAX_KEYWORDS`]
    pub fn new() -> Self {
        Self {
            max_keywords: MAX_KEYWORDS,
        }
    }

    fn is_stopword(word: &str) -> bool {
        STOPWORDS.contains(&word)
    }

    /// Lowercase and tokenize, dropping stopwords
    fn tokenize(text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        TOKEN
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|token| !Self::is_stopword(token))
            .map(str::to_string)
            .collect()
    }

    /// Ranked keywords with their frequencies
    pub fn extract(&self, text: &str) -> Vec<KeywordCount> {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<KeywordCount> = Vec::new();

        for token in Self::tokenize(text) {
            match positions.get(&token) {
                Some(&idx) => counts[idx].frequency += 1,
                None => {
                    positions.insert(token.clone(), counts.len());
                    counts.push(KeywordCount {
                        keyword: token,
                        frequency: 1,
                    });
                }
            }
        }

        // sort_by is stable: equal counts stay in insertion order
        counts.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        counts.truncate(self.max_keywords);
        counts
    }

    /// Ranked keywords as plain strings
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.extract(text).into_iter().map(|k| k.keyword).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_ranking() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract("cloud security cloud migration cloud security");

        assert_eq!(keywords[0].keyword, "cloud");
        assert_eq!(keywords[0].frequency, 3);
        assert_eq!(keywords[1].keyword, "security");
        assert_eq!(keywords[2].keyword, "migration");
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract_keywords("zeta alpha mid alpha zeta mid");

        assert_eq!(keywords, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_stopword_filtering() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract_keywords("The vendor shall and must be for the service");

        assert_eq!(keywords, vec!["vendor", "service"]);
    }

    #[test]
    fn test_hyphenated_and_case() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract_keywords("Cloud-Native CLOUD-native x 42 y-axis");

        assert_eq!(keywords, vec!["cloud-native", "y-axis"]);
    }

    #[test]
    fn test_single_letters_are_not_tokens() {
        let extractor = KeywordExtractor::new();
        assert!(extractor.extract_keywords("a b c d e f").is_empty());
    }

    #[test]
    fn test_caps_at_twenty() {
        let extractor = KeywordExtractor::new();
        let text: String = (0..30)
            .map(|i| format!("word{} ", "x".repeat(i + 1)))
            .collect();
        let keywords = extractor.extract_keywords(&text);

        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "wordx");
    }

    #[test]
    fn test_empty_text() {
        let extractor = KeywordExtractor::new();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("   ").is_empty());
    }
}
