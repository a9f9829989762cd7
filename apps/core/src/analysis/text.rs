//! Tokenizer/Normalizer.
//!
//! Cleans raw RFx text and splits it into lines, words and paragraph sections.
//! Section splitting is a plain blank-line chunker; headings are not detected.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// NOTE: expect() is acceptable for literal patterns compiled once at startup
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("Invalid regex: paragraph break"));

/// Raw text after carriage-return stripping, with its derived line and word views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// The input with every `\r` removed
    pub text: String,
    /// Non-blank lines, trimmed, in order
    pub lines: Vec<String>,
    /// Number of whitespace-delimited words
    pub word_count: usize,
}

/// One labelled paragraph chunk of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// `"Section <n>"`, 1-indexed in order of appearance
    pub label: String,
    pub text: String,
}

/// Strip carriage returns and derive lines and word count.
pub fn normalize(raw: &str) -> NormalizedText {
    let text = raw.replace('\r', "");
    let lines = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    let word_count = text.split_whitespace().count();

    NormalizedText {
        text,
        lines,
        word_count,
    }
}

/// Split text into blank-line-delimited sections labelled `Section 1..n`.
///
/// Chunks that are empty once trimmed are skipped and do not consume a number.
pub fn split_sections(text: &str) -> Vec<Section> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .enumerate()
        .map(|(i, chunk)| Section {
            label: format!("Section {}", i + 1),
            text: chunk.to_string(),
        })
        .collect()
}

/// First `max_chars` characters of `text`.
pub(crate) fn take_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_carriage_returns() {
        let normalized = normalize("Line one\r\n\r\n  Line two  \r\n");

        assert_eq!(normalized.text, "Line one\n\n  Line two  \n");
        assert_eq!(normalized.lines, vec!["Line one", "Line two"]);
        assert_eq!(normalized.word_count, 4);
    }

    #[test]
    fn test_normalize_empty() {
        let normalized = normalize("   \n\t ");
        assert!(normalized.lines.is_empty());
        assert_eq!(normalized.word_count, 0);
    }

    #[test]
    fn test_sections_split_on_blank_lines() {
        let sections = split_sections("Intro text\n\nRequirements:\nMust do X\n\n\n  \nClosing");

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].label, "Section 1");
        assert_eq!(sections[0].text, "Intro text");
        assert_eq!(sections[1].text, "Requirements:\nMust do X");
        assert_eq!(sections[2].label, "Section 3");
        assert_eq!(sections[2].text, "Closing");
    }

    #[test]
    fn test_sections_whitespace_only() {
        assert!(split_sections("").is_empty());
        assert!(split_sections(" \n \n\n ").is_empty());
    }

    #[test]
    fn test_take_chars_is_char_based() {
        assert_eq!(take_chars("héllo", 2), "hé");
        assert_eq!(take_chars("abc", 10), "abc");
        assert_eq!(take_chars("abc", 0), "");
    }
}
