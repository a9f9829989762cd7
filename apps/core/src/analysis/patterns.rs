//! Pattern Extractors.
//!
//! Each extractor is an anchor phrase, a capture window and a split rule,
//! applied to the whole normalized text. None of them fail: a missing anchor
//! yields `None` or an empty list.
//!
//! - due date: `due date`, then a run of date-like characters on the same line
//! - budget: `budget`, then a run of amount-like characters on the same line
//! - evaluation: `evaluation criteria`, 1200 chars, split on newline/`N.`/`-`/`•`, 8 items
//! - requirements: `must`/`shall` per line or sentence start, 120 trailing chars
//!   of the same sentence, 12 items
//! - goals: `objective(s)`, `goal(s)`, `purpose`, `outcome(s)` in that order,
//!   800 chars, split on newline/`.`/`;`/`-`, 6 items; otherwise the first
//!   section split on `.`/newline, 4 items

use regex::Regex;
use std::sync::LazyLock;

use super::text::{take_chars, Section};

/// Characters scanned after the evaluation-criteria anchor
pub const EVALUATION_WINDOW: usize = 1200;
/// Maximum evaluation criteria kept
pub const MAX_EVALUATION_ITEMS: usize = 8;
/// Characters kept after a `must`/`shall` keyword
pub const REQUIREMENT_TAIL: usize = 120;
/// Maximum mandatory requirements kept
pub const MAX_REQUIREMENTS: usize = 12;
/// Characters scanned after a goal anchor
pub const GOALS_WINDOW: usize = 800;
/// Maximum goals kept when an anchor phrase is found
pub const MAX_GOALS: usize = 6;
/// Maximum goals kept when falling back to the first section
pub const MAX_FALLBACK_GOALS: usize = 4;

static DUE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)due\s*date[:\-\s]*([A-Za-z0-9_ \t,/\-]+)").expect("Invalid regex: due date")
});

static BUDGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)budget[:\-\s]*([$A-Za-z0-9_ \t,.]+)").expect("Invalid regex: budget")
});

static EVALUATION_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)evaluation\s*criteria[\s:]*").expect("Invalid regex: evaluation anchor")
});

static EVALUATION_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n|[0-9]+\.|-|•").expect("Invalid regex: evaluation split")
});

// A sentence ends at terminal punctuation or a blank line; single line breaks
// stay inside it so hard-wrapped clauses are kept whole
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?]\s+|\n\s*\n").expect("Invalid regex: sentence break")
});

static OBLIGATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:must|shall)\s+").expect("Invalid regex: obligation"));

// Priority order matters: the first anchor present anywhere wins
static GOAL_ANCHORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)objectives?[\s:]*").expect("Invalid regex: objective anchor"),
        Regex::new(r"(?i)goals?[\s:]*").expect("Invalid regex: goal anchor"),
        Regex::new(r"(?i)purpose[\s:]*").expect("Invalid regex: purpose anchor"),
        Regex::new(r"(?i)outcomes?[\s:]*").expect("Invalid regex: outcome anchor"),
    ]
});

static GOAL_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n.;\-]").expect("Invalid regex: goal split"));

static FALLBACK_GOAL_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.\n]").expect("Invalid regex: fallback goal split"));

fn first_capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn split_items(
    splitter: &Regex,
    body: &str,
    keep: impl Fn(&str) -> bool,
    cap: usize,
) -> Vec<String> {
    splitter
        .split(body)
        .map(str::trim)
        .filter(|item| keep(*item))
        .take(cap)
        .map(str::to_string)
        .collect()
}

/// Text following `due date` up to the end of the date-like run, trimmed.
pub fn due_date(text: &str) -> Option<String> {
    first_capture(&DUE_DATE, text)
}

/// Currency/number-like text following `budget`, trimmed.
pub fn budget(text: &str) -> Option<String> {
    first_capture(&BUDGET, text)
}

/// Items listed within 1200 characters after `evaluation criteria`.
pub fn evaluation_criteria(text: &str) -> Vec<String> {
    let Some(anchor) = EVALUATION_ANCHOR.find(text) else {
        return Vec::new();
    };
    let window = take_chars(&text[anchor.end()..], EVALUATION_WINDOW);

    split_items(
        &EVALUATION_SPLIT,
        window,
        |item| item.chars().count() > 2,
        MAX_EVALUATION_ITEMS,
    )
}

/// Sentences of the text; terminal punctuation stays with its sentence.
fn sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BREAK.find_iter(text) {
        // keep the first byte of the break: the punctuation mark, or the line
        // break a trailing keyword needs to match
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    sentences.push(&text[start..]);
    sentences
}

/// Byte offsets where a line begins inside `sentence`, the sentence start included.
fn line_starts(sentence: &str) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(sentence.match_indices('\n').map(|(i, _)| i + 1))
}

/// Clauses of one sentence: each runs from a line start through the first
/// `must`/`shall` on that line plus up to 120 more characters of the sentence.
/// A line already covered by an earlier clause does not start a new one.
fn obligation_clauses(sentence: &str) -> Vec<String> {
    let mut clauses = Vec::new();
    let mut covered = 0;

    for start in line_starts(sentence) {
        if start < covered {
            continue;
        }
        let line_end = sentence[start..]
            .find('\n')
            .map_or(sentence.len(), |i| start + i);
        let Some(keyword) = OBLIGATION.find_at(sentence, start) else {
            break;
        };
        if keyword.start() >= line_end {
            continue;
        }

        let tail = take_chars(&sentence[keyword.end()..], REQUIREMENT_TAIL);
        let end = keyword.end() + tail.len();
        let clause = sentence[start..end].trim();
        if !clause.is_empty() {
            clauses.push(clause.to_string());
        }
        covered = end;
    }
    clauses
}

/// Clauses containing `must` or `shall` followed by whitespace, in order.
pub fn mandatory_requirements(text: &str) -> Vec<String> {
    sentences(text)
        .into_iter()
        .flat_map(obligation_clauses)
        .take(MAX_REQUIREMENTS)
        .collect()
}

/// Goals after the first anchor phrase found, else the first section's sentences.
pub fn goals(text: &str, sections: &[Section]) -> Vec<String> {
    for anchor in GOAL_ANCHORS.iter() {
        if let Some(m) = anchor.find(text) {
            let window = take_chars(&text[m.end()..], GOALS_WINDOW);
            return split_items(&GOAL_SPLIT, window, |item| !item.is_empty(), MAX_GOALS);
        }
    }

    let first = sections.first().map(|s| s.text.as_str()).unwrap_or_default();
    split_items(
        &FALLBACK_GOAL_SPLIT,
        first,
        |item| !item.is_empty(),
        MAX_FALLBACK_GOALS,
    )
}
