//! Reference Scorer.
//!
//! Ranks company documents by how many times any extracted keyword occurs in
//! their content.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Document;

/// Maximum references suggested per analysis
pub const MAX_REFERENCES: usize = 5;

/// A company document that matched the RFx keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceMatch {
    pub document_id: String,
    pub document_name: String,
    /// Number of keyword occurrences in the document
    pub score: usize,
}

/// Score `documents` against `keywords`, keeping the top [`MAX_REFERENCES`] with a non-zero score.
///
/// Ties keep the input order of `documents`.
pub fn suggest_references(keywords: &[String], documents: &[Document]) -> Vec<ReferenceMatch> {
    let alternatives: Vec<String> = keywords
        .iter()
        .filter(|k| !k.is_empty())
        .map(|k| regex::escape(k))
        .collect();
    if alternatives.is_empty() {
        return Vec::new();
    }

    let pattern = match RegexBuilder::new(&alternatives.join("|"))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!("Keyword pattern rejected, no references scored: {}", e);
            return Vec::new();
        }
    };

    let mut matches: Vec<ReferenceMatch> = documents
        .iter()
        .filter_map(|doc| {
            let score = pattern.find_iter(&doc.content).count();
            (score > 0).then(|| ReferenceMatch {
                document_id: doc.id.clone(),
                document_name: doc.name.clone(),
                score,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(MAX_REFERENCES);
    matches
}
