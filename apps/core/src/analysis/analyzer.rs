//! RFx Analyzer - orchestrates normalization, keyword extraction, pattern
//! extraction and reference scoring into one [`AnalysisResult`].
//!
//! The analyzer holds no state between calls: the same text and reference
//! documents always produce the same result.

use std::time::Instant;
use tracing::debug;

use super::keywords::KeywordExtractor;
use super::patterns;
use super::references::suggest_references;
use super::result::AnalysisResult;
use super::text::{normalize, split_sections};
use crate::models::Document;

/// Main analyzer that combines every extractor
pub struct RfxAnalyzer {
    keyword_extractor: KeywordExtractor,
}

impl Default for RfxAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RfxAnalyzer {
    pub fn new() -> Self {
        Self {
            keyword_extractor: KeywordExtractor::new(),
        }
    }

    /// Analyze RFx text against the current company documents
    pub fn analyze(&self, rfx_text: &str, company_docs: &[Document]) -> AnalysisResult {
        let start = Instant::now();

        let normalized = normalize(rfx_text);
        let text = normalized.text.as_str();
        let sections = split_sections(text);
        let keywords = self.keyword_extractor.extract_keywords(text);
        let suggested_company_references = suggest_references(&keywords, company_docs);

        let result = AnalysisResult {
            word_count: normalized.word_count,
            goals: patterns::goals(text, &sections),
            sections,
            keywords,
            due_date: patterns::due_date(text),
            budget: patterns::budget(text),
            evaluation: patterns::evaluation_criteria(text),
            mandatory_requirements: patterns::mandatory_requirements(text),
            suggested_company_references,
        };

        debug!(
            "Analyzed RFx ({} non-blank lines) in {}µs: {}",
            normalized.lines.len(),
            start.elapsed().as_micros(),
            result.summary()
        );

        result
    }
}

/// Analyze with a default [`RfxAnalyzer`]
pub fn analyze(rfx_text: &str, company_docs: &[Document]) -> AnalysisResult {
    RfxAnalyzer::new().analyze(rfx_text, company_docs)
}
