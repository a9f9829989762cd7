//! Analysis Result - output structure of RFx analysis.
//!
//! Immutable once built; stored keyed by the source document id.

use serde::{Deserialize, Serialize};

use super::references::ReferenceMatch;
use super::text::Section;

/// Structured extraction from one RFx document's text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Whitespace-delimited word count
    pub word_count: usize,

    /// Blank-line-delimited chunks, in document order
    pub sections: Vec<Section>,

    /// Frequency-ranked keywords (at most 20)
    pub keywords: Vec<String>,

    pub due_date: Option<String>,

    pub budget: Option<String>,

    /// Evaluation criteria items (at most 8)
    pub evaluation: Vec<String>,

    /// `must`/`shall` clauses in order of appearance (at most 12)
    pub mandatory_requirements: Vec<String>,

    /// Stated goals or, failing that, the opening sentences (at most 6)
    pub goals: Vec<String>,

    /// Best-matching company documents, score descending (at most 5)
    pub suggested_company_references: Vec<ReferenceMatch>,
}

impl AnalysisResult {
    /// Look up a section's text by its label
    #[cfg(test)]
    pub fn section(&self, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.text.as_str())
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Words: {}, Sections: {}, Keywords: {}, Requirements: {}, Goals: {}, References: {}, Due date: {}, Budget: {}",
            self.word_count,
            self.sections.len(),
            self.keywords.len(),
            self.mandatory_requirements.len(),
            self.goals.len(),
            self.suggested_company_references.len(),
            if self.due_date.is_some() { "yes" } else { "no" },
            if self.budget.is_some() { "yes" } else { "no" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_lookup() {
        let result = AnalysisResult {
            sections: vec![Section {
                label: "Section 1".to_string(),
                text: "Intro".to_string(),
            }],
            ..Default::default()
        };

        assert_eq!(result.section("Section 1"), Some("Intro"));
        assert_eq!(result.section("Section 2"), None);
    }

    #[test]
    fn test_json_field_names() {
        let result = AnalysisResult {
            due_date: Some("May 1".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["dueDate"], "May 1");
        assert!(json["budget"].is_null());
        assert!(json["mandatoryRequirements"].as_array().unwrap().is_empty());
        assert!(json["suggestedCompanyReferences"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_summary() {
        let summary = AnalysisResult::default().summary();
        assert!(summary.contains("Words: 0"));
        assert!(summary.contains("Due date: no"));
    }
}
