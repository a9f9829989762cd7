//! Snippet Generator - small reusable blocks inserted into a draft.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::composer::reference_name;
use crate::analysis::AnalysisResult;
use crate::models::Document;

const NO_REQUIREMENTS: &str = "No mandatory requirements detected.";
const NO_QUALIFICATIONS: &str = "Insert qualifications and past performance here.";
const EXECUTIVE_SUMMARY: &str = "We understand your objectives and will deliver outcomes aligned to your success metrics. Our approach mitigates risk, accelerates value, and ensures full compliance.";

/// Kinds of snippet the editor can insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetKind {
    Executive,
    Compliance,
    Qualifications,
}

impl SnippetKind {
    pub fn label(&self) -> &'static str {
        match self {
            SnippetKind::Executive => "executive",
            SnippetKind::Compliance => "compliance",
            SnippetKind::Qualifications => "qualifications",
        }
    }
}

impl fmt::Display for SnippetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SnippetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "executive" => Ok(SnippetKind::Executive),
            "compliance" => Ok(SnippetKind::Compliance),
            "qualifications" => Ok(SnippetKind::Qualifications),
            other => Err(format!("Unknown snippet kind: {}", other)),
        }
    }
}

fn blocks(items: Vec<String>, empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join("\n\n")
    }
}

/// Render one snippet kind
pub fn render(
    kind: SnippetKind,
    analysis: Option<&AnalysisResult>,
    company_docs: &[Document],
) -> String {
    match kind {
        SnippetKind::Compliance => {
            let items = analysis
                .map(|a| a.mandatory_requirements.as_slice())
                .unwrap_or_default()
                .iter()
                .enumerate()
                .map(|(i, req)| {
                    format!(
                        "Req {}: {}\nResponse: Compliant. Evidence: [Insert reference].",
                        i + 1,
                        req
                    )
                })
                .collect();
            blocks(items, NO_REQUIREMENTS)
        }
        SnippetKind::Qualifications => {
            let items = analysis
                .map(|a| a.suggested_company_references.as_slice())
                .unwrap_or_default()
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    format!(
                        "Reference {}: {}\nRelevance: {} keyword matches.",
                        i + 1,
                        reference_name(r, company_docs),
                        r.score
                    )
                })
                .collect();
            blocks(items, NO_QUALIFICATIONS)
        }
        SnippetKind::Executive => EXECUTIVE_SUMMARY.to_string(),
    }
}

/// Render a snippet by name; unknown names render as an empty string.
pub fn snippet(kind: &str, analysis: Option<&AnalysisResult>, company_docs: &[Document]) -> String {
    kind.parse::<SnippetKind>()
        .map(|kind| render(kind, analysis, company_docs))
        .unwrap_or_default()
}
