//! Draft Composer - renders the fixed response template from an analysis.
//!
//! Headings and boilerplate are literal; downstream tooling compares output
//! byte for byte.

use crate::analysis::{AnalysisResult, ReferenceMatch};
use crate::models::Document;

/// Keywords listed under "Scope and Approach"
pub const SCOPE_KEYWORDS: usize = 6;
/// Requirements listed under "Compliance Matrix"
pub const COMPLIANCE_ROWS: usize = 8;

/// Section headings in output order
pub const HEADINGS: [&str; 7] = [
    "Executive Summary",
    "Our Solution",
    "Scope and Approach",
    "Differentiators",
    "Compliance Matrix",
    "Relevant References",
    "Value and Pricing",
];

const GOALS_FALLBACK: &str =
    "We understand your goals and desired outcomes and will align our solution accordingly.";
const SOLUTION_POINTS: &str = "- Tailored to your requirements and constraints\n- Built on proven methods and accelerators\n- Compliant with all mandatory requirements";
const DIFFERENTIATORS: &str =
    "- Relevant qualifications and past performance\n- Experienced staff with similar engagements";
const REFERENCES_FALLBACK: &str =
    "- Company qualifications and past performance available upon request";
const PRICING_FALLBACK: &str =
    "We will provide a competitive, transparent pricing structure aligned to value delivered.";

/// Display name of a matched reference, preferring the current library name.
pub(crate) fn reference_name<'a>(
    reference: &'a ReferenceMatch,
    company_docs: &'a [Document],
) -> &'a str {
    company_docs
        .iter()
        .find(|d| d.id == reference.document_id)
        .map(|d| d.name.as_str())
        .unwrap_or(reference.document_name.as_str())
}

fn numbered<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compose a response draft; no analysis means no draft.
pub fn compose(analysis: Option<&AnalysisResult>, company_docs: &[Document]) -> String {
    let Some(analysis) = analysis else {
        return String::new();
    };

    let goals = if analysis.goals.is_empty() {
        GOALS_FALLBACK.to_string()
    } else {
        format!(
            "We understand your goals include: \n- {}",
            analysis.goals.join("\n- ")
        )
    };

    let key_areas = analysis
        .keywords
        .iter()
        .take(SCOPE_KEYWORDS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let due_date = analysis
        .due_date
        .as_deref()
        .map(|d| format!(" ({})", d.trim()))
        .unwrap_or_default();

    let compliance = numbered(
        analysis
            .mandatory_requirements
            .iter()
            .take(COMPLIANCE_ROWS)
            .map(String::as_str),
    );

    let references = numbered(
        analysis
            .suggested_company_references
            .iter()
            .map(|r| reference_name(r, company_docs)),
    );
    let references = if references.is_empty() {
        REFERENCES_FALLBACK.to_string()
    } else {
        references
    };

    let pricing = match &analysis.budget {
        Some(budget) => format!("We will align to the stated budget of {}.", budget),
        None => PRICING_FALLBACK.to_string(),
    };

    let bodies = [
        format!("\n{goals}"),
        SOLUTION_POINTS.to_string(),
        format!(
            "- We will address the following key areas: {key_areas}\n\
             - Timeline aligned to your due date{due_date}"
        ),
        DIFFERENTIATORS.to_string(),
        compliance,
        references,
        pricing,
    ];

    HEADINGS
        .iter()
        .zip(bodies)
        .map(|(heading, body)| format!("{heading}\n{body}\n\n"))
        .collect()
}
