//! Analysis and Draft Tests
//!
//! End-to-end checks of the analyzer and composer on realistic RFx text.

use crate::analysis::keywords::{KeywordExtractor, STOPWORDS};
use crate::analysis::references::suggest_references;
use crate::analysis::{analyze, AnalysisResult};
use crate::draft::composer::HEADINGS;
use crate::draft::{compose, snippet};
use crate::models::{Document, DocumentKind};

const SAMPLE_RFP: &str = "Request for Proposal: Cloud Platform Modernization\r\n\
\r\n\
Objectives: Reduce hosting cost; improve security posture.\r\n\
\r\n\
Due Date: April 30, 2025\r\n\
Budget: $250,000\r\n\
\r\n\
The vendor must provide a migration plan. All data shall remain in region.\r\n\
\r\n\
Evaluation Criteria:\r\n\
1. Technical approach\r\n\
2. Past performance\r\n\
3. Price\r\n";

fn company_docs() -> Vec<Document> {
    vec![
        Document::new(
            DocumentKind::Company,
            "Capabilities",
            "Cloud migration and security services for public sector",
        ),
        Document::new(DocumentKind::Company, "Catering", "Catering menu"),
    ]
}

#[cfg(test)]
mod analyzer_tests {
    use super::*;

    #[test]
    fn test_sample_rfp_fields() {
        let result = analyze(SAMPLE_RFP, &company_docs());

        assert_eq!(result.word_count, 43);
        assert_eq!(result.sections.len(), 5);
        assert_eq!(
            result.section("Section 3"),
            Some("Due Date: April 30, 2025\nBudget: $250,000")
        );
        assert_eq!(result.due_date.as_deref(), Some("April 30, 2025"));
        assert_eq!(result.budget.as_deref(), Some("$250,000"));
        assert_eq!(
            result.evaluation,
            vec!["Technical approach", "Past performance", "Price"]
        );
        assert_eq!(
            result.mandatory_requirements,
            vec![
                "The vendor must provide a migration plan.",
                "All data shall remain in region."
            ]
        );
    }

    #[test]
    fn test_sample_rfp_goals_window() {
        let result = analyze(SAMPLE_RFP, &[]);

        // The window runs past the objectives line into the rest of the document
        assert_eq!(result.goals.len(), 6);
        assert_eq!(result.goals[0], "Reduce hosting cost");
        assert_eq!(result.goals[1], "improve security posture");
        assert_eq!(result.goals[2], "Due Date: April 30, 2025");
    }

    #[test]
    fn test_sample_rfp_keywords_and_references() {
        let result = analyze(SAMPLE_RFP, &company_docs());

        assert_eq!(result.keywords.len(), 20);
        assert_eq!(result.keywords[0], "request");
        assert!(!result.keywords.iter().any(|k| k == "for" || k == "must"));

        assert_eq!(result.suggested_company_references.len(), 1);
        assert_eq!(result.suggested_company_references[0].document_name, "Capabilities");
        assert_eq!(result.suggested_company_references[0].score, 3);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let docs = company_docs();
        assert_eq!(analyze(SAMPLE_RFP, &docs), analyze(SAMPLE_RFP, &docs));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(analyze("", &[]), AnalysisResult::default());
        assert_eq!(analyze(" \r\n\t\n", &company_docs()), AnalysisResult::default());
    }

    #[test]
    fn test_due_date_example() {
        let result = analyze("Project Due Date: March 15, 2024\nOther text", &[]);
        assert_eq!(result.due_date.as_deref(), Some("March 15, 2024"));
    }

    #[test]
    fn test_mandatory_requirements_example() {
        let result = analyze(
            "Vendor must provide 24/7 support. The system shall be available 99.9% of the time.",
            &[],
        );

        assert_eq!(
            result.mandatory_requirements,
            vec![
                "Vendor must provide 24/7 support.",
                "The system shall be available 99.9% of the time."
            ]
        );
    }

    #[test]
    fn test_wrapped_requirements_kept_whole() {
        let text = "Scope of work.\nThe Contractor shall\nprovide monthly status reports.\n\n\
                    Bidders must\nsubmit three references.";
        let result = analyze(text, &[]);

        assert_eq!(
            result.mandatory_requirements,
            vec![
                "The Contractor shall\nprovide monthly status reports.",
                "Bidders must\nsubmit three references."
            ]
        );
    }

    #[test]
    fn test_goals_fallback_uses_first_section() {
        let text = "Acme seeks a new website. Launch by spring.\nSecond line\n\nMore text here.";
        let result = analyze(text, &[]);

        assert_eq!(
            result.goals,
            vec!["Acme seeks a new website", "Launch by spring", "Second line"]
        );
    }

    #[test]
    fn test_goals_fallback_capped_at_four() {
        let result = analyze("One. Two. Three. Four. Five. Six.", &[]);
        assert_eq!(result.goals, vec!["One", "Two", "Three", "Four"]);
    }

    #[test]
    fn test_requirements_capped_at_twelve() {
        let text = (1..=15)
            .map(|i| format!("Vendor must deliver item {}.", i))
            .collect::<Vec<_>>()
            .join("\n");
        let result = analyze(&text, &[]);

        assert_eq!(result.mandatory_requirements.len(), 12);
        assert_eq!(result.mandatory_requirements[11], "Vendor must deliver item 12.");
    }
}

#[cfg(test)]
mod keyword_property_tests {
    use super::*;

    const INPUTS: &[&str] = &[
        "",
        "a b c",
        SAMPLE_RFP,
        "beta alpha beta alpha gamma",
        "The the THE and AND security security cloud-native cloud-native cloud-native",
        "one two three four five six seven eight nine ten eleven twelve thirteen fourteen \
         fifteen sixteen seventeen eighteen nineteen twenty twenty-one twenty-two",
    ];

    #[test]
    fn test_keywords_bounded_without_stopwords_and_sorted() {
        let extractor = KeywordExtractor::new();

        for input in INPUTS {
            let counts = extractor.extract(input);

            assert!(counts.len() <= 20, "too many keywords for {:?}", input);
            assert!(
                counts.iter().all(|c| !STOPWORDS.contains(&c.keyword.as_str())),
                "stopword leaked for {:?}",
                input
            );
            assert!(
                counts.windows(2).all(|w| w[0].frequency >= w[1].frequency),
                "not sorted for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let keywords = KeywordExtractor::new().extract_keywords("beta alpha beta alpha gamma");
        assert_eq!(keywords, vec!["beta", "alpha", "gamma"]);
    }

    #[test]
    fn test_hyphenated_tokens() {
        let keywords = KeywordExtractor::new().extract_keywords(INPUTS[4]);
        assert_eq!(keywords, vec!["cloud-native", "security"]);
    }
}

#[cfg(test)]
mod reference_tests {
    use super::*;

    #[test]
    fn test_reference_scoring_example() {
        let docs = vec![
            Document::new(
                DocumentKind::Company,
                "Cloud Deck",
                "Cloud first. Our cloud team secures every cloud with security reviews.",
            ),
            Document::new(DocumentKind::Company, "Facilities", "Office cleaning services"),
        ];
        let keywords = vec!["cloud".to_string(), "security".to_string()];

        let refs = suggest_references(&keywords, &docs);

        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].document_id, docs[0].id);
        assert_eq!(refs[0].score, 4);
    }
}

#[cfg(test)]
mod draft_tests {
    use super::*;

    fn example_analysis() -> AnalysisResult {
        AnalysisResult {
            goals: vec!["reduce cost".to_string()],
            keywords: ["cloud", "security", "scale", "cost", "risk", "speed"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            due_date: Some("March 15, 2024".to_string()),
            mandatory_requirements: vec!["must provide support".to_string()],
            budget: Some("$500,000".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_headings_in_order() {
        let draft = compose(Some(&example_analysis()), &[]);

        let positions: Vec<usize> = HEADINGS
            .iter()
            .map(|h| draft.find(h).unwrap_or_else(|| panic!("missing heading {}", h)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let goal = draft.find("reduce cost").unwrap();
        assert!(positions[0] < goal && goal < positions[1]);

        let budget = draft.find("$500,000").unwrap();
        assert!(budget > positions[6]);
    }

    #[test]
    fn test_example_sections() {
        let draft = compose(Some(&example_analysis()), &[]);

        assert!(draft.starts_with(
            "Executive Summary\n\nWe understand your goals include: \n- reduce cost\n\nOur Solution\n"
        ));
        assert!(draft.contains(
            "- We will address the following key areas: cloud, security, scale, cost, risk, speed\n\
             - Timeline aligned to your due date (March 15, 2024)\n\n"
        ));
        assert!(draft.contains("Compliance Matrix\n1. must provide support\n\n"));
        assert!(draft.ends_with(
            "Value and Pricing\nWe will align to the stated budget of $500,000.\n\n"
        ));
    }

    #[test]
    fn test_draft_from_sample_rfp() {
        let docs = company_docs();
        let analysis = analyze(SAMPLE_RFP, &docs);
        let draft = compose(Some(&analysis), &docs);

        assert!(draft.contains("Timeline aligned to your due date (April 30, 2025)"));
        assert!(draft.contains(
            "Compliance Matrix\n1. The vendor must provide a migration plan.\n2. All data shall remain in region.\n\n"
        ));
        assert!(draft.contains("Relevant References\n1. Capabilities\n\n"));
    }

    #[test]
    fn test_snippets_from_sample_rfp() {
        let docs = company_docs();
        let analysis = analyze(SAMPLE_RFP, &docs);

        assert_eq!(
            snippet("compliance", Some(&analysis), &docs),
            "Req 1: The vendor must provide a migration plan.\nResponse: Compliant. Evidence: [Insert reference].\n\n\
             Req 2: All data shall remain in region.\nResponse: Compliant. Evidence: [Insert reference]."
        );
        assert_eq!(
            snippet("qualifications", Some(&analysis), &docs),
            "Reference 1: Capabilities\nRelevance: 3 keyword matches."
        );
        assert_eq!(snippet("pricing", Some(&analysis), &docs), "");
    }
}
