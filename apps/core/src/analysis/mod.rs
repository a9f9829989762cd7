//! # Analysis Module
//!
//! Heuristic, non-ML analysis of RFx documents.
//!
//! ## Components
//! - `text`: carriage-return stripping, line/word counts, paragraph sections
//! - `keywords`: frequency-ranked keyword extraction
//! - `patterns`: due date, budget, evaluation criteria, requirements, goals
//! - `references`: company-document relevance scoring
//! - `result`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod keywords;
pub mod patterns;
pub mod references;
pub mod result;
pub mod text;

pub use analyzer::analyze;
pub use references::ReferenceMatch;
pub use result::AnalysisResult;
