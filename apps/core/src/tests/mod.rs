//! Test Module
//!
//! Cross-module test suites for RFx Studio.
//!
//! ## Test Categories
//! - `analysis_tests`: analyzer, reference scoring and draft output on sample RFx text
//! - `database_tests`: store round trips for documents, analyses, versions and state
//! - `workspace_tests`: selection, draft generation, editing and version flows

pub mod analysis_tests;
