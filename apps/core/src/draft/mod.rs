//! # Draft Module
//!
//! Turns an [`AnalysisResult`](crate::analysis::AnalysisResult) into response text.
//!
//! - `composer`: the full response template
//! - `snippets`: executive summary, compliance matrix and qualifications blocks

pub mod composer;
pub mod snippets;

pub use composer::compose;
pub use snippets::snippet;
