// src/analysis/mod.rs
//! Keyword-gap ATS scoring heuristic.
//!
//! Pure and stateless: the extractor derives ranked keywords from a job
//! description, the scorer checks them against flattened resume text. This is
//! the deterministic fallback used whenever the AI service is not available,
//! so it must produce a result for every well-typed input.

pub mod keywords;
pub mod scorer;

pub use keywords::extract_keywords;
pub use scorer::{score_keywords, MatchResult};

/// Score a candidate document against a job description in one call.
pub fn score(job_description: &str, document_text: &str) -> MatchResult {
    score_keywords(&extract_keywords(job_description), document_text)
}
