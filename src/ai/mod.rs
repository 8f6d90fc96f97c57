// src/ai/mod.rs
//! AI service integration and fallback orchestration

pub mod analyzer;
pub mod service_client;
pub mod types;

pub use analyzer::{AiAttempt, AnalysisEngine, AnalysisReport, Analyzer, OptimizeResult, Suggestion};
pub use service_client::ServiceClient;
