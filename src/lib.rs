// src/lib.rs
//! Resume ATS analysis: keyword-gap scoring heuristic, AI service fallback
//! orchestration, and the HTTP surface exposing them.

pub mod ai;
pub mod analysis;
pub mod config;
pub mod document;
pub mod web;

pub use analysis::{extract_keywords, score, score_keywords, MatchResult};
pub use config::ConfigManager;
pub use document::flatten_document;
pub use web::start_web_server;
