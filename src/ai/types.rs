// src/ai/types.rs
//! Wire types for the external AI analysis service

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AiAnalysisResponse {
    pub status: String,
    pub score: u8,
    pub missing_keywords: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AiSuggestionsResponse {
    pub status: String,
    pub suggestions: Vec<AiSuggestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSuggestion {
    pub section: String,
    pub suggestion_type: String,
    pub original_text: Option<String>,
    pub suggested_text: String,
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AiOptimizeResponse {
    pub status: String,
    pub optimized: String,
}
