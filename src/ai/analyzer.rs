// src/ai/analyzer.rs
//! Analysis orchestration: AI service first, keyword heuristic as fallback.
//!
//! The AI attempt is an explicit two-variant outcome so the boundary never
//! loses the distinction between "AI scored this" and "AI was unavailable,
//! heuristic used". Every report is tagged with the engine that produced it.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::ai::service_client::ServiceClient;
use crate::ai::types::AiSuggestion;
use crate::analysis;
use crate::config::ServiceConfig;
use crate::document::flatten_document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisEngine {
    Ai,
    Heuristic,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub score: u8,
    /// Only populated by the heuristic; the AI service reports gaps, not hits.
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub engine: AnalysisEngine,
}

/// Outcome of one attempt against the AI service.
#[derive(Debug)]
pub enum AiAttempt {
    Scored(AnalysisReport),
    Unavailable { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub section: String,
    pub suggestion_type: String,
    pub original_text: Option<String>,
    pub suggested_text: String,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptimizeResult {
    pub optimized: String,
    pub engine: AnalysisEngine,
}

pub struct Analyzer {
    client: Option<ServiceClient>,
}

impl Analyzer {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = match &config.ai_service_url {
            Some(url) => Some(ServiceClient::new(url.clone(), config.timeout_seconds)?),
            None => None,
        };

        Ok(Self { client })
    }

    /// Analyze a resume against a job description. Never fails: when the AI
    /// service is unconfigured or errors, the keyword heuristic answers.
    pub async fn analyze(&self, resume_content: &Value, job_description: &str) -> AnalysisReport {
        match self.try_ai_analysis(resume_content, job_description).await {
            AiAttempt::Scored(report) => report,
            AiAttempt::Unavailable { reason } => {
                warn!("AI analysis unavailable, using keyword heuristic: {}", reason);
                self.heuristic_analysis(resume_content, job_description)
            }
        }
    }

    async fn try_ai_analysis(&self, resume_content: &Value, job_description: &str) -> AiAttempt {
        let Some(client) = &self.client else {
            return AiAttempt::Unavailable {
                reason: "no AI service configured".to_string(),
            };
        };

        match client.analyze(resume_content, job_description).await {
            Ok(response) => AiAttempt::Scored(AnalysisReport {
                score: response.score.min(100),
                matched_keywords: Vec::new(),
                missing_keywords: response.missing_keywords,
                strengths: response.strengths,
                improvements: response.improvements,
                engine: AnalysisEngine::Ai,
            }),
            Err(e) => AiAttempt::Unavailable {
                reason: e.to_string(),
            },
        }
    }

    fn heuristic_analysis(&self, resume_content: &Value, job_description: &str) -> AnalysisReport {
        let document_text = flatten_document(resume_content);
        let result = analysis::score(job_description, &document_text);

        AnalysisReport {
            score: result.score,
            matched_keywords: result.matched_keywords,
            missing_keywords: result.missing_keywords,
            strengths: vec![
                "Clear professional experience section".to_string(),
                "Quantifiable achievements included".to_string(),
                "Relevant technical skills listed".to_string(),
            ],
            improvements: vec![
                "Add more industry-specific keywords".to_string(),
                "Include metrics in all bullet points".to_string(),
                "Tailor summary to job description".to_string(),
            ],
            engine: AnalysisEngine::Heuristic,
        }
    }

    /// Improvement suggestions, AI when available, fixed fallback otherwise.
    pub async fn suggestions(
        &self,
        resume_content: &Value,
        job_description: &str,
    ) -> Vec<Suggestion> {
        if let Some(client) = &self.client {
            match client.suggestions(resume_content, job_description).await {
                Ok(response) => {
                    return response.suggestions.into_iter().map(materialize).collect()
                }
                Err(e) => {
                    warn!("AI suggestions unavailable, using fallback: {}", e);
                }
            }
        }

        fallback_suggestions().into_iter().map(materialize).collect()
    }

    /// Rewrite one piece of resume text. The fallback keeps the original text
    /// and appends a marker, matching the offline behavior users already see.
    pub async fn optimize(&self, text: &str, context: &str) -> OptimizeResult {
        if let Some(client) = &self.client {
            match client.optimize(text, context).await {
                Ok(response) => {
                    return OptimizeResult {
                        optimized: response.optimized,
                        engine: AnalysisEngine::Ai,
                    }
                }
                Err(e) => {
                    warn!("AI optimization unavailable, using fallback: {}", e);
                }
            }
        }

        OptimizeResult {
            optimized: format!(
                "{} (optimized with stronger action verbs and quantifiable metrics)",
                text
            ),
            engine: AnalysisEngine::Heuristic,
        }
    }
}

fn materialize(suggestion: AiSuggestion) -> Suggestion {
    Suggestion {
        id: Uuid::new_v4().to_string(),
        section: suggestion.section,
        suggestion_type: suggestion.suggestion_type,
        original_text: suggestion.original_text,
        suggested_text: suggestion.suggested_text,
        reason: suggestion.reason,
        created_at: Utc::now(),
    }
}

fn fallback_suggestions() -> Vec<AiSuggestion> {
    vec![
        AiSuggestion {
            section: "experience".to_string(),
            suggestion_type: "keyword".to_string(),
            original_text: Some("Developed web applications".to_string()),
            suggested_text: "Engineered scalable web applications using React and Node.js"
                .to_string(),
            reason: "Added specific technologies and stronger action verb".to_string(),
        },
        AiSuggestion {
            section: "experience".to_string(),
            suggestion_type: "quantify".to_string(),
            original_text: Some("Improved system performance".to_string()),
            suggested_text: "Improved system performance by 40% through database optimization"
                .to_string(),
            reason: "Added quantifiable metric and specific method".to_string(),
        },
        AiSuggestion {
            section: "skills".to_string(),
            suggestion_type: "keyword".to_string(),
            original_text: None,
            suggested_text: "Add: Kubernetes, Docker, CI/CD".to_string(),
            reason: "Job description mentions these technologies multiple times".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offline_analyzer() -> Analyzer {
        Analyzer::new(&ServiceConfig::offline()).unwrap()
    }

    #[tokio::test]
    async fn test_unconfigured_service_falls_back_to_heuristic() {
        let analyzer = offline_analyzer();
        let resume = json!({"skills": ["Python", "Docker"]});

        let report = analyzer
            .analyze(&resume, "Python and Docker and Kubernetes")
            .await;

        assert_eq!(report.engine, AnalysisEngine::Heuristic);
        assert_eq!(report.score, 67);
        assert_eq!(report.matched_keywords, vec!["python", "docker"]);
        assert_eq!(report.missing_keywords, vec!["kubernetes"]);
        assert!(!report.strengths.is_empty());
    }

    #[tokio::test]
    async fn test_ai_attempt_reports_unavailable_without_client() {
        let analyzer = offline_analyzer();

        match analyzer.try_ai_analysis(&json!({}), "any description").await {
            AiAttempt::Unavailable { reason } => assert!(reason.contains("configured")),
            AiAttempt::Scored(_) => panic!("no client should never score"),
        }
    }

    #[tokio::test]
    async fn test_fallback_suggestions_shape() {
        let analyzer = offline_analyzer();

        let suggestions = analyzer.suggestions(&json!({}), "any description").await;

        assert_eq!(suggestions.len(), 3);
        assert!(suggestions.iter().all(|s| !s.id.is_empty()));
        assert!(suggestions.iter().any(|s| s.original_text.is_none()));
    }

    #[tokio::test]
    async fn test_fallback_optimize_keeps_original_text() {
        let analyzer = offline_analyzer();

        let result = analyzer.optimize("Led a small team", "").await;

        assert_eq!(result.engine, AnalysisEngine::Heuristic);
        assert!(result.optimized.starts_with("Led a small team"));
    }
}
