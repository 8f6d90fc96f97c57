// src/ai/service_client.rs
//! HTTP client for the external AI analysis service - JSON for all calls

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::trace;

use crate::ai::types::{AiAnalysisResponse, AiOptimizeResponse, AiSuggestionsResponse};

const ANALYZE_ENDPOINT: &str = "/analyze";
const SUGGESTIONS_ENDPOINT: &str = "/suggestions";
const OPTIMIZE_ENDPOINT: &str = "/optimize";

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create new service client with configuration
    pub fn new(base_url: String, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Resume analysis - sends resume + job description, receives scored report
    pub async fn analyze(
        &self,
        resume_content: &Value,
        job_description: &str,
    ) -> Result<AiAnalysisResponse> {
        let payload = serde_json::json!({
            "resume_content": resume_content,
            "job_description": job_description,
        });

        let response: AiAnalysisResponse = self.post_json(ANALYZE_ENDPOINT, &payload).await?;

        if response.status == "success" {
            Ok(response)
        } else {
            anyhow::bail!("AI analysis failed: {}", response.status)
        }
    }

    /// Improvement suggestions for a resume targeting one job description
    pub async fn suggestions(
        &self,
        resume_content: &Value,
        job_description: &str,
    ) -> Result<AiSuggestionsResponse> {
        let payload = serde_json::json!({
            "resume_content": resume_content,
            "job_description": job_description,
        });

        let response: AiSuggestionsResponse =
            self.post_json(SUGGESTIONS_ENDPOINT, &payload).await?;

        if response.status == "success" {
            Ok(response)
        } else {
            anyhow::bail!("AI suggestions failed: {}", response.status)
        }
    }

    /// Rewrite one piece of resume text to be more impactful
    pub async fn optimize(&self, text: &str, context: &str) -> Result<AiOptimizeResponse> {
        let payload = serde_json::json!({
            "text": text,
            "context": context,
        });

        let response: AiOptimizeResponse = self.post_json(OPTIMIZE_ENDPOINT, &payload).await?;

        if response.status == "success" {
            Ok(response)
        } else {
            anyhow::bail!("AI optimization failed: {}", response.status)
        }
    }

    /// Generic POST request with JSON
    async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R>
    where
        T: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        trace!("Calling AI service: {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<R>()
                .await
                .context("Failed to parse JSON response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("HTTP {} error: {}", status, error_text)
        }
    }
}
