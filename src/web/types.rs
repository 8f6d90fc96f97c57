// src/web/types.rs
//! Standard request/response envelope for all API endpoints

use rocket::serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Text,
    Data,
    Error,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

/// Request wrapper carrying an optional conversation_id alongside the payload
#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardRequest<T> {
    #[serde(flatten)]
    pub data: T,
    pub conversation_id: Option<String>,
}

pub trait WithConversationId {
    fn conversation_id(&self) -> Option<String>;
}

impl<T> WithConversationId for StandardRequest<T> {
    fn conversation_id(&self) -> Option<String> {
        self.conversation_id.clone()
    }
}

// ===== Endpoint payloads =====

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct AnalyzeRequest {
    pub resume_content: rocket::serde::json::Value,
    pub job_description: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct SuggestionsRequest {
    pub resume_content: rocket::serde::json::Value,
    pub job_description: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct OptimizeRequest {
    pub text: String,
    pub context: Option<String>,
}

// Helper functions to create standard responses

impl TextResponse {
    pub fn success(message: String, conversation_id: Option<String>) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: true,
            message,
            conversation_id,
        }
    }
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T, conversation_id: Option<String>) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
            conversation_id,
        }
    }
}

impl StandardErrorResponse {
    pub fn new(
        error: String,
        error_code: String,
        suggestions: Vec<String>,
        conversation_id: Option<String>,
    ) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
            conversation_id,
        }
    }
}
