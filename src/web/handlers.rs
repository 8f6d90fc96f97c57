// src/web/handlers.rs
//! Request handlers for the analysis endpoints

use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::ai::{AnalysisReport, Analyzer, OptimizeResult, Suggestion};
use crate::web::types::{
    AnalyzeRequest, DataResponse, OptimizeRequest, StandardErrorResponse, StandardRequest,
    SuggestionsRequest, TextResponse, WithConversationId,
};

pub async fn analyze_handler(
    request: Json<StandardRequest<AnalyzeRequest>>,
    analyzer: &State<Analyzer>,
) -> Result<Json<DataResponse<AnalysisReport>>, Json<StandardErrorResponse>> {
    let conversation_id = request.conversation_id();

    if request.data.job_description.trim().is_empty() {
        return Err(Json(StandardErrorResponse::new(
            "Resume content and job description required".to_string(),
            "MISSING_JOB_DESCRIPTION".to_string(),
            vec!["Provide the job description text to analyze against".to_string()],
            conversation_id,
        )));
    }

    let report = analyzer
        .analyze(&request.data.resume_content, &request.data.job_description)
        .await;

    info!(score = report.score, engine = ?report.engine, "Resume analyzed");

    Ok(Json(DataResponse::success(
        "Resume analysis completed".to_string(),
        report,
        conversation_id,
    )))
}

pub async fn suggestions_handler(
    request: Json<StandardRequest<SuggestionsRequest>>,
    analyzer: &State<Analyzer>,
) -> Result<Json<DataResponse<Vec<Suggestion>>>, Json<StandardErrorResponse>> {
    let conversation_id = request.conversation_id();

    if request.data.job_description.trim().is_empty() {
        return Err(Json(StandardErrorResponse::new(
            "Job description required".to_string(),
            "MISSING_JOB_DESCRIPTION".to_string(),
            vec!["Provide the job description the suggestions should target".to_string()],
            conversation_id,
        )));
    }

    let suggestions = analyzer
        .suggestions(&request.data.resume_content, &request.data.job_description)
        .await;

    Ok(Json(DataResponse::success(
        "Suggestions generated".to_string(),
        suggestions,
        conversation_id,
    )))
}

pub async fn optimize_handler(
    request: Json<StandardRequest<OptimizeRequest>>,
    analyzer: &State<Analyzer>,
) -> Result<Json<DataResponse<OptimizeResult>>, Json<StandardErrorResponse>> {
    let conversation_id = request.conversation_id();

    if request.data.text.trim().is_empty() {
        return Err(Json(StandardErrorResponse::new(
            "Text required".to_string(),
            "MISSING_TEXT".to_string(),
            vec!["Provide the resume text to optimize".to_string()],
            conversation_id,
        )));
    }

    let context = request.data.context.as_deref().unwrap_or("");
    let result = analyzer.optimize(&request.data.text, context).await;

    Ok(Json(DataResponse::success(
        "Content optimization completed".to_string(),
        result,
        conversation_id,
    )))
}

pub async fn health_handler() -> Json<TextResponse> {
    Json(TextResponse::success("Service is healthy".to_string(), None))
}
