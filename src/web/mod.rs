// src/web/mod.rs
//! HTTP surface for the resume analysis service

pub mod handlers;
pub mod types;

pub use types::*;

use crate::ai::{AnalysisReport, Analyzer, OptimizeResult, Suggestion};
use crate::config::ConfigManager;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/analyze", data = "<request>")]
pub async fn analyze(
    request: Json<StandardRequest<AnalyzeRequest>>,
    analyzer: &State<Analyzer>,
) -> Result<Json<DataResponse<AnalysisReport>>, Json<StandardErrorResponse>> {
    handlers::analyze_handler(request, analyzer).await
}

#[post("/suggestions", data = "<request>")]
pub async fn suggestions(
    request: Json<StandardRequest<SuggestionsRequest>>,
    analyzer: &State<Analyzer>,
) -> Result<Json<DataResponse<Vec<Suggestion>>>, Json<StandardErrorResponse>> {
    handlers::suggestions_handler(request, analyzer).await
}

#[post("/optimize", data = "<request>")]
pub async fn optimize(
    request: Json<StandardRequest<OptimizeRequest>>,
    analyzer: &State<Analyzer>,
) -> Result<Json<DataResponse<OptimizeResult>>, Json<StandardErrorResponse>> {
    handlers::optimize_handler(request, analyzer).await
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn preflight() -> Status {
    Status::Ok
}

// Error catchers

#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
        None,
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec!["Try again in a few moments".to_string()],
        None,
    ))
}

/// Build the rocket instance; separated from launch so tests can mount it
/// with a local client.
pub fn build_rocket(config: &ConfigManager) -> Result<Rocket<Build>> {
    let analyzer = Analyzer::new(&config.service)?;

    let figment = rocket::Config::figment()
        .merge(("port", config.server.port))
        .merge(("address", "0.0.0.0"));

    Ok(rocket::custom(figment)
        .attach(Cors)
        .manage(analyzer)
        .register("/api", catchers![bad_request, internal_error])
        .mount(
            "/api",
            routes![analyze, suggestions, optimize, health, preflight],
        ))
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    info!("Starting resume analysis API server");
    info!("Server: http://0.0.0.0:{}", config.server.port);

    build_rocket(&config)?
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket launch failed: {}", e))?;

    Ok(())
}
