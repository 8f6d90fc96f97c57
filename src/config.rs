// src/config.rs
//! Unified configuration management for the analysis server

use anyhow::{Context, Result};
use tracing::info;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub server: ServerConfig,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Outbound AI service configuration. `ai_service_url` left unset means the
/// server runs on the keyword heuristic alone.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub ai_service_url: Option<String>,
    pub timeout_seconds: u64,
}

impl ConfigManager {
    /// Load all configurations from the environment
    pub fn load() -> Result<Self> {
        let server = Self::load_server()?;
        let service = Self::load_service()?;

        Ok(Self { server, service })
    }

    fn load_server() -> Result<ServerConfig> {
        let port = match std::env::var("ROCKET_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("ROCKET_PORT must be a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(ServerConfig { port })
    }

    fn load_service() -> Result<ServiceConfig> {
        let ai_service_url = std::env::var("AI_SERVICE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let timeout_seconds = match std::env::var("AI_SERVICE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("AI_SERVICE_TIMEOUT_SECS must be a number of seconds")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        match &ai_service_url {
            Some(url) => info!("AI service configured: {}", url),
            None => info!("No AI service configured, analysis uses the keyword heuristic"),
        }

        Ok(ServiceConfig {
            ai_service_url,
            timeout_seconds,
        })
    }
}

impl ServiceConfig {
    /// Configuration for a fully offline analyzer (CLI, tests).
    pub fn offline() -> Self {
        Self {
            ai_service_url: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}
