use anyhow::Result;
use resume_analyzer::{start_web_server, ConfigManager};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resume_analyzer=info,rocket::server=off")),
        )
        .init();

    let config = ConfigManager::load()?;

    info!("Starting resume ATS analysis server");
    info!(
        "Environment: {}",
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
    );

    start_web_server(config).await
}
