//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{OpenAiSummaryAdapter, YouTubeTranscriptAdapter},
    config::Config,
    error::ApiError,
    web::{self, state::AppState},
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Initialize Service Adapters ---
    let transcript_adapter = Arc::new(YouTubeTranscriptAdapter::new(
        config.transcript_languages.clone(),
        config.transcript_timeout,
        config.youtube_proxy_url.as_deref(),
    )?);
    info!(
        languages = ?config.transcript_languages,
        proxied = config.youtube_proxy_url.is_some(),
        "Transcript adapter ready"
    );

    let ai_client = OpenAiSummaryAdapter::build_client(
        &config.ai_api_key,
        config.ai_api_base.as_deref(),
        config.summary_timeout,
    )?;
    let summary_adapter = Arc::new(OpenAiSummaryAdapter::new(
        ai_client,
        config.summary_model.clone(),
    ));
    info!(
        provider = ?config.ai_provider,
        model = %config.summary_model,
        "Summary adapter ready"
    );

    // --- 3. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        config: config.clone(),
        transcript_adapter,
        summary_adapter,
    });

    // --- 4. Create the Web Router ---
    let app = web::router(app_state);

    // --- 5. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
