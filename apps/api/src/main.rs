mod config;
mod errors;
mod export;
mod generation;
mod layout;
mod llm_client;
mod models;
mod routes;
mod state;
mod studio;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::CommandExporter;
use crate::generation::generator::BookGenerator;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::studio::Studio;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Muallif API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the model client once; the generator receives it by injection
    let model = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let generator = BookGenerator::new(model, config.chapter_count_policy);
    info!("Chapter count policy: {:?}", generator.policy());

    let exporter = Arc::new(CommandExporter::new(&config.pdf_exporter_bin));
    info!("PDF exporter: {}", config.pdf_exporter_bin);

    // Build app state
    let state = AppState {
        generator,
        exporter,
        studio: Arc::new(Studio::new()),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
