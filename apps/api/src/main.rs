mod config;
mod errors;
mod extract;
mod generation;
mod llm_client;
mod models;
mod parser;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::service::{ContentGenerator, DisabledGenerator};
use crate::llm_client::LlmClient;
use crate::parser::ResumeParser;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobFit API v{}", env!("CARGO_PKG_VERSION"));

    let parser = Arc::new(ResumeParser::new(config.parser_config()));
    info!(
        "Résumé parser initialized ({} technical keywords, heading fallback {})",
        parser.config().technical_keywords.len(),
        if parser.config().heading_fallback { "on" } else { "off" }
    );

    // Generation is optional: without a key the parse routes still work.
    let generator: Arc<dyn ContentGenerator> = match config.anthropic_api_key.clone() {
        Some(key) => {
            let llm = LlmClient::new(key, config.llm_model.clone())?;
            info!("LLM client initialized (model: {})", llm.model());
            Arc::new(llm)
        }
        None => {
            info!("ANTHROPIC_API_KEY not set; application generation disabled");
            Arc::new(DisabledGenerator)
        }
    };

    let state = AppState {
        parser,
        generator,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS once a frontend origin is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
