mod analysis;
mod config;
mod errors;
mod extraction;
mod inference;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::analysis::catalog::SkillCatalog;
use crate::config::Config;
use crate::inference::{HuggingFaceClient, InsightProvider, NoopInsight};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // Skill catalog is immutable after this point
    let catalog = Arc::new(SkillCatalog::builtin()?);
    info!(
        "Skill catalog loaded: {} skills, {} roles (default: {})",
        catalog.skills().len(),
        catalog.roles().len(),
        catalog.default_role()
    );

    let insight = build_insight_provider(&config)?;

    let analyzer = ResumeAnalyzer::new(catalog, insight, config.match_mode);
    info!("Skill match mode: {:?}", analyzer.mode());

    let state = AppState {
        config: config.clone(),
        analyzer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// External inference is off unless explicitly enabled.
fn build_insight_provider(config: &Config) -> Result<Arc<dyn InsightProvider>> {
    if !config.inference_enabled {
        info!("External inference disabled");
        return Ok(Arc::new(NoopInsight));
    }

    let client = HuggingFaceClient::new(
        config.inference_api_url.clone(),
        config.inference_api_token.clone(),
        config.inference_timeout,
    )?;
    info!(
        "External inference enabled ({}), best effort only",
        config.inference_api_url
    );
    Ok(Arc::new(client))
}
