//! # fishcast
//!
//! Axum host for the FishCast Leptos app: server-side rendering, the
//! hydration bundle, a health check, and the analysis upload relay.

#![recursion_limit = "256"]

mod analyze;
mod config;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::analyze::AnalyzeProxy;
use crate::config::ServerConfig;

const DEFAULT_LOG_FILTER: &str = "fishcast=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    // Missing .env is normal outside development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fishcast server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    let leptos_options = config::leptos_options(&config)?;
    let addr = leptos_options.site_addr;

    let analyzer = AnalyzeProxy::new(config.analyze_url.clone())?;
    if !analyzer.is_configured() {
        tracing::warn!("FISHCAST_ANALYZE_URL not set; spot analysis uploads will fail");
    }

    let app = routes::app(leptos_options, analyzer);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "fishcast listening");
    axum::serve(listener, app).await?;
    Ok(())
}
