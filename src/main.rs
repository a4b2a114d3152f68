use crate::clock::{Clock, SystemClock};
use crate::composer::PageComposer;
use crate::config::PlantCareConfig;
use crate::domain::ILOVEPLANTCARE;
use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod clock;
pub mod composer;
pub mod config;
pub mod domain;
mod features;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub composer: Arc<PageComposer>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<PlantCareConfig>,
}

// home route first, anything else is looked up in the public dir (og image, logo, css)
pub fn app(state: AppState) -> Router {
    let public_dir = state.config.public_dir.clone();

    Router::new()
        .merge(features::home::home_router())
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // load centralized config
    let config = PlantCareConfig::from_env();
    info!(
        "Config: bind {}, public dir {}, display offset {}",
        config.bind_addr,
        config.public_dir.display(),
        config.display_offset
    );

    // templates compile here, so a broken template stops the boot instead of failing requests
    let composer = PageComposer::new(ILOVEPLANTCARE, &features::home::HOME)?;

    let app_state = AppState {
        composer: Arc::new(composer),
        clock: Arc::new(SystemClock),
        config: Arc::new(config.clone()),
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
