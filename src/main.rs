// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::application::catalog_service::CatalogService;
use crate::application::session::Session;
use crate::application::visualization_service::VisualizationService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_timeseries::HttpTimeseriesClient;
use crate::infrastructure::sqlite_catalog::SqliteCatalog;
use crate::infrastructure::state_publisher::WatchPublisher;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    conversation_state, health_check, plot_signal, signal_types, stream_conversation_state,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let app_config = load_app_config()?;

    // Create adapters (infrastructure layer)
    let catalog = Arc::new(SqliteCatalog::open(Path::new(&app_config.database.path))?);
    let timeseries = Arc::new(HttpTimeseriesClient::new(app_config.data_service.base_url));
    let (publisher, state_rx) = WatchPublisher::channel();

    // Create services (application layer)
    let session = Arc::new(Session::new(Arc::new(publisher)));
    let catalog_service = CatalogService::new(catalog.clone());
    let visualization_service = VisualizationService::new(catalog, timeseries, session.clone());

    // Create application state
    let state = Arc::new(AppState {
        catalog_service,
        visualization_service,
        session,
        state_rx,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/tools/signal-types", post(signal_types))
        .route("/tools/plot-signal", post(plot_signal))
        .route("/state", get(conversation_state))
        .route("/state/stream", get(stream_conversation_state))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = app_config.server.bind.parse()?;
    tracing::info!("Starting powersim-copilot tool service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
