//! PayPal checkout dev server
//!
//! Axum server hosting the checkout page. It serves the static frontend,
//! hands the page its SDK configuration, and forwards the two checkout
//! endpoints to the order backend.

mod config;
mod handlers;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::{capture_order, create_order, health_check, sdk_config};
use crate::state::AppState;

/// Build the router
pub fn app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        // Health & config
        .route("/health", get(health_check))
        .route("/api/config", get(sdk_config))
        // Checkout (forwarded to the order backend)
        .route("/api/checkout-orders", post(create_order))
        .route("/api/orders/{order_id}/capture", post(capture_order))
        // Static files (WASM frontend)
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment (before tracing, so RUST_LOG from .env applies)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config::log_directives(
            |key| std::env::var(key).ok(),
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    if config.client_id_configured() {
        tracing::info!("✓ PayPal client id configured");
    } else {
        tracing::warn!("⚠ PayPal client id not configured - the SDK will not load");
        tracing::warn!("  Set PAYPAL_CLIENT_ID in .env");
    }
    tracing::info!(backend = %config.backend_url, "Forwarding checkout calls");

    let addr = config.bind_addr.clone();
    let state = AppState::new(config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 checkout server running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                      - Health check");
    tracing::info!("  GET  /api/config                  - SDK configuration");
    tracing::info!("  POST /api/checkout-orders         - Create order");
    tracing::info!("  POST /api/orders/{{id}}/capture     - Capture order");
    tracing::info!("");

    axum::serve(listener, app(state)).await?;

    Ok(())
}
