// =============================================================================
// STOREFRONT SERVICE - Main Entry Point
// =============================================================================
// HTTP storefront backend for the guitar shop:
// - Serves the product catalog (browse, filter, search, featured subset)
// - Manages the session shopping cart through a reducer-style state store
// - Runs a mocked authentication flow
// - Exposes Prometheus metrics for observability
//
// The catalog is a fixed in-memory list behind a provider that simulates
// network latency; nothing is persisted across restarts.
// =============================================================================

// -----------------------------------------------------------------------------
// MODULE DECLARATIONS
// -----------------------------------------------------------------------------
mod cart; // Cart ledger slice (cart.rs)
mod catalog; // Product data provider (catalog.rs)
mod config; // Configuration loading (config.rs)
mod data; // Seed catalog (data.rs)
mod error; // Error types (error.rs)
mod filter; // Catalog filter engine (filter.rs)
mod handlers; // HTTP request handlers (handlers.rs)
mod metrics; // Prometheus metrics setup (metrics.rs)
mod models; // Data structures (models.rs)
mod store; // Application state store (store.rs)

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::metrics::setup_metrics;
use crate::store::Store;

// -----------------------------------------------------------------------------
// APPLICATION STATE
// -----------------------------------------------------------------------------
// Shared across all request handlers via Arc. The store is the single
// process-wide state container; the catalog handle is cheap to share.
pub struct AppState {
    /// Product data provider over the seeded in-memory catalog
    pub catalog: Catalog,

    /// Reducer-style state store (catalog view, cart, auth slices)
    pub store: Store,

    /// Simulated latency of the mocked auth flow
    pub auth_latency: Duration,

    /// Prometheus metrics handle, used to render the /metrics output
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}

// -----------------------------------------------------------------------------
// MAIN FUNCTION
// -----------------------------------------------------------------------------
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in development; absence is fine
    dotenvy::dotenv().ok();

    // Structured JSON logging, RUST_LOG-driven
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting Storefront Service...");

    let config = Config::from_env()?;
    info!(port = config.port, "Configuration loaded");

    let metrics_handle = setup_metrics()?;
    info!("Prometheus metrics initialized");

    // Seed the in-memory catalog; the provider simulates network latency on
    // every operation (configurable, zero in tests)
    let products = data::seed_products(&config.asset_base_path);
    let catalog = Catalog::new(products, config.catalog_latency());
    info!(
        products = catalog.len(),
        latency_ms = config.catalog_latency_ms,
        "Catalog seeded"
    );

    // One store per process: empty cart, empty catalog view, idle auth
    let store = Store::new();

    let state = Arc::new(AppState {
        catalog,
        store,
        auth_latency: config.auth_latency(),
        metrics_handle,
    });

    // -------------------------------------------------------------------------
    // ROUTES
    // -------------------------------------------------------------------------
    let app = Router::new()
        // ----- Health & Readiness Endpoints -----
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        // ----- Metrics Endpoint -----
        .route("/metrics", get(handlers::metrics_handler))
        // ----- Product API Endpoints -----
        .route("/api/v1/products", get(handlers::list_products))
        .route("/api/v1/products/search", get(handlers::search_products))
        .route("/api/v1/products/featured", get(handlers::featured_products))
        .route("/api/v1/products/stats", get(handlers::catalog_stats))
        .route("/api/v1/products/:id", get(handlers::get_product))
        .route("/api/v1/catalog/view", get(handlers::catalog_view))
        // ----- Cart API Endpoints -----
        .route("/api/v1/cart", get(handlers::get_cart))
        .route("/api/v1/cart", delete(handlers::clear_cart))
        .route("/api/v1/cart/items", post(handlers::add_cart_item))
        .route("/api/v1/cart/items/:id", put(handlers::update_cart_item))
        .route("/api/v1/cart/items/:id", delete(handlers::remove_cart_item))
        // ----- Auth API Endpoints -----
        .route("/api/v1/auth/login", post(handlers::login))
        .route("/api/v1/auth/register", post(handlers::register))
        .route("/api/v1/auth/logout", post(handlers::logout))
        .route("/api/v1/auth/session", get(handlers::session))
        // ----- Middleware Layers -----
        // CORS: the browser storefront calls this API from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Log every request
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // -------------------------------------------------------------------------
    // START THE HTTP SERVER
    // -------------------------------------------------------------------------
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(address = %addr, "Storefront Service is listening");

    axum::serve(listener, app).await?;

    Ok(())
}
