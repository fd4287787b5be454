//! Libris Server - Book Catalog Service
//!
//! A Rust REST API server for a file-backed book catalog with Open Library
//! enrichment.

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libris_server::{
    api,
    config::AppConfig,
    services::{openlibrary::OpenLibraryResolver, Services},
    store::CatalogStore,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("libris_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Libris Server v{}", env!("CARGO_PKG_VERSION"));

    // Load the catalog from its snapshot file
    let store = Arc::new(CatalogStore::load(&config.storage.snapshot_path).await);
    tracing::info!("Catalog loaded with {} books", store.len().await);

    // Build the Open Library client
    let resolver =
        OpenLibraryResolver::new(&config.openlibrary).expect("Failed to build Open Library client");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create services and application state
    let services = Services::new(store, Arc::new(resolver));

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Per-client request budget, keyed by peer IP
    let governor_conf = Box::new(
        GovernorConfigBuilder::default()
            .per_second(state.config.rate_limit.per_second)
            .burst_size(state.config.rate_limit.burst_size)
            .finish()
            .expect("Invalid rate limit configuration"),
    );

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Books (catalog)
        .route("/books", get(api::books::list_books))
        .route("/books", post(api::books::create_book))
        .route("/books/manual", post(api::books::create_book_manual))
        .route("/books/:isbn", get(api::books::get_book))
        .route("/books/:isbn", delete(api::books::delete_book))
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        .layer(GovernorLayer {
            config: Box::leak(governor_conf),
        })
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
