//! HTTP transport implementation.
//!
//! Serves every resource of the [`LabServer`] as a REST API, plus a root
//! greeting and a health check.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::LabServer;
use crate::domains::{
    books::{BOOKS_PATH, book_routes},
    coffee_shops::{COFFEE_SHOPS_PATH, coffee_shop_routes},
    items::{ITEMS_PATH, item_routes},
};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, server: LabServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Coffee shops: {}", COFFEE_SHOPS_PATH);
        info!("  → Books:        {}", BOOKS_PATH);
        info!("  → Items:        {}", ITEMS_PATH);
        info!("  → Health:       GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(TransportError::http)?;

        Ok(())
    }
}

/// Build the application router with every resource mounted.
pub fn build_router(server: LabServer, enable_cors: bool) -> Router {
    let app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .merge(coffee_shop_routes())
        .merge(book_routes())
        .merge(item_routes())
        .with_state(server)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app.layer(cors)
    } else {
        app
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Root handler.
async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Hello World" }))
}

/// Health check endpoint.
async fn health_check(State(server): State<LabServer>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "name": server.name(),
        "version": server.version(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
