//! HTTP API over the store and the transmission graph.

mod handlers;

use crate::config::Config;
use crate::db::Db;
use crate::error::{IsnadError, Result};
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
}

impl AppState {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

/// HTTP server wrapper
pub struct HttpServer {
    state: AppState,
    config: Config,
}

impl HttpServer {
    pub fn new(db: Db, config: Config) -> Self {
        Self {
            state: AppState::new(db),
            config,
        }
    }

    /// Run the HTTP server until it fails
    pub async fn run(&self) -> Result<()> {
        let app = create_router(self.state.clone(), &self.config.http_server.allowed_origins);
        let addr = self.config.http_addr();

        let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
            let error_msg = if e.kind() == std::io::ErrorKind::AddrInUse {
                format!(
                    "Port {} is already in use. Stop the other process or set http_server.port in config.toml",
                    self.config.http_server.port
                )
            } else {
                format!("Failed to bind to {}: {}", addr, e)
            };
            IsnadError::Io(std::io::Error::new(e.kind(), error_msg))
        })?;

        log::info!("Starting HTTP server on http://{}", addr);

        axum::serve(listener, app).await.map_err(|e| {
            IsnadError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("HTTP server error: {}", e),
            ))
        })?;

        Ok(())
    }
}

/// Build the axum router.
///
/// With no `allowed_origins` any origin may call the API (local development);
/// otherwise CORS is restricted to the listed origins.
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let cors = if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<axum::http::HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route(
            "/api/persons",
            get(handlers::handle_list_persons).post(handlers::handle_create_person),
        )
        .route(
            "/api/transmissions",
            get(handlers::handle_list_transmissions).post(handlers::handle_create_transmission),
        )
        .route(
            "/api/ijazas",
            get(handlers::handle_list_ijazas).post(handlers::handle_create_ijaza),
        )
        .route("/api/shortest", get(handlers::handle_shortest))
        .route("/api/generations", get(handlers::handle_generations))
        .route("/health", get(handlers::handle_health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
