//! HTTP surface: a small JSON API over the drafting pipeline. The service
//! is stateless; the working document travels in request and response
//! bodies.

pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::ai::TextGenerator;
use crate::document::DocumentAssembler;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8088,
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// Read host/port overrides from `LEXDRAFT_HOST` / `LEXDRAFT_PORT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = lookup("LEXDRAFT_HOST") {
            if !host.trim().is_empty() {
                config.host = host.trim().to_string();
            }
        }
        if let Some(port) = lookup("LEXDRAFT_PORT") {
            if let Ok(port) = port.trim().parse() {
                config.port = port;
            }
        }
        config
    }
}

/// Application state shared across handlers. The LLM handle is injected
/// here once, at startup; no component owns global client state.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn TextGenerator>,
    pub assembler: Arc<DocumentAssembler>,
}

/// Build the router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/generate", post(handlers::generate))
        .route("/api/chat", post(handlers::chat))
        .route("/api/merge", post(handlers::merge))
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/export", post(handlers::export))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server and serve until shutdown.
pub async fn run(state: AppState, config: ServerConfig) -> Result<(), std::io::Error> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid listen address {}:{}: {}", config.host, config.port, e),
            )
        })?;

    let app = router(state);
    let app = if config.enable_cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    };

    info!("starting lexdraft server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}
