//! Dashboard Host
//!
//! Serves the built dashboard and forwards its JSON-RPC calls, built with Axum.
//!
//! # Endpoints
//!
//! - `POST /v2` - Forwarded to `<api.url>/v2`
//! - `GET /health` - Liveness and upstream info
//! - `GET /*` - Files from the dashboard bundle; unknown paths get
//!   `index.html` so client-side routes load on refresh and deep links
//!
//! # Example
//!
//! ```rust,ignore
//! use anchor_platform::config::Config;
//! use anchor_platform::server::serve;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     serve(Config::from_env()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::Config;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let dist = state.config.server.dist_dir.clone();
    let bundle = ServeDir::new(&dist).fallback(ServeFile::new(dist.join("index.html")));
    let cors = cors_layer(&state.config.server.cors_origins);

    Router::new()
        .route("/v2", post(routes::forward_rpc))
        .route("/health", get(routes::health))
        .fallback_service(bundle)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Start the dashboard host
pub async fn serve(config: Config) -> Result<(), ServerError> {
    let index = config.server.dist_dir.join("index.html");
    if !index.exists() {
        return Err(ServerError::MissingBundle(
            config.server.dist_dir.display().to_string(),
        ));
    }

    let addr = config.server.addr();
    tracing::info!("Dashboard bundle: {:?}", config.server.dist_dir);
    tracing::info!("Forwarding JSON-RPC to {}", config.api.url);

    let router = build_router(AppState::new(config)?);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Anchor Platform dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard host shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
