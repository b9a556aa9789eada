//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the route table once, at startup
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve on a TCP or Unix domain socket listener
//! - Drain in-flight requests on shutdown

use axum::{body::Body, http::Request, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::QrServConfig;
use crate::http::cache::CachePolicy;
use crate::http::handlers::{html_handler, png_handler, trailing_slash_redirect};
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::net::Listener;

/// Application state injected into handlers.
///
/// Read-only after startup; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<CachePolicy>,
    pub module_size: u32,
}

/// HTTP server for the QR service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server.
    ///
    /// `cache` is computed once by the caller and shared by every request.
    pub fn new(config: QrServConfig, cache: CachePolicy) -> Self {
        let state = AppState {
            cache: Arc::new(cache),
            module_size: config.render.module_size,
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &QrServConfig, state: AppState) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(set_request_id_layer())
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = request_id(request).unwrap_or("unknown"),
                    )
                }),
            )
            .layer(TimeoutLayer::with_status_code(
                axum::http::StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(config.timeouts.request_secs),
            ))
            .layer(propagate_request_id_layer());

        // Wildcards never match an empty tail, so the bare routes are listed too.
        Router::new()
            .route("/png", get(trailing_slash_redirect))
            .route("/png/", get(png_handler))
            .route("/png/{*payload}", get(png_handler))
            .route("/html", get(trailing_slash_redirect))
            .route("/html/", get(html_handler))
            .route("/html/{*payload}", get(html_handler))
            .with_state(state)
            .layer(middleware)
    }

    /// Serve until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: Listener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        tracing::info!(
            address = %listener.describe(),
            "HTTP server starting"
        );

        let signal = async move {
            let _ = shutdown.recv().await;
            tracing::info!("Shutdown signal received, draining connections");
        };

        match listener {
            Listener::Tcp(inner) => {
                axum::serve(inner, self.router)
                    .with_graceful_shutdown(signal)
                    .await?;
            }
            #[cfg(unix)]
            Listener::Unix { inner, path } => {
                axum::serve(inner, self.router)
                    .with_graceful_shutdown(signal)
                    .await?;
                if let Err(e) = std::fs::remove_file(&path) {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to remove socket file"
                    );
                }
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
