//! Supply chain backend HTTP service.
//!
//! Serves a single `GET /health` route with structured access logging
//! (tracing), panic recovery and graceful shutdown.

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use config::Config;
use error::{Result, ServerError};

/// Creates the Axum application router with all routes and middleware.
pub fn create_app() -> Router {
    let router = Router::new()
        .route("/health", get(routes::health::check))
        .fallback(routes::fallback::not_found);

    with_middleware(router)
}

/// Wraps a router in panic recovery and request tracing.
///
/// Tracing is the outer layer so recovered panics are logged as 500s.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(routes::fallback::panic_response))
        .layer(TraceLayer::new_for_http())
}

/// Binds the listener on the configured address.
///
/// Fails with [`ServerError::Bind`] when the port is already taken.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves the application on `listener` until `shutdown` resolves, then
/// drains in-flight requests.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    match listener.local_addr() {
        Ok(addr) => tracing::info!(%addr, "supply chain backend listening"),
        Err(err) => tracing::warn!(error = %err, "listening on unknown local address"),
    }

    axum::serve(listener, create_app())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Binds and serves with the given configuration until `shutdown` resolves.
pub async fn run<F>(config: &Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = bind(config).await?;
    serve(listener, shutdown).await
}
