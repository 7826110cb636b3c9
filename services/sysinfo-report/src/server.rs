//! Plain-text HTTP server
//!
//! Two routes, matched in order on method + path (query string ignored):
//!
//! - `GET /` - static greeting
//! - `GET /api/v1/sysinfo*` - full system report, or a fixed 500 body
//!
//! Everything else gets a fixed 404 body.

use anyhow::Result;
use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::Response,
    Router,
};
use host_common::{text_ok, text_response};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::collector::{Collector, FactsProvider};
use crate::config::ServerConfig;
use crate::hello_world;
use crate::report::build_report;

pub const SYSINFO_PATH: &str = "/api/v1/sysinfo";
pub const SYSINFO_ERROR_BODY: &str = "Error retrieving system information";
pub const NOT_FOUND_BODY: &str = "404 - Not Found";

/// Which handler a request is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Greeting,
    SysInfo,
    NotFound,
}

impl Route {
    /// Resolve a request; first match wins
    pub fn resolve(method: &Method, path: &str) -> Self {
        if *method != Method::GET {
            return Route::NotFound;
        }

        if path == "/" {
            Route::Greeting
        } else if path.starts_with(SYSINFO_PATH) {
            Route::SysInfo
        } else {
            Route::NotFound
        }
    }
}

/// Build the router serving facts from `collector`
pub fn router<P: FactsProvider>(collector: Collector<P>) -> Router {
    Router::new()
        .fallback(dispatch::<P>)
        .layer(TraceLayer::new_for_http())
        .with_state(collector)
}

/// Bind the configured address and serve until Ctrl-C
pub async fn serve<P: FactsProvider>(
    config: &ServerConfig,
    collector: Collector<P>,
) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server running at http://{}/", listener.local_addr()?);

    axum::serve(listener, router(collector))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutting down");
    Ok(())
}

async fn dispatch<P: FactsProvider>(
    State(collector): State<Collector<P>>,
    method: Method,
    uri: Uri,
) -> Response {
    match Route::resolve(&method, uri.path()) {
        Route::Greeting => text_ok(hello_world()),
        Route::SysInfo => match build_report(&collector).await {
            Ok(report) => text_ok(report),
            Err(e) => {
                tracing::error!("Failed to build system report: {}", e);
                text_response(StatusCode::INTERNAL_SERVER_ERROR, SYSINFO_ERROR_BODY)
            }
        },
        Route::NotFound => text_response(StatusCode::NOT_FOUND, NOT_FOUND_BODY),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Could not listen for Ctrl-C, serving until killed: {}", e);
        std::future::pending::<()>().await;
    }
}
