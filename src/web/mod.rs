// Web server — Axum-based check and report endpoints.
//
// One constructed collector is shared through AppState; handlers stay thin
// over the library core (validate, collect, score, render). No sessions,
// no storage — every request is self-contained and ephemeral.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::collect::Collector;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub collector: Arc<Collector>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(collector: Arc<Collector>, port: u16, bind: &str) -> Result<()> {
    let state = AppState { collector };
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Periscope listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router. Public so integration tests can drive it directly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/privacy-check", post(handlers::check::privacy_check))
        .route("/generate-report", post(handlers::report::generate_report))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Deployment health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
