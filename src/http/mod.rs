//! HTTP surface: router assembly.

pub mod routes;

use std::path::PathBuf;

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use self::routes::AppState;

/// Health and static assets first; every other path goes through the page route table.
pub fn router(state: AppState, static_dir: PathBuf) -> Router {
    Router::new()
        .route("/healthz", get(routes::healthz))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(routes::page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
