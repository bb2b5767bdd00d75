use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

use models::AppState;

/// Assembles the full router over an already-wired state.
pub fn build_app(state: AppState) -> Router {
    // ToDo: Tighten this up
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::players::routes())
        .merge(routes::games::routes())
        .merge(routes::history::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
