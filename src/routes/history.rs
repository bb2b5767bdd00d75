use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::models::history::GameRecord;
use crate::models::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/history", get(history))
}

/// Finished games, oldest first, bounded by the configured capacity.
async fn history(State(state): State<AppState>) -> Json<Vec<GameRecord>> {
    Json(state.history_service.all().await)
}
