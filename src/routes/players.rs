use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::models::player::PlayerSummary;
use crate::models::requests::RegisterRequest;
use crate::models::responses::RegisterResponse;
use crate::models::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/players", get(list_players))
}

async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    match state
        .player_service
        .register(&body.username, &body.password)
        .await
    {
        Ok(player) => {
            debug!("player registered: {}", player.id);
            Ok((StatusCode::CREATED, Json(RegisterResponse { id: player.id })))
        }
        Err(e) => {
            warn!("failed to register player {}: {}", body.username, e);
            Err(e.into())
        }
    }
}

async fn list_players(State(state): State<AppState>) -> Json<Vec<PlayerSummary>> {
    Json(state.player_service.list().await)
}
