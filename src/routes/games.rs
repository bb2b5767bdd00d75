use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedPlayer;
use crate::models::requests::MoveRequest;
use crate::models::responses::{BoardResponse, MoveResponse, OpenGameResponse, SeatResponse};
use crate::models::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/games", post(create_game))
        .route("/games/open", get(open_games))
        .route("/games/{game_id}/join", post(join_game))
        .route("/games/{game_id}/move", post(make_move))
        .route("/games/{game_id}/board", get(board))
}

async fn create_game(
    State(state): State<AppState>,
    player: AuthenticatedPlayer,
) -> Result<Json<SeatResponse>, ApiError> {
    match state.game_service.create_game(&player.player_id).await {
        Ok((game, mark)) => {
            debug!("game {} created by {}", game.id, player.player_id);
            Ok(Json(SeatResponse {
                game_id: game.id,
                mark,
            }))
        }
        Err(e) => {
            warn!("failed to create game for {}: {}", player.player_id, e);
            Err(e.into())
        }
    }
}

async fn join_game(
    State(state): State<AppState>,
    player: AuthenticatedPlayer,
    Path(game_id): Path<String>,
) -> Result<Json<SeatResponse>, ApiError> {
    match state
        .game_service
        .join_game(&player.player_id, &game_id)
        .await
    {
        Ok((game, mark)) => Ok(Json(SeatResponse {
            game_id: game.id,
            mark,
        })),
        Err(e) => {
            warn!(
                "failed to join game {} as {}: {}",
                game_id, player.player_id, e
            );
            Err(e.into())
        }
    }
}

async fn open_games(State(state): State<AppState>) -> Json<Vec<OpenGameResponse>> {
    Json(state.game_service.open_games().await)
}

async fn make_move(
    State(state): State<AppState>,
    player: AuthenticatedPlayer,
    Path(game_id): Path<String>,
    Json(body): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    match state
        .game_service
        .make_move(&player.player_id, &game_id, body.row, body.column)
        .await
    {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            warn!(
                "rejected move in game {} by {}: {}",
                game_id, player.player_id, e
            );
            Err(e.into())
        }
    }
}

async fn board(
    State(state): State<AppState>,
    player: AuthenticatedPlayer,
    Path(game_id): Path<String>,
) -> Result<Json<BoardResponse>, ApiError> {
    match state.game_service.board(&player.player_id, &game_id).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            warn!(
                "failed to read board of game {} for {}: {}",
                game_id, player.player_id, e
            );
            Err(e.into())
        }
    }
}
