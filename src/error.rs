use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::services::errors::game_service_errors::GameServiceError;
use crate::services::errors::player_service_errors::PlayerServiceError;

/// Error surface of the HTTP layer. Every service failure maps onto a
/// status code plus a stable machine-readable `code` tag in the body.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    PlayerService(PlayerServiceError),
    GameService(GameServiceError),
}

impl From<PlayerServiceError> for ApiError {
    fn from(error: PlayerServiceError) -> Self {
        ApiError::PlayerService(error)
    }
}

impl From<GameServiceError> for ApiError {
    fn from(error: GameServiceError) -> Self {
        ApiError::GameService(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Unauthorized".to_string(),
            ),
            ApiError::PlayerService(error) => {
                let (status, code) = match error {
                    PlayerServiceError::PlayerNotFound => (StatusCode::NOT_FOUND, "not_found"),
                    PlayerServiceError::ValidationError(_) => {
                        (StatusCode::BAD_REQUEST, "validation")
                    }
                };
                (status, code, error.to_string())
            }
            ApiError::GameService(error) => {
                let (status, code) = match error {
                    GameServiceError::GameNotFound => (StatusCode::NOT_FOUND, "not_found"),
                    GameServiceError::PlayerNotFound | GameServiceError::NotAParticipant => {
                        (StatusCode::UNAUTHORIZED, "unauthorized")
                    }
                    GameServiceError::PlayerBusy => (StatusCode::CONFLICT, "player_busy"),
                    GameServiceError::GameFull => (StatusCode::CONFLICT, "game_full"),
                    GameServiceError::WaitingForOpponent | GameServiceError::OutOfTurn => {
                        (StatusCode::CONFLICT, "out_of_turn")
                    }
                    GameServiceError::InvalidCoordinate => {
                        (StatusCode::BAD_REQUEST, "invalid_coordinate")
                    }
                    GameServiceError::CellOccupied => (StatusCode::CONFLICT, "cell_occupied"),
                };
                (status, code, error.to_string())
            }
        };

        (status, Json(json!({ "error": message, "code": code }))).into_response()
    }
}
