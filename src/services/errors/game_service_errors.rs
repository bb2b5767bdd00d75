use crate::models::game::MoveError;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::repositories::errors::player_repository_errors::PlayerRepositoryError;

/// Every way an arrangement or move request can fail, one variant per
/// distinct caller-visible rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameServiceError {
    GameNotFound,
    PlayerNotFound,
    NotAParticipant,
    PlayerBusy,
    GameFull,
    WaitingForOpponent,
    OutOfTurn,
    InvalidCoordinate,
    CellOccupied,
}

impl std::fmt::Display for GameServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameServiceError::GameNotFound => write!(f, "Game not found"),
            GameServiceError::PlayerNotFound => write!(f, "Player not found"),
            GameServiceError::NotAParticipant => write!(f, "Not a participant in this game"),
            GameServiceError::PlayerBusy => write!(f, "Game already in progress"),
            GameServiceError::GameFull => write!(f, "Opponent is still playing"),
            GameServiceError::WaitingForOpponent => {
                write!(f, "Waiting for an opponent to join")
            }
            GameServiceError::OutOfTurn => write!(f, "Not your turn"),
            GameServiceError::InvalidCoordinate => write!(f, "Invalid move"),
            GameServiceError::CellOccupied => {
                write!(f, "Invalid move, the position is already occupied")
            }
        }
    }
}

impl std::error::Error for GameServiceError {}

impl From<PlayerRepositoryError> for GameServiceError {
    fn from(error: PlayerRepositoryError) -> Self {
        match error {
            PlayerRepositoryError::NotFound => GameServiceError::PlayerNotFound,
            PlayerRepositoryError::AlreadyBusy => GameServiceError::PlayerBusy,
        }
    }
}

impl From<GameRepositoryError> for GameServiceError {
    fn from(error: GameRepositoryError) -> Self {
        match error {
            GameRepositoryError::NotFound => GameServiceError::GameNotFound,
            GameRepositoryError::SeatsTaken => GameServiceError::GameFull,
            GameRepositoryError::Rejected(rejection) => match rejection {
                MoveError::NotASeatHolder => GameServiceError::NotAParticipant,
                MoveError::WaitingForOpponent => GameServiceError::WaitingForOpponent,
                MoveError::OutOfTurn => GameServiceError::OutOfTurn,
                MoveError::OutOfBounds => GameServiceError::InvalidCoordinate,
                MoveError::CellOccupied => GameServiceError::CellOccupied,
            },
        }
    }
}
