use crate::models::game::MoveError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameRepositoryError {
    NotFound,
    SeatsTaken,
    Rejected(MoveError),
}

impl std::fmt::Display for GameRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameRepositoryError::NotFound => write!(f, "Game not found"),
            GameRepositoryError::SeatsTaken => write!(f, "Game already has two seat holders"),
            GameRepositoryError::Rejected(rejection) => write!(f, "{}", rejection),
        }
    }
}

impl std::error::Error for GameRepositoryError {}
