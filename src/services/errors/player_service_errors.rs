#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerServiceError {
    PlayerNotFound,
    ValidationError(String),
}

impl std::fmt::Display for PlayerServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerServiceError::PlayerNotFound => write!(f, "Player not found"),
            PlayerServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for PlayerServiceError {}
