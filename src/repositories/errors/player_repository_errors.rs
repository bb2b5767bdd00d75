#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerRepositoryError {
    NotFound,
    AlreadyBusy,
}

impl std::fmt::Display for PlayerRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerRepositoryError::NotFound => write!(f, "Player not found"),
            PlayerRepositoryError::AlreadyBusy => write!(f, "Player already holds a seat"),
        }
    }
}

impl std::error::Error for PlayerRepositoryError {}
