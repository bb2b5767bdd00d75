use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Coordinates arrive as raw integers so the engine itself can reject
/// out-of-range values instead of the deserializer doing it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveRequest {
    pub row: i64,
    pub column: i64,
}
