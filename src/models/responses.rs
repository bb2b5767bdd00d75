use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::game::{Board, Mark};
use crate::models::history::Outcome;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegisterResponse {
    pub id: String,
}

/// Seat assignment returned by both game creation and join.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeatResponse {
    pub game_id: String,
    pub mark: Mark,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenGameResponse {
    pub game_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MoveResponse {
    /// The move stood and the game goes on.
    Accepted,
    /// The move ended the game; it is no longer playable.
    Over {
        outcome: Outcome,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        winner: Option<String>,
    },
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardResponse {
    pub grid: Board,
    /// The caller's own mark in this game.
    pub mark: Option<Mark>,
}
