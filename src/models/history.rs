use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::game::Board;

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Draw,
}

/// Immutable snapshot of a finished game, kept by the history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: String,
    pub board: Board,
    pub outcome: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    pub first: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<String>,
    pub finished_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::game::Mark;

    fn record(outcome: Outcome, winner: Option<String>) -> GameRecord {
        GameRecord {
            game_id: "game-1".to_string(),
            board: [[Some(Mark::X); 3], [Some(Mark::O); 3], [None; 3]],
            outcome,
            winner,
            first: "anna-id".to_string(),
            second: Some("boris-id".to_string()),
            finished_at: Utc::now(),
        }
    }

    #[test]
    fn test_outcome_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Outcome::Win).unwrap(), "win");
        assert_eq!(serde_json::to_value(Outcome::Draw).unwrap(), "draw");
    }

    #[test]
    fn test_won_record_carries_the_winner() {
        let record = record(Outcome::Win, Some("anna-id".to_string()));

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["outcome"], "win");
        assert_eq!(json["winner"], "anna-id");
        assert_eq!(json["first"], "anna-id");
        assert_eq!(json["second"], "boris-id");
    }

    #[test]
    fn test_drawn_record_omits_the_winner_key() {
        let record = record(Outcome::Draw, None);

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["outcome"], "draw");
        assert!(json.as_object().unwrap().get("winner").is_none());
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = record(Outcome::Win, Some("anna-id".to_string()));

        let serialized = serde_json::to_string(&record).unwrap();
        let deserialized: GameRecord = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, record);
    }
}
