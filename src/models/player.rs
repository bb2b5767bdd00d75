use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::game::Mark;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: String,
    pub username: String,
    pub password: String,
    /// Set while the player holds a seat in an unfinished game.
    pub busy: bool,
    /// Mark handed out when the player's latest game was arranged. It is
    /// not cleared when the game ends, only replaced by the next game.
    pub mark: Option<Mark>,
    pub created_at: DateTime<Utc>,
}

impl Player {
    pub fn new(username: String, password: String) -> Self {
        Player {
            id: Uuid::new_v4().to_string(),
            username,
            password,
            busy: false,
            mark: None,
            created_at: Utc::now(),
        }
    }

    /// Projection for listings; leaves the credential behind.
    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary {
            id: self.id.clone(),
            username: self.username.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new("anna".to_string(), "secret".to_string());

        assert!(!player.id.is_empty());
        assert_eq!(player.username, "anna");
        assert_eq!(player.password, "secret");
        assert!(!player.busy);
        assert!(player.mark.is_none());
    }

    #[test]
    fn test_player_id_uniqueness() {
        let first = Player::new("anna".to_string(), "secret".to_string());
        let second = Player::new("anna".to_string(), "secret".to_string());

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_summary_carries_id_and_username_only() {
        let player = Player::new("anna".to_string(), "secret".to_string());

        let summary = player.summary();

        assert_eq!(summary.id, player.id);
        assert_eq!(summary.username, player.username);

        let json = serde_json::to_value(&summary).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("id"));
        assert!(object.contains_key("username"));
    }

    #[test]
    fn test_summary_serialization_round_trip() {
        let summary = Player::new("anna".to_string(), "secret".to_string()).summary();

        let serialized = serde_json::to_string(&summary).unwrap();
        let deserialized: PlayerSummary = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, summary);
    }
}
