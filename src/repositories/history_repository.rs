use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::history::GameRecord;

#[cfg(test)]
use mockall::automock;

/// Log of finished games, oldest first.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait HistoryRepository: Send + Sync {
    async fn record(&self, record: GameRecord);
    async fn all(&self) -> Vec<GameRecord>;
}

/// Ring-buffered log: once `capacity` records are held, each new record
/// evicts the oldest one.
pub struct InMemoryHistoryRepository {
    records: RwLock<VecDeque<GameRecord>>,
    capacity: usize,
}

impl InMemoryHistoryRepository {
    pub fn new(capacity: usize) -> Self {
        // a zero-capacity log could never record anything
        let capacity = capacity.max(1);
        Self {
            records: RwLock::new(VecDeque::new()),
            capacity,
        }
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn record(&self, record: GameRecord) {
        let mut records = self.records.write().await;
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }

    async fn all(&self) -> Vec<GameRecord> {
        let records = self.records.read().await;
        records.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::history::Outcome;
    use chrono::Utc;

    fn record(game_id: &str) -> GameRecord {
        GameRecord {
            game_id: game_id.to_string(),
            board: [[None; 3]; 3],
            outcome: Outcome::Draw,
            winner: None,
            first: "anna-id".to_string(),
            second: Some("boris-id".to_string()),
            finished_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_records_are_returned_oldest_first() {
        let repository = InMemoryHistoryRepository::new(10);

        repository.record(record("game-1")).await;
        repository.record(record("game-2")).await;
        repository.record(record("game-3")).await;

        let all = repository.all().await;
        let ids: Vec<&str> = all.iter().map(|r| r.game_id.as_str()).collect();
        assert_eq!(ids, ["game-1", "game-2", "game-3"]);
    }

    #[tokio::test]
    async fn test_capacity_evicts_the_oldest_record() {
        let repository = InMemoryHistoryRepository::new(2);

        repository.record(record("game-1")).await;
        repository.record(record("game-2")).await;
        repository.record(record("game-3")).await;

        let all = repository.all().await;
        let ids: Vec<&str> = all.iter().map(|r| r.game_id.as_str()).collect();
        assert_eq!(ids, ["game-2", "game-3"]);
    }

    #[tokio::test]
    async fn test_zero_capacity_still_keeps_the_latest_record() {
        let repository = InMemoryHistoryRepository::new(0);

        repository.record(record("game-1")).await;
        repository.record(record("game-2")).await;

        let all = repository.all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].game_id, "game-2");
    }
}
