use std::sync::Arc;

use tracing::info;

use crate::models::history::GameRecord;
use crate::repositories::history_repository::HistoryRepository;

pub struct HistoryService {
    repository: Arc<dyn HistoryRepository + Send + Sync>,
}

impl HistoryService {
    pub fn new(repository: Arc<dyn HistoryRepository + Send + Sync>) -> Self {
        HistoryService { repository }
    }

    pub async fn record(&self, record: GameRecord) {
        info!(game_id = %record.game_id, outcome = ?record.outcome, "game recorded");
        self.repository.record(record).await;
    }

    pub async fn all(&self) -> Vec<GameRecord> {
        self.repository.all().await
    }
}
