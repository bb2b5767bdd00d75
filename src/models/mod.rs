pub mod game;
pub mod history;
pub mod player;
pub mod requests;
pub mod responses;

use std::sync::Arc;

use crate::config::Config;
use crate::repositories::game_repository::InMemoryGameRepository;
use crate::repositories::history_repository::InMemoryHistoryRepository;
use crate::repositories::player_repository::{InMemoryPlayerRepository, PlayerRepository};
use crate::services::game_service::GameService;
use crate::services::history_service::HistoryService;
use crate::services::player_service::PlayerService;

#[derive(Clone)]
pub struct AppState {
    pub player_service: Arc<PlayerService>,
    pub game_service: Arc<GameService>,
    pub history_service: Arc<HistoryService>,
}

impl AppState {
    /// Wires the in-memory stores and the services over them.
    pub fn new(config: &Config) -> Self {
        let player_repository: Arc<dyn PlayerRepository + Send + Sync> =
            Arc::new(InMemoryPlayerRepository::new());
        let game_repository = Arc::new(InMemoryGameRepository::new());
        let history_repository = Arc::new(InMemoryHistoryRepository::new(config.history_capacity));

        let player_service = Arc::new(PlayerService::new(player_repository.clone()));
        let history_service = Arc::new(HistoryService::new(history_repository));
        let game_service = Arc::new(GameService::new(
            game_repository,
            player_repository,
            history_service.clone(),
        ));

        AppState {
            player_service,
            game_service,
            history_service,
        }
    }
}
