use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crate::models::game::Mark;
use crate::models::player::Player;
use crate::repositories::errors::player_repository_errors::PlayerRepositoryError;

#[cfg(test)]
use mockall::automock;

/// Identity store. Registration is append-only; players are never removed.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait PlayerRepository: Send + Sync {
    async fn create(&self, player: &Player);
    async fn get(&self, player_id: &str) -> Result<Player, PlayerRepositoryError>;
    async fn list(&self) -> Vec<Player>;
    /// Atomically claims the player for a game and hands them `mark`.
    /// Fails when the player is unknown or already seated somewhere.
    async fn reserve(&self, player_id: &str, mark: Mark) -> Result<Player, PlayerRepositoryError>;
    /// Clears the busy flag. The mark stays until the next reservation.
    async fn release(&self, player_id: &str);
}

pub struct InMemoryPlayerRepository {
    players: RwLock<HashMap<String, Player>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn create(&self, player: &Player) {
        let mut players = self.players.write().await;
        players.insert(player.id.clone(), player.clone());
    }

    async fn get(&self, player_id: &str) -> Result<Player, PlayerRepositoryError> {
        let players = self.players.read().await;
        players
            .get(player_id)
            .cloned()
            .ok_or(PlayerRepositoryError::NotFound)
    }

    async fn list(&self) -> Vec<Player> {
        let players = self.players.read().await;
        players.values().cloned().collect()
    }

    async fn reserve(&self, player_id: &str, mark: Mark) -> Result<Player, PlayerRepositoryError> {
        let mut players = self.players.write().await;
        let player = players
            .get_mut(player_id)
            .ok_or(PlayerRepositoryError::NotFound)?;
        if player.busy {
            return Err(PlayerRepositoryError::AlreadyBusy);
        }
        player.busy = true;
        player.mark = Some(mark);
        Ok(player.clone())
    }

    async fn release(&self, player_id: &str) {
        let mut players = self.players.write().await;
        match players.get_mut(player_id) {
            Some(player) => player.busy = false,
            None => warn!(player_id, "release for unknown player"),
        }
    }
}
