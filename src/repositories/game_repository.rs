use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::game::{Game, Mark, MoveOutcome};
use crate::models::history::Outcome;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;

#[cfg(test)]
use mockall::automock;

/// What the registry reports back for an accepted move.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayedMove {
    /// The game continues under the same registry entry.
    Accepted,
    /// The move was terminal: the game has left the registry and this is
    /// its final state.
    Finished {
        game: Game,
        outcome: Outcome,
        winner: Option<String>,
    },
}

/// Registry of unfinished games. A terminal move removes its game, so
/// everything in here is either open or actively being played.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait GameRepository: Send + Sync {
    async fn insert(&self, game: &Game);
    async fn get(&self, game_id: &str) -> Result<Game, GameRepositoryError>;
    async fn open_games(&self) -> Vec<Game>;
    /// Atomically fills the second seat and returns the updated game.
    async fn join(&self, game_id: &str, joiner_id: &str) -> Result<Game, GameRepositoryError>;
    /// Validates and applies one move under the registry lock, removing
    /// the game when the move ends it.
    async fn play(
        &self,
        game_id: &str,
        player_id: &str,
        mark: Option<Mark>,
        row: i64,
        column: i64,
    ) -> Result<PlayedMove, GameRepositoryError>;
}

pub struct InMemoryGameRepository {
    games: RwLock<HashMap<String, Game>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryGameRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn insert(&self, game: &Game) {
        let mut games = self.games.write().await;
        games.insert(game.id.clone(), game.clone());
    }

    async fn get(&self, game_id: &str) -> Result<Game, GameRepositoryError> {
        let games = self.games.read().await;
        games
            .get(game_id)
            .cloned()
            .ok_or(GameRepositoryError::NotFound)
    }

    async fn open_games(&self) -> Vec<Game> {
        let games = self.games.read().await;
        games
            .values()
            .filter(|game| game.is_open())
            .cloned()
            .collect()
    }

    async fn join(&self, game_id: &str, joiner_id: &str) -> Result<Game, GameRepositoryError> {
        let mut games = self.games.write().await;
        let game = games.get_mut(game_id).ok_or(GameRepositoryError::NotFound)?;
        if !game.try_seat(joiner_id) {
            return Err(GameRepositoryError::SeatsTaken);
        }
        Ok(game.clone())
    }

    async fn play(
        &self,
        game_id: &str,
        player_id: &str,
        mark: Option<Mark>,
        row: i64,
        column: i64,
    ) -> Result<PlayedMove, GameRepositoryError> {
        let mut games = self.games.write().await;
        let outcome = {
            let game = games.get_mut(game_id).ok_or(GameRepositoryError::NotFound)?;
            game.play(player_id, mark, row, column)
                .map_err(GameRepositoryError::Rejected)?
        };
        match outcome {
            MoveOutcome::Accepted => Ok(PlayedMove::Accepted),
            MoveOutcome::Won { winner } => {
                let game = games.remove(game_id).ok_or(GameRepositoryError::NotFound)?;
                Ok(PlayedMove::Finished {
                    game,
                    outcome: Outcome::Win,
                    winner: Some(winner),
                })
            }
            MoveOutcome::Drawn => {
                let game = games.remove(game_id).ok_or(GameRepositoryError::NotFound)?;
                Ok(PlayedMove::Finished {
                    game,
                    outcome: Outcome::Draw,
                    winner: None,
                })
            }
        }
    }
}
