use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::models::game::{Game, Mark};
use crate::models::history::GameRecord;
use crate::models::responses::{BoardResponse, MoveResponse, OpenGameResponse};
use crate::repositories::game_repository::{GameRepository, PlayedMove};
use crate::repositories::player_repository::PlayerRepository;
use crate::services::errors::game_service_errors::GameServiceError;
use crate::services::history_service::HistoryService;

pub struct GameService {
    games: Arc<dyn GameRepository + Send + Sync>,
    players: Arc<dyn PlayerRepository + Send + Sync>,
    history: Arc<HistoryService>,
}

impl GameService {
    pub fn new(
        games: Arc<dyn GameRepository + Send + Sync>,
        players: Arc<dyn PlayerRepository + Send + Sync>,
        history: Arc<HistoryService>,
    ) -> Self {
        GameService {
            games,
            players,
            history,
        }
    }

    /// Opens a new game with the caller in the first seat and a randomly
    /// drawn mark. The caller is reserved first, so a player already in a
    /// game cannot open another.
    pub async fn create_game(&self, player_id: &str) -> Result<(Game, Mark), GameServiceError> {
        let mark = if rand::random::<bool>() {
            Mark::X
        } else {
            Mark::O
        };
        let player = self.players.reserve(player_id, mark).await?;
        let game = Game::new(&player.id);
        self.games.insert(&game).await;
        info!(game_id = %game.id, player_id = %player.id, %mark, "game created");
        Ok((game, mark))
    }

    /// Takes the second seat of an open game, handing the joiner the mark
    /// opposite the creator's. The creator keeps the first move.
    pub async fn join_game(
        &self,
        player_id: &str,
        game_id: &str,
    ) -> Result<(Game, Mark), GameServiceError> {
        let game = self.games.get(game_id).await?;
        let creator = self
            .players
            .get(&game.first)
            .await
            .map_err(|_| GameServiceError::PlayerNotFound)?;
        let mark = match creator.mark {
            Some(creator_mark) => creator_mark.opposite(),
            // the creator was handed a mark when the game was opened
            None => Mark::O,
        };
        let joiner = self.players.reserve(player_id, mark).await?;
        match self.games.join(game_id, &joiner.id).await {
            Ok(joined) => {
                info!(game_id, joiner_id = %joiner.id, %mark, "player joined game");
                Ok((joined, mark))
            }
            Err(error) => {
                // the seat went away between the lookup and the join
                self.players.release(&joiner.id).await;
                Err(error.into())
            }
        }
    }

    /// Games still waiting for a second player, oldest first.
    pub async fn open_games(&self) -> Vec<OpenGameResponse> {
        let mut games = self.games.open_games().await;
        games.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        games
            .into_iter()
            .map(|game| OpenGameResponse {
                game_id: game.id,
                created_at: game.created_at,
            })
            .collect()
    }

    /// Applies one move. A terminal move frees both seats and writes the
    /// finished game into the history log.
    pub async fn make_move(
        &self,
        player_id: &str,
        game_id: &str,
        row: i64,
        column: i64,
    ) -> Result<MoveResponse, GameServiceError> {
        let player = self
            .players
            .get(player_id)
            .await
            .map_err(|_| GameServiceError::PlayerNotFound)?;
        let played = self
            .games
            .play(game_id, &player.id, player.mark, row, column)
            .await?;
        match played {
            PlayedMove::Accepted => Ok(MoveResponse::Accepted),
            PlayedMove::Finished {
                game,
                outcome,
                winner,
            } => {
                self.players.release(&game.first).await;
                if let Some(second) = &game.second {
                    self.players.release(second).await;
                }
                let record = GameRecord {
                    game_id: game.id.clone(),
                    board: game.board,
                    outcome: outcome.clone(),
                    winner: winner.clone(),
                    first: game.first.clone(),
                    second: game.second.clone(),
                    finished_at: Utc::now(),
                };
                self.history.record(record).await;
                info!(game_id = %game.id, outcome = ?outcome, "game finished");
                Ok(MoveResponse::Over { outcome, winner })
            }
        }
    }

    /// Snapshot of the grid plus the caller's own mark. Only seat holders
    /// may look.
    pub async fn board(
        &self,
        player_id: &str,
        game_id: &str,
    ) -> Result<BoardResponse, GameServiceError> {
        let game = self.games.get(game_id).await?;
        if !game.is_seat_holder(player_id) {
            return Err(GameServiceError::NotAParticipant);
        }
        let player = self
            .players
            .get(player_id)
            .await
            .map_err(|_| GameServiceError::PlayerNotFound)?;
        Ok(BoardResponse {
            grid: game.board,
            mark: player.mark,
        })
    }
}
