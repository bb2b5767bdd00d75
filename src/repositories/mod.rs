pub mod errors;
pub mod game_repository;
pub mod history_repository;
pub mod player_repository;
