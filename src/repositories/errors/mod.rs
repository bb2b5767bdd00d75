pub mod game_repository_errors;
pub mod player_repository_errors;
