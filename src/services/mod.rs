pub mod errors;
pub mod game_service;
pub mod history_service;
pub mod player_service;
