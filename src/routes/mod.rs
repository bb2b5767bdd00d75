pub mod games;
pub mod health;
pub mod history;
pub mod players;
