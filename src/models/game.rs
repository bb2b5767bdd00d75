use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The symbol a player stamps into cells for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opposite(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// 3x3 grid in row-major order; `None` is an empty cell.
pub type Board = [[Option<Mark>; 3]; 3];

/// The eight three-in-a-row lines: three rows, three columns, two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Why the engine refused a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    NotASeatHolder,
    WaitingForOpponent,
    OutOfTurn,
    OutOfBounds,
    CellOccupied,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NotASeatHolder => write!(f, "Not a participant in this game"),
            MoveError::WaitingForOpponent => write!(f, "Waiting for an opponent to join"),
            MoveError::OutOfTurn => write!(f, "Not your turn"),
            MoveError::OutOfBounds => write!(f, "Invalid move"),
            MoveError::CellOccupied => {
                write!(f, "Invalid move, the position is already occupied")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// What an accepted move did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game continues; the turn has passed to the opponent.
    Accepted,
    Won { winner: String },
    Drawn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub board: Board,
    /// Id of the seat holder whose move is next.
    pub turn: String,
    pub first: String,
    pub second: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Game {
    pub fn new(creator_id: &str) -> Self {
        Game {
            id: Uuid::new_v4().to_string(),
            board: [[None; 3]; 3],
            turn: creator_id.to_string(),
            first: creator_id.to_string(),
            second: None,
            created_at: Utc::now(),
        }
    }

    /// A game stays open until its second seat is taken.
    pub fn is_open(&self) -> bool {
        self.second.is_none()
    }

    pub fn is_seat_holder(&self, player_id: &str) -> bool {
        self.first == player_id || self.second.as_deref() == Some(player_id)
    }

    /// Fills the second seat. Returns false once both seats are taken.
    pub fn try_seat(&mut self, joiner_id: &str) -> bool {
        if self.second.is_some() {
            return false;
        }
        self.second = Some(joiner_id.to_string());
        true
    }

    /// Validates and applies one move for `player_id`, flipping the turn on
    /// success. `mark` is the mark handed to the player when the game was
    /// arranged; a seated player always carries one.
    ///
    /// Checks run in a fixed order and the first failure wins: seat
    /// membership, seat count, turn, coordinates, cell occupancy.
    pub fn play(
        &mut self,
        player_id: &str,
        mark: Option<Mark>,
        row: i64,
        column: i64,
    ) -> Result<MoveOutcome, MoveError> {
        if !self.is_seat_holder(player_id) {
            return Err(MoveError::NotASeatHolder);
        }
        let Some(opponent) = self.opponent_of(player_id).map(str::to_string) else {
            return Err(MoveError::WaitingForOpponent);
        };
        if self.turn != player_id {
            return Err(MoveError::OutOfTurn);
        }
        if !(0..3).contains(&row) || !(0..3).contains(&column) {
            return Err(MoveError::OutOfBounds);
        }
        let (row, column) = (row as usize, column as usize);
        if self.board[row][column].is_some() {
            return Err(MoveError::CellOccupied);
        }
        let Some(mark) = mark else {
            return Err(MoveError::NotASeatHolder);
        };

        self.board[row][column] = Some(mark);
        self.turn = opponent;

        if self.has_winning_line() {
            Ok(MoveOutcome::Won {
                winner: player_id.to_string(),
            })
        } else if self.is_full() {
            Ok(MoveOutcome::Drawn)
        } else {
            Ok(MoveOutcome::Accepted)
        }
    }

    /// The seat holder opposite `player_id`, once both seats are filled.
    fn opponent_of(&self, player_id: &str) -> Option<&str> {
        let second = self.second.as_deref()?;
        if self.first == player_id {
            Some(second)
        } else if second == player_id {
            Some(self.first.as_str())
        } else {
            None
        }
    }

    fn has_winning_line(&self) -> bool {
        LINES.iter().any(|&[a, b, c]| {
            let first = self.board[a.0][a.1];
            first.is_some() && first == self.board[b.0][b.1] && first == self.board[c.0][c.1]
        })
    }

    fn is_full(&self) -> bool {
        self.board.iter().flatten().all(|cell| cell.is_some())
    }
}
