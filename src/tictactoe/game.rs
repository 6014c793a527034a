//! Game records and outcomes

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a board, or `None` while the game is still running
    pub fn from_board(board: &Board) -> Option<Self> {
        match board.winner() {
            Some(winner) => Some(GameOutcome::Win(winner)),
            None if board.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// Terminal reward seen from `player`: +1 win, -1 loss, 0 draw
    pub fn reward_for(self, player: Player) -> f64 {
        match self {
            GameOutcome::Win(winner) if winner == player => 1.0,
            GameOutcome::Win(_) => -1.0,
            GameOutcome::Draw => 0.0,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "{player} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}
