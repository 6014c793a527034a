//! Non-learning move strategies: perfect play and a uniform baseline

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use super::{
    board::{Board, Player},
    minimax::best_move_for,
};
use crate::{Error, Result, ports::MoveStrategy};

/// Perfect play via exhaustive minimax
#[derive(Debug, Clone, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl MoveStrategy for MinimaxStrategy {
    fn select_move(&mut self, board: &Board, to_move: Player) -> Result<usize> {
        best_move_for(board, to_move).ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

/// Uniformly random empty cell
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Create a random strategy with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for RandomStrategy {
    fn select_move(&mut self, board: &Board, _to_move: Player) -> Result<usize> {
        if board.is_terminal() {
            return Err(Error::NoValidMoves);
        }
        board
            .empty_positions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        "random"
    }
}
