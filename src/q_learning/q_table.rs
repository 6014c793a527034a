//! Action-value table for temporal difference learning

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    tictactoe::{BOARD_CELLS, Board},
};

/// One estimate per board cell
pub type ActionValues = [f64; BOARD_CELLS];

/// Q-table mapping an encoded board to the values of its 9 actions.
///
/// Entries are created lazily with all-zero estimates the first time a state
/// is touched by an update, and live as long as the table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    values: HashMap<String, ActionValues>,
}

impl QTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Action values for a board; unseen boards read as all zeros
    pub fn get(&self, board: &Board) -> ActionValues {
        self.values
            .get(&board.encode())
            .copied()
            .unwrap_or([0.0; BOARD_CELLS])
    }

    /// Mutable action values for a board, inserting zeros if unseen
    pub fn entry(&mut self, board: &Board) -> &mut ActionValues {
        self.values
            .entry(board.encode())
            .or_insert([0.0; BOARD_CELLS])
    }

    /// Greedy choice among the empty cells of `board`.
    ///
    /// Ties go to the lowest index. Returns `None` when no cell is empty.
    pub fn greedy_action(&self, board: &Board) -> Option<usize> {
        let values = self.get(board);
        let mut best: Option<(usize, f64)> = None;
        for pos in board.empty_positions() {
            match best {
                Some((_, value)) if values[pos] <= value => {}
                _ => best = Some((pos, values[pos])),
            }
        }
        best.map(|(pos, _)| pos)
    }

    /// One-step Q-learning update:
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max Q(s') - Q(s,a)]
    ///
    /// The successor's entry is created before the target is read. Returns the
    /// updated estimate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `action` is not a board cell.
    pub fn update(
        &mut self,
        state: &Board,
        action: usize,
        reward: f64,
        next_state: &Board,
        learning_rate: f64,
        discount_factor: f64,
    ) -> Result<f64> {
        if action >= BOARD_CELLS {
            return Err(Error::InvalidPosition { position: action });
        }

        let max_next_q = self
            .entry(next_state)
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        let current = &mut self.entry(state)[action];
        let td_target = reward + discount_factor * max_next_q;
        let td_error = td_target - *current;
        *current += learning_rate * td_error;
        Ok(*current)
    }

    /// Iterate over (encoded board, action values) entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActionValues)> {
        self.values.iter().map(|(key, values)| (key.as_str(), values))
    }

    /// Number of states stored
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Forget every estimate
    pub fn reset(&mut self) {
        self.values.clear();
    }
}
