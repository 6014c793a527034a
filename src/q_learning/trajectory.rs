//! Per-game record of board snapshots used for end-of-game credit assignment

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    tictactoe::{Board, Player},
};

/// One move reconstructed from two consecutive snapshots
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub actor: Player,
    pub before: Board,
    pub action: usize,
    pub after: Board,
}

/// Ordered (actor, board after the actor's move) pairs for a single game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    initial: Board,
    snapshots: Vec<(Player, Board)>,
}

impl Trajectory {
    /// Start a trajectory from the board the game begins on
    pub fn new(initial: Board) -> Self {
        Self {
            initial,
            snapshots: Vec::new(),
        }
    }

    /// Record the board right after `actor` moved
    pub fn record(&mut self, actor: Player, after: Board) {
        self.snapshots.push((actor, after));
    }

    pub fn snapshots(&self) -> &[(Player, Board)] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Rebuild every transition, inferring each action as the single cell
    /// that differs between consecutive snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] when two consecutive snapshots do
    /// not differ in exactly one cell.
    pub fn transitions(&self) -> Result<Vec<Transition>> {
        let mut before = self.initial;
        let mut transitions = Vec::with_capacity(self.snapshots.len());

        for (index, &(actor, after)) in self.snapshots.iter().enumerate() {
            let action = before
                .changed_cell(&after)
                .map_err(|changed| Error::InvalidTransition { index, changed })?;
            transitions.push(Transition {
                actor,
                before,
                action,
                after,
            });
            before = after;
        }

        Ok(transitions)
    }
}
