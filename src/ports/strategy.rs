//! Move-selection port shared by every tic-tac-toe AI
//!
//! The match session and the training loop only see this trait, so the
//! perfect-play search, the learned agent and the random baseline are
//! interchangeable at run time.

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// A policy that picks a cell for the player to move.
///
/// # Examples
///
/// ```
/// use mindgames::{
///     ports::MoveStrategy,
///     tictactoe::{Board, MinimaxStrategy, Player},
/// };
///
/// let mut strategy: Box<dyn MoveStrategy> = Box::new(MinimaxStrategy::new());
/// let board = Board::from_string("XX. OO. ...").unwrap();
/// assert_eq!(strategy.select_move(&board, Player::X).unwrap(), 2);
/// ```
pub trait MoveStrategy {
    /// Select a position (0-8) for `to_move` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] when the board is already
    /// terminal.
    fn select_move(&mut self, board: &Board, to_move: Player) -> Result<usize>;

    /// Short name used in logs and move reports
    fn name(&self) -> &str;
}
