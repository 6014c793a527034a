//! Tic-Tac-Toe: board, perfect-play search and the human-versus-AI session

pub mod board;
pub mod game;
pub mod lines;
pub mod minimax;
pub mod session;
pub mod strategies;

pub use board::{BOARD_CELLS, Board, Cell, Player};
pub use game::{GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use minimax::{best_move, best_move_for, evaluate, minimax};
pub use session::{AiMove, MatchSession, StrategyKind};
pub use strategies::{MinimaxStrategy, RandomStrategy};
