//! Two small thinking games and the machinery behind their computer players.
//!
//! This crate provides:
//! - A code-breaking game with feedback scoring and a candidate-elimination
//!   solver that suggests the next guess
//! - A 3x3 tic-tac-toe engine with exhaustive minimax search
//! - A tabular Q-learning agent with ε-greedy exploration that learns from
//!   whole-game trajectories
//! - Session objects that hold game state between interactions, and a
//!   training loop with self-play or fixed opponents

pub mod cli;
pub mod config;
pub mod error;
pub mod mastermind;
pub mod ports;
pub mod q_learning;
pub mod tictactoe;
pub mod training;

pub use error::{Error, Result};
