//! Tabular Q-learning for tic-tac-toe
//!
//! ## Components
//!
//! - [`QTable`]: encoded board → 9 action values, created lazily
//! - [`Trajectory`]: snapshots of one game, consumed at game end
//! - [`LearningAgent`]: ε-greedy selection plus flat terminal-reward replay
//!
//! ## Usage Example
//!
//! ```
//! use mindgames::{
//!     config::AgentConfig,
//!     q_learning::{Credit, LearningAgent},
//!     tictactoe::{Board, GameOutcome, Player},
//! };
//!
//! let mut agent = LearningAgent::new(&AgentConfig::default().with_seed(1));
//! let mut board = Board::new();
//! agent.begin_game(board);
//!
//! let pos = agent.select_action(&board, 0.1).unwrap();
//! board.place(pos, Player::X).unwrap();
//! agent.observe(Player::X, board);
//!
//! // Pretend the game ended here.
//! let updates = agent.learn(GameOutcome::Draw, Credit::Side(Player::X)).unwrap();
//! assert_eq!(updates, 1);
//! ```

pub mod agent;
pub mod q_table;
pub mod trajectory;

pub use agent::{Credit, LearningAgent};
pub use q_table::{ActionValues, QTable};
pub use trajectory::{Trajectory, Transition};
