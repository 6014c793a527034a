//! One module per subcommand, each exposing an `Args` struct and `execute`

pub mod mastermind;
pub mod tictactoe;
pub mod train;
