//! mindgames CLI - code breaking with a consistency solver, and tic-tac-toe
//! against a mix of minimax and a Q-learning agent
//!
//! Set `RUST_LOG=debug` to trace solver pruning and AI move choices.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mindgames")]
#[command(version, about = "Code breaking and tic-tac-toe with learning opponents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Break a secret code with hints from the candidate solver
    Mastermind(mindgames::cli::commands::mastermind::MastermindArgs),

    /// Play tic-tac-toe against the computer
    #[command(name = "tictactoe", alias = "ttt")]
    TicTacToe(mindgames::cli::commands::tictactoe::TicTacToeArgs),

    /// Train the Q-learning agent
    Train(Box<mindgames::cli::commands::train::TrainArgs>),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Mastermind(args) => mindgames::cli::commands::mastermind::execute(args),
        Commands::TicTacToe(args) => mindgames::cli::commands::tictactoe::execute(args),
        Commands::Train(args) => mindgames::cli::commands::train::execute(*args),
    }
}
