//! Interactive tic-tac-toe against the mixed minimax / learned AI

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    Error,
    cli::config::CommonArgs,
    config::MatchConfig,
    tictactoe::{GameOutcome, MatchSession, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play tic-tac-toe against the computer")]
pub struct TicTacToeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Side the computer plays (X or O)
    #[arg(long)]
    pub ai_player: Option<Player>,

    /// Side that opens each game (X or O)
    #[arg(long)]
    pub first_player: Option<Player>,

    /// Chance that an AI move comes from minimax rather than the learned agent
    #[arg(long, short = 'p')]
    pub minimax_probability: Option<f64>,

    /// Exploration rate of the learned agent
    #[arg(long, short = 'e')]
    pub epsilon: Option<f64>,
}

impl TicTacToeArgs {
    /// Configuration file values with command-line overrides applied
    pub fn resolve(&self) -> crate::Result<MatchConfig> {
        let mut config = self.common.load()?.tictactoe;
        if let Some(player) = self.ai_player {
            config.ai_player = player;
        }
        if let Some(player) = self.first_player {
            config.first_player = player;
        }
        if let Some(probability) = self.minimax_probability {
            config.minimax_probability = probability;
        }
        if let Some(epsilon) = self.epsilon {
            config.agent.epsilon = epsilon;
        }
        if let Some(seed) = self.common.seed {
            config.seed = Some(seed);
            config.agent.seed = Some(seed.wrapping_add(1));
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn execute(args: TicTacToeArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&args, stdin.lock(), stdout.lock())
}

/// Play games until the player quits or input ends.
pub fn run<R: BufRead, W: Write>(args: &TicTacToeArgs, mut input: R, mut output: W) -> Result<()> {
    let config = args.resolve()?;
    let mut session = MatchSession::new(&config)?;
    writeln!(
        output,
        "You play {}. Cells are numbered 0-8, row by row. Type `quit` to leave.",
        session.human_player()
    )?;

    loop {
        while session.is_ai_turn() {
            let ai = session.play_ai()?;
            writeln!(
                output,
                "Computer ({}) plays {} [{}]",
                session.ai_player(),
                ai.position,
                ai.strategy
            )?;
        }
        writeln!(output, "{}", session.board())?;

        if let Some(outcome) = session.outcome() {
            let message = match outcome {
                GameOutcome::Win(winner) if winner == session.human_player() => "You win!",
                GameOutcome::Win(_) => "Computer wins.",
                GameOutcome::Draw => "It's a draw.",
            };
            writeln!(output, "{message}")?;
            write!(output, "Play again? [y/N] ")?;
            output.flush()?;

            match read_trimmed(&mut input)? {
                Some(answer) if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") => {
                    session.new_game();
                    continue;
                }
                _ => break,
            }
        }

        write!(output, "cell> ")?;
        output.flush()?;
        let Some(line) = read_trimmed(&mut input)? else {
            writeln!(output)?;
            break;
        };
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        let position: usize = match line.parse() {
            Ok(position) => position,
            Err(_) => {
                writeln!(output, "Enter a cell number from 0 to 8.")?;
                continue;
            }
        };
        match session.play_human(position) {
            Ok(_) => {}
            Err(Error::InvalidMove { .. } | Error::InvalidPosition { .. }) => {
                writeln!(output, "Cell {position} is not available.")?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn read_trimmed<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
