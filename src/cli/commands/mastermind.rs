//! Interactive code-breaking game

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    Error,
    cli::config::CommonArgs,
    config::CodeConfig,
    mastermind::{CodeBreakerSession, PoolSpace, SessionStatus},
};

#[derive(Parser, Debug)]
#[command(about = "Break a secret code with solver hints")]
pub struct MastermindArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Symbols codes are built from, e.g. RGBYOP
    #[arg(long, short = 'a')]
    pub alphabet: Option<String>,

    /// Length of the secret code
    #[arg(long, short = 'l')]
    pub length: Option<usize>,

    /// Candidate space used for hints (with-repetition, permutations)
    #[arg(long)]
    pub pool_space: Option<PoolSpace>,
}

impl MastermindArgs {
    /// Configuration file values with command-line overrides applied
    pub fn resolve(&self) -> crate::Result<CodeConfig> {
        let mut config = self.common.load()?.code;
        if let Some(alphabet) = &self.alphabet {
            config.alphabet = alphabet.clone();
        }
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(space) = self.pool_space {
            config.pool_space = space;
        }
        if let Some(seed) = self.common.seed {
            config.seed = Some(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn execute(args: MastermindArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&args, stdin.lock(), stdout.lock())
}

/// Resolve the configuration, draw a secret and play.
pub fn run<R: BufRead, W: Write>(args: &MastermindArgs, input: R, output: W) -> Result<()> {
    let config = args.resolve()?;
    let mut session = CodeBreakerSession::new(&config)?;
    play(&mut session, input, output)
}

/// Play until the player quits or input ends.
///
/// A line that parses as a code is always scored as a guess. Otherwise
/// `quit` leaves and `new` starts over with a fresh secret.
pub fn play<R: BufRead, W: Write>(
    session: &mut CodeBreakerSession,
    mut input: R,
    mut output: W,
) -> Result<()> {
    print_intro(session, &mut output)?;

    loop {
        if session.status() == SessionStatus::Solved {
            write!(output, "Play again? [y/N] ")?;
        } else {
            write!(output, "guess> ")?;
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let line = line.trim();

        if session.status() == SessionStatus::Solved {
            if line.eq_ignore_ascii_case("y") || line.eq_ignore_ascii_case("yes") {
                session.restart()?;
                print_intro(session, &mut output)?;
                continue;
            }
            break;
        }

        let is_code = session
            .alphabet()
            .parse_code(line, session.code_length())
            .is_ok();
        if !is_code {
            match line.to_ascii_lowercase().as_str() {
                "" => continue,
                "quit" | "exit" => break,
                "new" => {
                    session.restart()?;
                    print_intro(session, &mut output)?;
                    continue;
                }
                _ => {}
            }
        }

        match session.submit(line) {
            Ok(_) => {}
            Err(Error::GuessLength { .. } | Error::InvalidSymbol { .. }) => {
                writeln!(
                    output,
                    "Invalid! Use exactly {} letters from: {}",
                    session.code_length(),
                    session.alphabet()
                )?;
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        for (i, record) in session.guesses().iter().enumerate() {
            writeln!(output, "{}. {} -> {}", i + 1, record.guess, record.feedback)?;
        }

        if session.status() == SessionStatus::Solved {
            writeln!(
                output,
                "You cracked it! Secret was `{}` in {} guesses.",
                session.secret(),
                session.guesses().len()
            )?;
            continue;
        }

        print_hint(session, &mut output)?;
    }

    Ok(())
}

fn print_intro<W: Write>(session: &CodeBreakerSession, output: &mut W) -> io::Result<()> {
    writeln!(
        output,
        "Guess the {}-symbol code using: {}",
        session.code_length(),
        session.alphabet()
    )?;
    writeln!(output, "Type `new` for a fresh secret or `quit` to leave.")?;
    print_hint(session, output)
}

fn print_hint<W: Write>(session: &CodeBreakerSession, output: &mut W) -> io::Result<()> {
    let hint = session.hint();
    match hint.suggestion {
        Some(code) => writeln!(
            output,
            "Solver suggests: {code} (remaining possibilities: {})",
            hint.remaining
        ),
        None => writeln!(output, "No possibilities left. Check your earlier feedback."),
    }
}
