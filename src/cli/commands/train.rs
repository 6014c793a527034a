//! Train command - train the learning agent by self-play or against a fixed opponent

use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    cli::{
        config::CommonArgs,
        output::{create_training_progress, format_number, print_kv, print_section},
    },
    config::AgentConfig,
    q_learning::LearningAgent,
    tictactoe::{GameOutcome, Player},
    training::{OpponentKind, TrainingConfig, TrainingResult, train},
};

#[derive(Debug, Serialize)]
struct TrainingSummaryFile {
    training: TrainingResult,
    metadata: SummaryMetadata,
}

#[derive(Debug, Serialize)]
struct SummaryMetadata {
    opponent: String,
    agent_player: String,
    first_player: String,
    agent: AgentConfig,
    seed: Option<u64>,
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Trailing separator or no filename: treat as a directory.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("training_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Train the Q-learning agent", allow_negative_numbers = true)]
pub struct TrainArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Opponent to train against (self-play, minimax, random)
    #[arg(long, short = 'o')]
    pub opponent: Option<OpponentKind>,

    /// Number of training games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Side the agent plays against a fixed opponent (X or O)
    #[arg(long)]
    pub agent_player: Option<Player>,

    /// Side that opens each game (X or O)
    #[arg(long)]
    pub first_player: Option<Player>,

    /// Learning rate α
    #[arg(long)]
    pub learning_rate: Option<f64>,

    /// Discount factor γ
    #[arg(long)]
    pub discount_factor: Option<f64>,

    /// Initial exploration rate ε
    #[arg(long, short = 'e')]
    pub epsilon: Option<f64>,

    /// Multiplicative ε decay applied after every game
    #[arg(long)]
    pub epsilon_decay: Option<f64>,

    /// Lower bound for the decayed ε
    #[arg(long)]
    pub min_epsilon: Option<f64>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl TrainArgs {
    /// Agent and training configuration with command-line overrides applied
    pub fn resolve(&self) -> crate::Result<(AgentConfig, TrainingConfig)> {
        let config = self.common.load()?;
        let mut agent = config.tictactoe.agent;
        let mut training = config.training;

        if let Some(rate) = self.learning_rate {
            agent.learning_rate = rate;
        }
        if let Some(discount) = self.discount_factor {
            agent.discount_factor = discount;
        }
        if let Some(epsilon) = self.epsilon {
            agent.epsilon = epsilon;
        }
        if let Some(decay) = self.epsilon_decay {
            agent.epsilon_decay = decay;
        }
        if let Some(min) = self.min_epsilon {
            agent.min_epsilon = min;
        }
        if let Some(opponent) = self.opponent {
            training.opponent = opponent;
        }
        if let Some(games) = self.games {
            training.games = games;
        }
        if let Some(player) = self.agent_player {
            training.agent_player = player;
        }
        if let Some(player) = self.first_player {
            training.first_player = player;
        }
        if let Some(seed) = self.common.seed {
            agent.seed = Some(seed);
            training.seed = Some(seed.wrapping_add(1));
        }

        agent.validate()?;
        training.validate()?;
        Ok((agent, training))
    }
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let (agent_config, training_config) = args.resolve()?;

    let summary_path = args.summary.as_ref().map(|raw| {
        let sanitized = sanitize_summary_path(raw);
        let normalized = sanitized != *raw;
        (sanitized, normalized)
    });

    let mut agent = LearningAgent::new(&agent_config);

    let progress = if args.quiet {
        None
    } else {
        Some(create_training_progress(training_config.games as u64)?)
    };
    let (mut x_wins, mut o_wins, mut draws) = (0usize, 0usize, 0usize);

    let result = train(&mut agent, &training_config, |_, outcome| {
        match outcome {
            GameOutcome::Win(Player::X) => x_wins += 1,
            GameOutcome::Win(Player::O) => o_wins += 1,
            GameOutcome::Draw => draws += 1,
        }
        if let Some(pb) = &progress {
            pb.set_message(format!("X {x_wins} / O {o_wins} / draw {draws}"));
            pb.inc(1);
        }
    })?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    print_section(&format!("Training vs {}", training_config.opponent));
    print_kv("Games", &format_number(result.total_games));
    print_kv(
        "Wins",
        &format!("{} ({:.1}%)", result.wins, result.win_rate * 100.0),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", result.draws, result.draw_rate * 100.0),
    );
    print_kv(
        "Losses",
        &format!("{} ({:.1}%)", result.losses, result.loss_rate * 100.0),
    );
    print_kv("States learned", &format_number(result.states_learned));
    print_kv("Final epsilon", &format!("{:.4}", result.final_epsilon));

    if let Some((path, normalized)) = summary_path {
        if normalized {
            println!("\nNormalizing summary path to {}", path.display());
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let summary = TrainingSummaryFile {
            training: result,
            metadata: SummaryMetadata {
                opponent: training_config.opponent.to_string(),
                agent_player: training_config.agent_player.to_string(),
                first_player: training_config.first_player.to_string(),
                agent: agent_config,
                seed: args.common.seed,
            },
        };
        let file = File::create(&path)
            .with_context(|| format!("creating summary file {}", path.display()))?;
        to_writer_pretty(file, &summary)?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_path_normalization() {
        assert_eq!(
            sanitize_summary_path(Path::new("out/run.txt")),
            PathBuf::from("out/run.json")
        );
        assert_eq!(
            sanitize_summary_path(Path::new("out/run.JSON")),
            PathBuf::from("out/run.JSON")
        );
        let dir = format!("out{}", std::path::MAIN_SEPARATOR);
        assert_eq!(
            sanitize_summary_path(Path::new(&dir)),
            Path::new("out").join("training_summary.json")
        );
    }

    #[test]
    fn seed_is_split_between_agent_and_opponent() {
        let args = TrainArgs::parse_from(["train", "--seed", "7", "-o", "random", "-g", "20"]);
        let (agent, training) = args.resolve().unwrap();
        assert_eq!(agent.seed, Some(7));
        assert_eq!(training.seed, Some(8));
        assert_eq!(training.opponent, OpponentKind::Random);
        assert_eq!(training.games, 20);
    }

    #[test]
    fn rejects_invalid_hyperparameters() {
        let args = TrainArgs::parse_from(["train", "--epsilon", "-0.5"]);
        assert!(args.resolve().is_err());
    }
}
