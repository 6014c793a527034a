//! Training loop for the learning agent

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::MoveStrategy,
    q_learning::{Credit, LearningAgent},
    tictactoe::{Board, GameOutcome, MinimaxStrategy, Player, RandomStrategy},
};

/// Who the agent trains against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpponentKind {
    /// The agent plays both sides
    #[default]
    SelfPlay,
    Minimax,
    Random,
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpponentKind::SelfPlay => write!(f, "self-play"),
            OpponentKind::Minimax => write!(f, "minimax"),
            OpponentKind::Random => write!(f, "random"),
        }
    }
}

impl FromStr for OpponentKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "self" | "self-play" | "selfplay" => Ok(OpponentKind::SelfPlay),
            "minimax" | "optimal" => Ok(OpponentKind::Minimax),
            "random" => Ok(OpponentKind::Random),
            _ => Err(Error::ParseOpponent {
                input: s.to_string(),
                expected: "self-play, minimax, random".to_string(),
            }),
        }
    }
}

/// Opponent instance used while training
pub enum Opponent {
    SelfPlay,
    Strategy(Box<dyn MoveStrategy>),
}

impl Opponent {
    pub fn from_kind(kind: OpponentKind, seed: Option<u64>) -> Self {
        match kind {
            OpponentKind::SelfPlay => Opponent::SelfPlay,
            OpponentKind::Minimax => Opponent::Strategy(Box::new(MinimaxStrategy::new())),
            OpponentKind::Random => Opponent::Strategy(Box::new(match seed {
                Some(seed) => RandomStrategy::with_seed(seed),
                None => RandomStrategy::new(),
            })),
        }
    }

    fn credit(&self, agent_player: Player) -> Credit {
        match self {
            Opponent::SelfPlay => Credit::SelfPlay,
            Opponent::Strategy(_) => Credit::Side(agent_player),
        }
    }
}

/// Training configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Number of training games
    pub games: usize,

    /// Opponent type
    pub opponent: OpponentKind,

    /// Whether the agent plays as X or O (ignored in self-play)
    pub agent_player: Player,

    /// Which player opens each game
    pub first_player: Player,

    /// Random seed for the opponent
    pub seed: Option<u64>,
}

impl TrainingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "training needs at least one game".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            games: 500,
            opponent: OpponentKind::default(),
            agent_player: Player::X,
            first_player: Player::X,
            seed: None,
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total games played
    pub total_games: usize,

    /// Games won by the agent's side (X wins in self-play)
    pub wins: usize,

    pub draws: usize,

    pub losses: usize,

    pub win_rate: f64,

    pub draw_rate: f64,

    pub loss_rate: f64,

    /// States in the agent's table after training
    pub states_learned: usize,

    /// Exploration rate after the last decay
    pub final_epsilon: f64,
}

impl TrainingResult {
    fn rate(count: usize, total: usize) -> f64 {
        if total > 0 {
            count as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Save result to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create summary file {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Play one game to the end and let the agent learn from it.
///
/// In self-play the agent picks every move; otherwise it only moves for
/// `agent_player` and `opponent` answers.
pub fn play_game(
    agent: &mut LearningAgent,
    opponent: &mut Opponent,
    agent_player: Player,
    first_player: Player,
) -> Result<GameOutcome> {
    let mut board = Board::new();
    let mut to_move = first_player;
    agent.begin_game(board);

    loop {
        let position = match opponent {
            Opponent::Strategy(strategy) if to_move != agent_player => {
                strategy.select_move(&board, to_move)?
            }
            _ => agent.select_move(&board, to_move)?,
        };
        board.place(position, to_move)?;
        agent.observe(to_move, board);

        if let Some(outcome) = GameOutcome::from_board(&board) {
            agent.learn(outcome, opponent.credit(agent_player))?;
            return Ok(outcome);
        }
        to_move = to_move.opponent();
    }
}

/// Train `agent` for `config.games` games, calling `on_game` after each one.
pub fn train<F>(
    agent: &mut LearningAgent,
    config: &TrainingConfig,
    mut on_game: F,
) -> Result<TrainingResult>
where
    F: FnMut(usize, GameOutcome),
{
    config.validate()?;
    let mut opponent = Opponent::from_kind(config.opponent, config.seed);
    let side = match config.opponent {
        OpponentKind::SelfPlay => Player::X,
        _ => config.agent_player,
    };

    let (mut wins, mut draws, mut losses) = (0, 0, 0);
    for game in 0..config.games {
        let outcome = play_game(agent, &mut opponent, config.agent_player, config.first_player)?;
        match outcome {
            GameOutcome::Win(winner) if winner == side => wins += 1,
            GameOutcome::Win(_) => losses += 1,
            GameOutcome::Draw => draws += 1,
        }
        on_game(game, outcome);
    }

    let total = config.games;
    log::info!(
        "trained {total} games against {}: {wins} wins, {draws} draws, {losses} losses",
        config.opponent
    );

    Ok(TrainingResult {
        total_games: total,
        wins,
        draws,
        losses,
        win_rate: TrainingResult::rate(wins, total),
        draw_rate: TrainingResult::rate(draws, total),
        loss_rate: TrainingResult::rate(losses, total),
        states_learned: agent.q_table().len(),
        final_epsilon: agent.epsilon(),
    })
}
