//! Human-versus-AI match state
//!
//! The session owns everything that lives across one interaction cycle: the
//! board, whose turn it is, the learned agent and the RNG that decides which
//! of the two AI strategies answers each move.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{
    board::{Board, Player},
    game::{GameOutcome, Move},
    strategies::MinimaxStrategy,
};
use crate::{
    Error, Result,
    config::MatchConfig,
    ports::MoveStrategy,
    q_learning::{Credit, LearningAgent},
};

/// Which strategy produced an AI move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Minimax,
    Learned,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Minimax => write!(f, "minimax"),
            StrategyKind::Learned => write!(f, "learned"),
        }
    }
}

/// An AI move and where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiMove {
    pub position: usize,
    pub strategy: StrategyKind,
    pub outcome: Option<GameOutcome>,
}

pub struct MatchSession {
    board: Board,
    to_move: Player,
    first_player: Player,
    ai_player: Player,
    outcome: Option<GameOutcome>,
    moves: Vec<Move>,
    agent: LearningAgent,
    minimax: MinimaxStrategy,
    minimax_probability: f64,
    rng: StdRng,
}

impl MatchSession {
    pub fn new(config: &MatchConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let mut session = Self {
            board: Board::new(),
            to_move: config.first_player,
            first_player: config.first_player,
            ai_player: config.ai_player,
            outcome: None,
            moves: Vec::new(),
            agent: LearningAgent::new(&config.agent),
            minimax: MinimaxStrategy::new(),
            minimax_probability: config.minimax_probability,
            rng,
        };
        session.agent.begin_game(session.board);
        Ok(session)
    }

    /// Play the human's mark at `position`.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] after the game has ended
    /// - [`Error::WrongTurn`] when the AI is to move
    /// - [`Error::InvalidMove`] / [`Error::InvalidPosition`] for bad cells,
    ///   leaving the board unchanged
    pub fn play_human(&mut self, position: usize) -> Result<Option<GameOutcome>> {
        self.ensure_turn(self.human_player())?;
        self.apply(position)
    }

    /// Let the AI move, choosing minimax with the configured probability and
    /// the learned agent otherwise.
    pub fn play_ai(&mut self) -> Result<AiMove> {
        self.ensure_turn(self.ai_player)?;

        let kind = if self.rng.random_bool(self.minimax_probability) {
            StrategyKind::Minimax
        } else {
            StrategyKind::Learned
        };
        let strategy: &mut dyn MoveStrategy = match kind {
            StrategyKind::Minimax => &mut self.minimax,
            StrategyKind::Learned => &mut self.agent,
        };
        let position = strategy.select_move(&self.board, self.to_move)?;
        log::debug!(
            "{} plays {position} via {}",
            self.ai_player,
            strategy.name()
        );

        let outcome = self.apply(position)?;
        Ok(AiMove {
            position,
            strategy: kind,
            outcome,
        })
    }

    fn ensure_turn(&self, player: Player) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }
        if self.to_move != player {
            return Err(Error::WrongTurn {
                player: player.to_string(),
            });
        }
        Ok(())
    }

    fn apply(&mut self, position: usize) -> Result<Option<GameOutcome>> {
        let player = self.to_move;
        self.board.place(position, player)?;
        self.moves.push(Move { position, player });
        self.agent.observe(player, self.board);
        self.to_move = player.opponent();

        if let Some(outcome) = GameOutcome::from_board(&self.board) {
            self.outcome = Some(outcome);
            self.agent.learn(outcome, Credit::Side(self.ai_player))?;
            log::info!("game over after {} moves: {outcome}", self.moves.len());
        }
        Ok(self.outcome)
    }

    /// Reset the board for another game; the agent keeps what it learned
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.to_move = self.first_player;
        self.outcome = None;
        self.moves.clear();
        self.agent.begin_game(self.board);
    }

    pub fn is_ai_turn(&self) -> bool {
        self.outcome.is_none() && self.to_move == self.ai_player
    }

    pub fn human_player(&self) -> Player {
        self.ai_player.opponent()
    }

    pub fn ai_player(&self) -> Player {
        self.ai_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn agent(&self) -> &LearningAgent {
        &self.agent
    }
}
