//! Tabular Q-learning agent with ε-greedy exploration
//!
//! The agent records every move of a game into its trajectory and, once the
//! game is over, replays the trajectory crediting each transition with the
//! same undiscounted terminal reward.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Error, Result,
    config::AgentConfig,
    ports::MoveStrategy,
    q_learning::{q_table::QTable, trajectory::Trajectory},
    tictactoe::{Board, GameOutcome, Player},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Which transitions of a trajectory receive the terminal reward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credit {
    /// Only moves made by this side, rewarded from its point of view
    Side(Player),
    /// Every move, each rewarded from the point of view of the side that made it
    SelfPlay,
}

/// Q-learning agent owning its table and the trajectory of the current game
#[derive(Debug, Clone)]
pub struct LearningAgent {
    q_table: QTable,
    learning_rate: f64,
    discount_factor: f64,
    epsilon: f64,
    initial_epsilon: f64,
    epsilon_decay: f64,
    min_epsilon: f64,
    rng: StdRng,
    trajectory: Trajectory,
}

impl LearningAgent {
    /// Create an agent from validated hyperparameters
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            q_table: QTable::new(),
            learning_rate: config.learning_rate,
            discount_factor: config.discount_factor,
            epsilon: config.epsilon,
            initial_epsilon: config.epsilon,
            epsilon_decay: config.epsilon_decay,
            min_epsilon: config.min_epsilon,
            rng: build_rng(config.seed),
            trajectory: Trajectory::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// ε-greedy selection among the empty cells of `board`.
    ///
    /// With probability `epsilon` a uniformly random empty cell is returned,
    /// otherwise the empty cell with the highest estimate (lowest index on
    /// ties).
    pub fn select_action(&mut self, board: &Board, epsilon: f64) -> Result<usize> {
        let legal_moves = board.empty_positions();
        if legal_moves.is_empty() {
            return Err(Error::NoValidMoves);
        }

        if self.rng.random::<f64>() < epsilon {
            legal_moves
                .choose(&mut self.rng)
                .copied()
                .ok_or(Error::NoValidMoves)
        } else {
            self.q_table
                .greedy_action(board)
                .ok_or(Error::NoValidMoves)
        }
    }

    /// Single temporal-difference update with explicit α and γ
    pub fn update(
        &mut self,
        state: &Board,
        action: usize,
        reward: f64,
        next_state: &Board,
        learning_rate: f64,
        discount_factor: f64,
    ) -> Result<f64> {
        self.q_table.update(
            state,
            action,
            reward,
            next_state,
            learning_rate,
            discount_factor,
        )
    }

    /// Discard any partial trajectory and start recording from `initial`
    pub fn begin_game(&mut self, initial: Board) {
        self.trajectory = Trajectory::new(initial);
    }

    /// Record the board right after `actor` moved
    pub fn observe(&mut self, actor: Player, after: Board) {
        self.trajectory.record(actor, after);
    }

    /// Propagate the terminal reward over the recorded trajectory.
    ///
    /// Every credited transition gets the same terminal reward (flat, not
    /// discounted backwards). The trajectory is emptied before any update is
    /// applied so a second call for the same game is a no-op. Returns the
    /// number of updates applied.
    pub fn learn(&mut self, outcome: GameOutcome, credit: Credit) -> Result<usize> {
        let trajectory = std::mem::take(&mut self.trajectory);
        let transitions = trajectory.transitions()?;

        let mut updates = 0;
        for transition in transitions {
            let reward = match credit {
                Credit::Side(side) if transition.actor != side => continue,
                Credit::Side(side) => outcome.reward_for(side),
                Credit::SelfPlay => outcome.reward_for(transition.actor),
            };
            self.q_table.update(
                &transition.before,
                transition.action,
                reward,
                &transition.after,
                self.learning_rate,
                self.discount_factor,
            )?;
            updates += 1;
        }

        log::debug!(
            "learned from {outcome}: {updates} updates, {} states known",
            self.q_table.len()
        );
        self.decay_epsilon();
        Ok(updates)
    }

    /// Decay epsilon after a learned game
    fn decay_epsilon(&mut self) {
        self.epsilon = (self.epsilon * self.epsilon_decay).max(self.min_epsilon);
    }

    /// Clear the table and restore the initial exploration rate
    pub fn reset(&mut self) {
        self.q_table.reset();
        self.trajectory = Trajectory::default();
        self.epsilon = self.initial_epsilon;
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl MoveStrategy for LearningAgent {
    fn select_move(&mut self, board: &Board, _to_move: Player) -> Result<usize> {
        if board.is_terminal() {
            return Err(Error::NoValidMoves);
        }
        self.select_action(board, self.epsilon)
    }

    fn name(&self) -> &str {
        "q-learning"
    }
}
