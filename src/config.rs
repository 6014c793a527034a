//! Configuration for both games and the learning agent.
//!
//! Every struct has sensible defaults, builder-style setters and a
//! `validate` method. A whole [`Config`] can be read from a JSON file where
//! any omitted field keeps its default.

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    mastermind::{Alphabet, PoolSpace},
    tictactoe::Player,
    training::TrainingConfig,
};

/// Default code-breaking alphabet
pub const DEFAULT_ALPHABET: &str = "RGBYOP";

/// Default secret length
pub const DEFAULT_CODE_LENGTH: usize = 4;

fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration {
            message: format!("{name} must be within [0, 1], got {value}"),
        })
    }
}

/// Code-breaking game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeConfig {
    /// Allowed symbols, one character each
    pub alphabet: String,
    /// Secret length
    pub length: usize,
    /// Hypothesis space the candidate pool starts from
    pub pool_space: PoolSpace,
    /// Random seed for the secret
    pub seed: Option<u64>,
}

impl CodeConfig {
    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_pool_space(mut self, pool_space: PoolSpace) -> Self {
        self.pool_space = pool_space;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse the configured alphabet
    pub fn alphabet(&self) -> Result<Alphabet> {
        Alphabet::new(self.alphabet.chars())
    }

    /// Check the alphabet and that the length fits it.
    pub fn validate(&self) -> Result<()> {
        let alphabet = self.alphabet()?;
        if self.length == 0 {
            return Err(Error::InvalidConfiguration {
                message: "code length must be at least 1".to_string(),
            });
        }
        if self.length > alphabet.len() {
            return Err(Error::CodeTooLong {
                length: self.length,
                alphabet_size: alphabet.len(),
            });
        }
        Ok(())
    }
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            length: DEFAULT_CODE_LENGTH,
            pool_space: PoolSpace::default(),
            seed: None,
        }
    }
}

/// Learning agent hyperparameters
///
/// # Examples
///
/// ```
/// use mindgames::config::AgentConfig;
///
/// let config = AgentConfig::default()
///     .with_epsilon(0.2)
///     .with_epsilon_decay(0.999, 0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// α
    pub learning_rate: f64,
    /// γ
    pub discount_factor: f64,
    /// Exploration rate for ε-greedy selection
    pub epsilon: f64,
    /// Multiplicative decay applied after each learned game
    pub epsilon_decay: f64,
    /// Floor for the decayed exploration rate
    pub min_epsilon: f64,
    /// Random seed for exploration
    pub seed: Option<u64>,
}

impl AgentConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_epsilon_decay(mut self, decay: f64, min_epsilon: f64) -> Self {
        self.epsilon_decay = decay;
        self.min_epsilon = min_epsilon;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_unit_interval("learning_rate", self.learning_rate)?;
        check_unit_interval("discount_factor", self.discount_factor)?;
        check_unit_interval("epsilon", self.epsilon)?;
        check_unit_interval("epsilon_decay", self.epsilon_decay)?;
        check_unit_interval("min_epsilon", self.min_epsilon)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            discount_factor: 0.9,
            epsilon: 0.1,
            epsilon_decay: 1.0,
            min_epsilon: 0.0,
            seed: None,
        }
    }
}

/// Human-versus-AI tic-tac-toe configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Side the AI plays
    pub ai_player: Player,
    /// Side that opens each game
    pub first_player: Player,
    /// Chance that an AI move comes from minimax instead of the learned agent
    pub minimax_probability: f64,
    /// Learned agent hyperparameters
    pub agent: AgentConfig,
    /// Random seed for strategy selection
    pub seed: Option<u64>,
}

impl MatchConfig {
    pub fn with_ai_player(mut self, player: Player) -> Self {
        self.ai_player = player;
        self
    }

    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    pub fn with_minimax_probability(mut self, probability: f64) -> Self {
        self.minimax_probability = probability;
        self
    }

    pub fn with_agent(mut self, agent: AgentConfig) -> Self {
        self.agent = agent;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_unit_interval("minimax_probability", self.minimax_probability)?;
        self.agent.validate()
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            ai_player: Player::X,
            first_player: Player::X,
            minimax_probability: 0.5,
            agent: AgentConfig::default(),
            seed: None,
        }
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub code: CodeConfig,
    pub tictactoe: MatchConfig,
    pub training: TrainingConfig,
}

impl Config {
    /// Load and validate a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open config file {}", path.display()),
            source,
        })?;
        let config: Config = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.code.validate()?;
        self.tictactoe.validate()?;
        self.training.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
        assert_eq!(CodeConfig::default().length, 4);
        assert_eq!(AgentConfig::default().learning_rate, 0.1);
    }

    #[test]
    fn rejects_code_longer_than_alphabet() {
        let config = CodeConfig::default().with_alphabet("RG").with_length(3);
        assert!(matches!(
            config.validate(),
            Err(Error::CodeTooLong {
                length: 3,
                alphabet_size: 2
            })
        ));
    }

    #[test]
    fn rejects_rates_outside_unit_interval() {
        let config = AgentConfig::default().with_learning_rate(1.5);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));

        let config = MatchConfig::default().with_minimax_probability(-0.1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "code": { "length": 3 }, "tictactoe": { "ai_player": "O" } }"#)
                .unwrap();
        assert_eq!(config.code.length, 3);
        assert_eq!(config.code.alphabet, DEFAULT_ALPHABET);
        assert_eq!(config.tictactoe.ai_player, Player::O);
        assert_eq!(config.tictactoe.minimax_probability, 0.5);
    }
}
