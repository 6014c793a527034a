//! Error types for the mindgames crate

use thiserror::Error;

/// Main error type for the mindgames crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid guess: expected {expected} symbols, got {got}")]
    GuessLength { expected: usize, got: usize },

    #[error("invalid symbol '{symbol}' at position {position} (allowed: {allowed})")]
    InvalidSymbol {
        symbol: char,
        position: usize,
        allowed: String,
    },

    #[error("code length {length} exceeds alphabet size {alphabet_size}")]
    CodeTooLong { length: usize, alphabet_size: usize },

    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("alphabet symbol '{symbol}' appears more than once")]
    DuplicateSymbol { symbol: char },

    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("it is not {player}'s turn")]
    WrongTurn { player: String },

    #[error("trajectory transition {index} changes {changed} cells (expected exactly 1)")]
    InvalidTransition { index: usize, changed: usize },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid player '{input}' (expected 'X' or 'O')")]
    ParsePlayer { input: String },

    #[error("invalid pool space '{input}'. Expected one of: {expected}")]
    ParsePoolSpace { input: String, expected: String },

    #[error("invalid opponent '{input}'. Expected one of: {expected}")]
    ParseOpponent { input: String, expected: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
