//! Code-breaking game: secret generation, scoring and a candidate-pool solver

pub mod code;
pub mod feedback;
pub mod pool;
pub mod session;

pub use code::{Alphabet, Code, enumerate_all, enumerate_permutations, generate_code};
pub use feedback::{Feedback, score};
pub use pool::{CandidatePool, PoolSpace, filter_consistent};
pub use session::{CodeBreakerSession, GuessRecord, Hint, SessionStatus};
