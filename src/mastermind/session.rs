//! One code-breaking game: secret, candidate pool and guess history

use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use super::{
    code::{Alphabet, Code, generate_code},
    feedback::{Feedback, score},
    pool::{CandidatePool, PoolSpace},
};
use crate::{Error, Result, config::CodeConfig};

/// Where the session stands after the last guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionStatus {
    /// Waiting for the next guess
    AwaitingGuess,
    /// The last guess matched every position
    Solved,
    /// No candidate is consistent with the feedback; guessing may continue
    Exhausted,
}

/// A scored guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessRecord {
    pub guess: Code,
    pub feedback: Feedback,
}

/// Solver hint: the first remaining candidate and how many remain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint<'a> {
    pub suggestion: Option<&'a Code>,
    pub remaining: usize,
}

/// Explicit per-game state for the code-breaking game
#[derive(Debug, Clone)]
pub struct CodeBreakerSession {
    alphabet: Alphabet,
    length: usize,
    pool_space: PoolSpace,
    secret: Code,
    pool: CandidatePool,
    guesses: Vec<GuessRecord>,
    status: SessionStatus,
    rng: StdRng,
}

impl CodeBreakerSession {
    /// Start a game with a freshly drawn secret
    pub fn new(config: &CodeConfig) -> Result<Self> {
        config.validate()?;
        let alphabet = config.alphabet()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let secret = generate_code(&alphabet, config.length, &mut rng)?;
        Ok(Self::build(alphabet, secret, config.pool_space, rng))
    }

    /// Start a game with a known secret
    ///
    /// # Errors
    ///
    /// Returns an error if the secret uses symbols outside `alphabet`.
    pub fn with_secret(alphabet: Alphabet, secret: Code, pool_space: PoolSpace) -> Result<Self> {
        let secret = alphabet.parse_code(&secret.to_string(), secret.len())?;
        let rng = StdRng::from_rng(&mut rand::rng());
        Ok(Self::build(alphabet, secret, pool_space, rng))
    }

    fn build(alphabet: Alphabet, secret: Code, pool_space: PoolSpace, rng: StdRng) -> Self {
        let length = secret.len();
        let pool = CandidatePool::new(pool_space, &alphabet, length);
        Self {
            alphabet,
            length,
            pool_space,
            secret,
            pool,
            guesses: Vec::new(),
            status: SessionStatus::AwaitingGuess,
            rng,
        }
    }

    /// Validate, score and record a guess, then narrow the pool.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] once the code is cracked
    /// - [`Error::GuessLength`] / [`Error::InvalidSymbol`] for malformed input,
    ///   in which case nothing changes
    pub fn submit(&mut self, input: &str) -> Result<GuessRecord> {
        if self.status == SessionStatus::Solved {
            return Err(Error::GameOver);
        }

        let guess = self.alphabet.parse_code(input, self.length)?;
        let feedback = score(&self.secret, &guess);

        let before = self.pool.len();
        self.pool = self.pool.filter(&guess, feedback);
        log::debug!(
            "guess {guess} scored {feedback}; pool narrowed from {before} to {}",
            self.pool.len()
        );

        self.status = if feedback.is_solved(self.length) {
            SessionStatus::Solved
        } else if self.pool.is_empty() {
            SessionStatus::Exhausted
        } else {
            SessionStatus::AwaitingGuess
        };

        let record = GuessRecord { guess, feedback };
        self.guesses.push(record.clone());
        Ok(record)
    }

    pub fn hint(&self) -> Hint<'_> {
        Hint {
            suggestion: self.pool.suggestion(),
            remaining: self.pool.len(),
        }
    }

    /// Draw a new secret and reset pool and history
    pub fn restart(&mut self) -> Result<()> {
        self.secret = generate_code(&self.alphabet, self.length, &mut self.rng)?;
        self.pool = CandidatePool::new(self.pool_space, &self.alphabet, self.length);
        self.guesses.clear();
        self.status = SessionStatus::AwaitingGuess;
        Ok(())
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn code_length(&self) -> usize {
        self.length
    }

    /// The secret; front-ends reveal it only once the game is solved
    pub fn secret(&self) -> &Code {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(secret: &str) -> CodeBreakerSession {
        CodeBreakerSession::with_secret(
            Alphabet::standard(),
            Code::from(secret),
            PoolSpace::WithRepetition,
        )
        .unwrap()
    }

    #[test]
    fn invalid_guess_changes_nothing() {
        let mut session = session("RGBY");
        assert!(session.submit("RGB").is_err());
        assert!(session.submit("RGBX").is_err());
        assert!(session.guesses().is_empty());
        assert_eq!(session.pool().len(), 1296);
        assert_eq!(session.status(), SessionStatus::AwaitingGuess);
    }

    #[test]
    fn correct_guess_solves() {
        let mut session = session("RGBY");
        let record = session.submit("gryb").unwrap();
        assert_eq!(record.feedback, Feedback::new(0, 4));
        assert_eq!(session.status(), SessionStatus::AwaitingGuess);

        session.submit("RGBY").unwrap();
        assert_eq!(session.status(), SessionStatus::Solved);
        assert_eq!(session.hint().remaining, 1);
        assert!(matches!(session.submit("RGBY"), Err(Error::GameOver)));
    }

    #[test]
    fn pool_always_keeps_secret() {
        let mut session = session("OPRG");
        for guess in ["RRGG", "BBYY", "OPGR", "PORG"] {
            session.submit(guess).unwrap();
            assert!(session.pool().contains(session.secret()));
        }
    }

    #[test]
    fn exhausted_pool_still_accepts_guesses() {
        // Repeated-symbol secret against a distinct-symbol pool.
        let mut session = CodeBreakerSession::with_secret(
            Alphabet::standard(),
            Code::from("RRGB"),
            PoolSpace::Permutations,
        )
        .unwrap();

        session.submit("RGBY").unwrap();
        assert_eq!(session.status(), SessionStatus::AwaitingGuess);

        let record = session.submit("RRGG").unwrap();
        assert_eq!(record.feedback, Feedback::new(3, 0));
        assert_eq!(session.status(), SessionStatus::Exhausted);
        let hint = session.hint();
        assert_eq!(hint.suggestion, None);
        assert_eq!(hint.remaining, 0);

        session.submit("RRGB").unwrap();
        assert_eq!(session.status(), SessionStatus::Solved);
        assert_eq!(session.guesses().len(), 3);
    }

    #[test]
    fn restart_resets_state() {
        let config = CodeConfig::default().with_seed(9);
        let mut session = CodeBreakerSession::new(&config).unwrap();
        session.submit("RGBY").unwrap();
        session.restart().unwrap();
        assert!(session.guesses().is_empty());
        assert_eq!(session.pool().len(), 1296);
        assert!(!session.secret().has_repeats());
    }

    #[test]
    fn seeded_sessions_share_secret() {
        let config = CodeConfig::default().with_seed(42);
        let a = CodeBreakerSession::new(&config).unwrap();
        let b = CodeBreakerSession::new(&config).unwrap();
        assert_eq!(a.secret(), b.secret());
    }
}
