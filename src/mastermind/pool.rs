//! Candidate pool: every code still consistent with the feedback so far

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{
    code::{Alphabet, Code, enumerate_all, enumerate_permutations},
    feedback::{Feedback, score},
};
use crate::Error;

/// Hypothesis space the pool is seeded from.
///
/// Secrets never repeat a symbol, but the default space still includes codes
/// with repeats (1296 codes for 6 symbols and length 4). `Permutations`
/// restricts the pool to distinct-symbol codes (360 for the same game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoolSpace {
    #[default]
    WithRepetition,
    Permutations,
}

impl PoolSpace {
    /// Enumerate every code in this space
    pub fn enumerate(self, alphabet: &Alphabet, length: usize) -> Vec<Code> {
        match self {
            PoolSpace::WithRepetition => enumerate_all(alphabet, length),
            PoolSpace::Permutations => enumerate_permutations(alphabet, length),
        }
    }
}

impl fmt::Display for PoolSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolSpace::WithRepetition => write!(f, "with-repetition"),
            PoolSpace::Permutations => write!(f, "permutations"),
        }
    }
}

impl FromStr for PoolSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "with-repetition" | "repetition" | "all" => Ok(PoolSpace::WithRepetition),
            "permutations" | "distinct" => Ok(PoolSpace::Permutations),
            _ => Err(Error::ParsePoolSpace {
                input: s.to_string(),
                expected: "with-repetition, permutations".to_string(),
            }),
        }
    }
}

/// Keep exactly the candidates `c` with `score(guess, c) == feedback`.
///
/// The input is left untouched and the original order is preserved.
pub fn filter_consistent(pool: &[Code], guess: &Code, feedback: Feedback) -> Vec<Code> {
    pool.iter()
        .filter(|candidate| score(guess, candidate) == feedback)
        .cloned()
        .collect()
}

/// Ordered set of codes consistent with every feedback received.
///
/// The pool only ever shrinks; its first element is the suggested next guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    candidates: Vec<Code>,
}

impl CandidatePool {
    /// Seed a full pool from `space`
    pub fn new(space: PoolSpace, alphabet: &Alphabet, length: usize) -> Self {
        Self {
            candidates: space.enumerate(alphabet, length),
        }
    }

    pub fn from_codes(candidates: Vec<Code>) -> Self {
        Self { candidates }
    }

    /// A new pool holding the candidates consistent with `guess` scoring `feedback`
    #[must_use = "filter returns a new pool; the original is unchanged"]
    pub fn filter(&self, guess: &Code, feedback: Feedback) -> Self {
        Self {
            candidates: filter_consistent(&self.candidates, guess, feedback),
        }
    }

    /// First remaining candidate, offered as a hint
    pub fn suggestion(&self) -> Option<&Code> {
        self.candidates.first()
    }

    pub fn contains(&self, code: &Code) -> bool {
        self.candidates.contains(code)
    }

    pub fn as_slice(&self) -> &[Code] {
        &self.candidates
    }

    pub fn iter(&self) -> impl Iterator<Item = &Code> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_keeps_only_consistent_codes() {
        let alphabet = Alphabet::standard();
        let pool = CandidatePool::new(PoolSpace::WithRepetition, &alphabet, 4);
        let secret = Code::from("RGBY");
        let guess = Code::from("RRGG");
        let feedback = score(&secret, &guess);

        let filtered = pool.filter(&guess, feedback);

        assert_eq!(pool.len(), 1296);
        assert!(filtered.len() < pool.len());
        assert!(filtered.contains(&secret));
        assert!(
            filtered
                .iter()
                .all(|c| score(&guess, c) == feedback && pool.contains(c))
        );
    }

    #[test]
    fn filter_is_idempotent() {
        let alphabet = Alphabet::standard();
        let pool = CandidatePool::new(PoolSpace::Permutations, &alphabet, 4);
        let guess = Code::from("OPRG");
        let feedback = Feedback::new(1, 1);

        let once = pool.filter(&guess, feedback);
        let twice = once.filter(&guess, feedback);
        assert_eq!(once, twice);
    }

    #[test]
    fn suggestion_is_first_candidate() {
        let pool = CandidatePool::from_codes(vec![Code::from("GR"), Code::from("RG")]);
        assert_eq!(pool.suggestion(), Some(&Code::from("GR")));
        assert_eq!(CandidatePool::from_codes(Vec::new()).suggestion(), None);
    }

    #[test]
    fn pool_space_parsing() {
        assert_eq!(
            "permutations".parse::<PoolSpace>().unwrap(),
            PoolSpace::Permutations
        );
        assert_eq!(
            "All".parse::<PoolSpace>().unwrap(),
            PoolSpace::WithRepetition
        );
        assert!(matches!(
            "sometimes".parse::<PoolSpace>(),
            Err(Error::ParsePoolSpace { .. })
        ));
    }
}
