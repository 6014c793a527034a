//! Guess scoring

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

use super::code::Code;

/// Exact positional matches and colour-only matches for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    pub exact: usize,
    pub color_only: usize,
}

impl Feedback {
    pub fn new(exact: usize, color_only: usize) -> Self {
        Self { exact, color_only }
    }

    /// Whether this feedback cracks a code of `length` symbols
    pub fn is_solved(&self, length: usize) -> bool {
        self.exact == length
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exact {} | close {}", self.exact, self.color_only)
    }
}

/// Score `guess` against `secret`.
///
/// `exact` counts positions holding the same symbol. The colour-only count is
/// the multiset overlap of the two codes (sum of the smaller per-symbol
/// counts) minus `exact`, which keeps it correct when either side repeats a
/// symbol. Codes are expected to have equal length.
pub fn score(secret: &Code, guess: &Code) -> Feedback {
    let exact = secret
        .symbols()
        .iter()
        .zip(guess.symbols())
        .filter(|(s, g)| s == g)
        .count();

    let mut remaining: HashMap<char, usize> = HashMap::new();
    for &symbol in secret.symbols() {
        *remaining.entry(symbol).or_insert(0) += 1;
    }
    let mut common = 0;
    for symbol in guess.symbols() {
        if let Some(count) = remaining.get_mut(symbol) {
            if *count > 0 {
                *count -= 1;
                common += 1;
            }
        }
    }

    Feedback {
        exact,
        color_only: common - exact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        Code::from(s)
    }

    #[test]
    fn all_colours_misplaced() {
        assert_eq!(score(&code("RGBY"), &code("GRYB")), Feedback::new(0, 4));
    }

    #[test]
    fn exact_match_scores_full_length() {
        assert_eq!(score(&code("RGBY"), &code("RGBY")), Feedback::new(4, 0));
        assert!(score(&code("RGBY"), &code("RGBY")).is_solved(4));
    }

    #[test]
    fn repeated_guess_symbols_count_once_per_secret_symbol() {
        // Only one R in the secret, and it is already an exact match.
        assert_eq!(score(&code("RGBY"), &code("RRRR")), Feedback::new(1, 0));
        assert_eq!(score(&code("RGBY"), &code("YRRO")), Feedback::new(0, 2));
        assert_eq!(score(&code("RGBY"), &code("GGRR")), Feedback::new(1, 1));
    }

    #[test]
    fn repeated_secret_symbols() {
        assert_eq!(score(&code("RRGG"), &code("GRRB")), Feedback::new(1, 2));
    }

    #[test]
    fn disjoint_codes() {
        assert_eq!(score(&code("RGBY"), &code("OPOP")), Feedback::new(0, 0));
    }
}
