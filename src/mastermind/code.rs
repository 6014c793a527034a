//! Alphabets, codes and enumeration of the hypothesis space

use std::fmt;

use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Ordered set of distinct, upper-case symbols
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet, upper-casing every symbol.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAlphabet`] for no symbols and
    /// [`Error::DuplicateSymbol`] when a symbol repeats.
    pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Result<Self> {
        let mut seen = Vec::new();
        for symbol in symbols.into_iter().map(|c| c.to_ascii_uppercase()) {
            if seen.contains(&symbol) {
                return Err(Error::DuplicateSymbol { symbol });
            }
            seen.push(symbol);
        }
        if seen.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        Ok(Self { symbols: seen })
    }

    /// The six classic colours: R, G, B, Y, O, P
    pub fn standard() -> Self {
        Self {
            symbols: vec!['R', 'G', 'B', 'Y', 'O', 'P'],
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Parse user input into a code of exactly `length` symbols.
    ///
    /// Input is trimmed and upper-cased first. Repeated symbols are allowed
    /// in guesses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GuessLength`] or [`Error::InvalidSymbol`].
    pub fn parse_code(&self, input: &str, length: usize) -> Result<Code> {
        let symbols: Vec<char> = input.trim().chars().map(|c| c.to_ascii_uppercase()).collect();
        if symbols.len() != length {
            return Err(Error::GuessLength {
                expected: length,
                got: symbols.len(),
            });
        }
        if let Some((position, &symbol)) = symbols
            .iter()
            .enumerate()
            .find(|(_, s)| !self.contains(**s))
        {
            return Err(Error::InvalidSymbol {
                symbol,
                position,
                allowed: self.to_string(),
            });
        }
        Ok(Code(symbols))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.symbols.iter().map(char::to_string).collect();
        write!(f, "{}", joined.join(", "))
    }
}

/// An ordered sequence of symbols: a secret, a guess or a candidate
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Code(Vec<char>);

impl Code {
    pub fn new(symbols: Vec<char>) -> Self {
        Code(symbols)
    }

    pub fn symbols(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any symbol occurs more than once
    pub fn has_repeats(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .any(|(i, s)| self.0[i + 1..].contains(s))
    }
}

impl FromIterator<char> for Code {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Code(iter.into_iter().collect())
    }
}

impl From<&str> for Code {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.0.iter().collect();
        f.write_str(&s)
    }
}

/// Draw `length` distinct symbols uniformly at random, in random order.
///
/// # Errors
///
/// Returns [`Error::CodeTooLong`] if `length` exceeds the alphabet size.
pub fn generate_code<R: Rng + ?Sized>(
    alphabet: &Alphabet,
    length: usize,
    rng: &mut R,
) -> Result<Code> {
    if length > alphabet.len() {
        return Err(Error::CodeTooLong {
            length,
            alphabet_size: alphabet.len(),
        });
    }
    let mut symbols = alphabet.symbols().to_vec();
    symbols.shuffle(rng);
    symbols.truncate(length);
    Ok(Code(symbols))
}

/// Every sequence of `length` symbols with repetition (|alphabet|^length
/// codes), in lexicographic alphabet order.
pub fn enumerate_all(alphabet: &Alphabet, length: usize) -> Vec<Code> {
    let mut prefixes: Vec<Vec<char>> = vec![Vec::new()];
    for _ in 0..length {
        let mut extended = Vec::with_capacity(prefixes.len() * alphabet.len());
        for prefix in &prefixes {
            for &symbol in alphabet.symbols() {
                let mut next = prefix.clone();
                next.push(symbol);
                extended.push(next);
            }
        }
        prefixes = extended;
    }
    prefixes.into_iter().map(Code).collect()
}

/// Every sequence of `length` distinct symbols, in lexicographic alphabet
/// order. Empty when `length` exceeds the alphabet size.
pub fn enumerate_permutations(alphabet: &Alphabet, length: usize) -> Vec<Code> {
    let mut prefixes: Vec<Vec<char>> = vec![Vec::new()];
    for _ in 0..length {
        let mut extended = Vec::new();
        for prefix in &prefixes {
            for &symbol in alphabet.symbols() {
                if prefix.contains(&symbol) {
                    continue;
                }
                let mut next = prefix.clone();
                next.push(symbol);
                extended.push(next);
            }
        }
        prefixes = extended;
    }
    prefixes.into_iter().map(Code).collect()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn enumerate_two_symbols() {
        let alphabet = Alphabet::new("RG".chars()).unwrap();
        let codes: Vec<String> = enumerate_all(&alphabet, 2)
            .iter()
            .map(Code::to_string)
            .collect();
        assert_eq!(codes, vec!["RR", "RG", "GR", "GG"]);
    }

    #[test]
    fn enumeration_sizes() {
        let alphabet = Alphabet::standard();
        assert_eq!(enumerate_all(&alphabet, 4).len(), 1296);
        assert_eq!(enumerate_permutations(&alphabet, 4).len(), 360);
        assert!(enumerate_permutations(&alphabet, 4).iter().all(|c| !c.has_repeats()));
        assert!(enumerate_permutations(&alphabet, 7).is_empty());
    }

    #[test]
    fn generated_codes_have_no_repeats() {
        let alphabet = Alphabet::standard();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let code = generate_code(&alphabet, 4, &mut rng).unwrap();
            assert_eq!(code.len(), 4);
            assert!(!code.has_repeats());
            assert!(code.symbols().iter().all(|&s| alphabet.contains(s)));
        }
    }

    #[test]
    fn generate_rejects_long_codes() {
        let alphabet = Alphabet::new("RGB".chars()).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            generate_code(&alphabet, 4, &mut rng),
            Err(Error::CodeTooLong {
                length: 4,
                alphabet_size: 3
            })
        ));
    }

    #[test]
    fn alphabet_validation() {
        assert!(matches!(
            Alphabet::new("RGR".chars()),
            Err(Error::DuplicateSymbol { symbol: 'R' })
        ));
        assert!(matches!(Alphabet::new("".chars()), Err(Error::EmptyAlphabet)));
        assert_eq!(Alphabet::new("rg".chars()).unwrap().symbols(), &['R', 'G']);
    }

    #[test]
    fn parse_code_checks_length_and_symbols() {
        let alphabet = Alphabet::standard();
        assert_eq!(alphabet.parse_code(" rgby ", 4).unwrap(), Code::from("RGBY"));
        assert_eq!(alphabet.parse_code("RRRR", 4).unwrap(), Code::from("RRRR"));
        assert!(matches!(
            alphabet.parse_code("RGB", 4),
            Err(Error::GuessLength {
                expected: 4,
                got: 3
            })
        ));
        assert!(matches!(
            alphabet.parse_code("RGXB", 4),
            Err(Error::InvalidSymbol {
                symbol: 'X',
                position: 2,
                ..
            })
        ));
    }
}
