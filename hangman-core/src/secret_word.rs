use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use hangman_types::{GameError, WordRejection};

pub const MIN_WORD_LENGTH: usize = 2;

/// The word the guesser has to find, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    letters: Vec<char>,
}

impl SecretWord {
    /// Validate and normalize a word typed by the game master
    pub fn parse(input: &str) -> Result<Self, GameError> {
        let word = input.trim();
        let reject = |reason| GameError::InvalidWord {
            word: word.to_string(),
            reason,
        };

        if word.is_empty() {
            return Err(reject(WordRejection::Empty));
        }
        if let Some(bad) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(reject(WordRejection::NonLetter(bad)));
        }
        if word.len() < MIN_WORD_LENGTH {
            return Err(reject(WordRejection::TooShort));
        }

        Ok(Self {
            letters: word.chars().map(|c| c.to_ascii_uppercase()).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Case-insensitive membership check
    pub fn contains(&self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        self.letters.contains(&letter)
    }

    pub fn positions_of(&self, letter: char) -> impl Iterator<Item = usize> + '_ {
        let letter = letter.to_ascii_uppercase();
        self.letters
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == letter)
            .map(|(i, _)| i)
    }

    pub fn distinct_letters(&self) -> usize {
        self.letters.iter().collect::<HashSet<_>>().len()
    }
}

impl FromStr for SecretWord {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Turn raw guess input into an uppercase letter
pub fn parse_guess(input: &str) -> Result<char, GameError> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(GameError::InvalidGuess {
            input: input.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejection(input: &str) -> WordRejection {
        match SecretWord::parse(input) {
            Err(GameError::InvalidWord { reason, .. }) => reason,
            other => panic!("expected InvalidWord for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_normalizes_case() {
        let word = SecretWord::parse("cAt").unwrap();
        assert_eq!(word.letters(), &['C', 'A', 'T']);
        assert_eq!(word.to_string(), "CAT");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let word: SecretWord = "  hello\n".parse().unwrap();
        assert_eq!(word.to_string(), "HELLO");
    }

    #[test]
    fn test_rejected_words() {
        assert_eq!(rejection(""), WordRejection::Empty);
        assert_eq!(rejection("   "), WordRejection::Empty);
        assert_eq!(rejection("A"), WordRejection::TooShort);
        assert_eq!(rejection("cat1"), WordRejection::NonLetter('1'));
        assert_eq!(rejection("ice cream"), WordRejection::NonLetter(' '));
        assert_eq!(rejection("x-ray"), WordRejection::NonLetter('-'));
        assert_eq!(rejection("café"), WordRejection::NonLetter('é'));
    }

    #[test]
    fn test_shortest_valid_word() {
        assert!(SecretWord::parse("ab").is_ok());
    }

    #[test]
    fn test_contains_and_positions() {
        let word = SecretWord::parse("banana").unwrap();
        assert!(word.contains('a'));
        assert!(word.contains('N'));
        assert!(!word.contains('z'));
        assert_eq!(word.positions_of('a').collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(word.positions_of('B').collect::<Vec<_>>(), vec![0]);
        assert_eq!(word.positions_of('q').count(), 0);
        assert_eq!(word.distinct_letters(), 3);
    }

    #[test]
    fn test_parse_guess() {
        assert_eq!(parse_guess("a"), Ok('A'));
        assert_eq!(parse_guess("Q"), Ok('Q'));
        assert_eq!(parse_guess(" z \n"), Ok('Z'));

        for bad in ["", " ", "5", "ab", "?", "é"] {
            assert_eq!(
                parse_guess(bad),
                Err(GameError::InvalidGuess {
                    input: bad.to_string()
                }),
                "input {bad:?} should be rejected"
            );
        }
    }
}
