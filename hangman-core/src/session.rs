use hangman_types::{BoardSnapshot, GameError, GameOutcome, GuessOutcome, GuessResult, PLACEHOLDER};
use tracing::debug;

use crate::{SecretWord, parse_guess};

/// Wrong guesses allowed per letter of the secret word
pub const ATTEMPTS_PER_LETTER: usize = 2;

/// One round of hangman over a single secret word
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: SecretWord,
    revealed: Vec<Option<char>>, // None until the letter is guessed
    misses: Vec<char>,           // First-miss order, no duplicates
    remaining_attempts: usize,
    guess_count: usize,
}

impl GameSession {
    pub fn new(secret: SecretWord) -> Self {
        let length = secret.len();
        Self {
            secret,
            revealed: vec![None; length],
            misses: Vec::new(),
            remaining_attempts: length * ATTEMPTS_PER_LETTER,
            guess_count: 0,
        }
    }

    pub fn from_word(word: &str) -> Result<Self, GameError> {
        SecretWord::parse(word).map(Self::new)
    }

    /// Apply raw guess input. Rejected input leaves the session untouched.
    pub fn apply_guess(&mut self, input: &str) -> Result<GuessResult, GameError> {
        self.ensure_open()?;
        let letter = parse_guess(input)?;
        Ok(self.apply(letter))
    }

    pub fn apply_letter(&mut self, letter: char) -> Result<GuessResult, GameError> {
        self.ensure_open()?;
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidGuess {
                input: letter.to_string(),
            });
        }
        Ok(self.apply(letter.to_ascii_uppercase()))
    }

    fn ensure_open(&self) -> Result<(), GameError> {
        match self.status() {
            GameOutcome::InProgress => Ok(()),
            outcome => Err(GameError::SessionClosed { outcome }),
        }
    }

    fn apply(&mut self, letter: char) -> GuessResult {
        self.guess_count += 1;

        let outcome = if self.secret.contains(letter) {
            for i in self.secret.positions_of(letter) {
                self.revealed[i] = Some(letter);
            }
            GuessOutcome::Hit
        } else {
            if !self.misses.contains(&letter) {
                self.misses.push(letter);
            }
            // Repeated misses still cost an attempt
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
            GuessOutcome::Miss
        };

        debug!(
            guess = %letter,
            ?outcome,
            remaining_attempts = self.remaining_attempts,
            "guess applied"
        );

        GuessResult {
            letter,
            outcome,
            board: self.snapshot(),
        }
    }

    pub fn status(&self) -> GameOutcome {
        if self.revealed.iter().all(Option::is_some) {
            GameOutcome::Won
        } else if self.remaining_attempts == 0 {
            GameOutcome::Lost
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            revealed: self.revealed(),
            misses: self.misses.clone(),
            remaining_attempts: self.remaining_attempts,
            outcome: self.status(),
        }
    }

    pub fn revealed(&self) -> String {
        self.revealed
            .iter()
            .map(|slot| slot.unwrap_or(PLACEHOLDER))
            .collect()
    }

    pub fn misses(&self) -> &[char] {
        &self.misses
    }

    pub fn remaining_attempts(&self) -> usize {
        self.remaining_attempts
    }

    pub fn guess_count(&self) -> usize {
        self.guess_count
    }

    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }
}
