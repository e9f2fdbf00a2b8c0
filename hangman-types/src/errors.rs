use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::GameOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordRejection {
    Empty,
    TooShort,
    NonLetter(char),
}

impl std::fmt::Display for WordRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordRejection::Empty => write!(f, "the word is empty"),
            WordRejection::TooShort => write!(f, "the word needs at least 2 letters"),
            WordRejection::NonLetter(c) => write!(f, "'{c}' is not a letter"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Invalid word {word:?}: {reason}")]
    InvalidWord { word: String, reason: WordRejection },
    #[error("Invalid guess {input:?}: expected a single letter")]
    InvalidGuess { input: String },
    #[error("Session already finished ({outcome:?})")]
    SessionClosed { outcome: GameOutcome },
}
