use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type RoundId = Uuid;

/// Marker shown for a letter that has not been revealed yet
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress, // Word incomplete, attempts left
    Won,        // Every position revealed
    Lost,       // Attempts exhausted with placeholders left
}

impl GameOutcome {
    /// Won and Lost accept no further guesses
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    Hit,  // Letter occurs in the secret word
    Miss, // Letter does not occur
}

/// Everything a renderer needs to draw the board after a guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub revealed: String,
    pub misses: Vec<char>,
    pub remaining_attempts: usize,
    pub outcome: GameOutcome,
}

impl BoardSnapshot {
    pub fn misses_joined(&self) -> String {
        self.misses
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn placeholders_left(&self) -> usize {
        self.revealed.chars().filter(|&c| c == PLACEHOLDER).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult {
    pub letter: char, // Normalized to uppercase
    pub outcome: GuessOutcome,
    pub board: BoardSnapshot,
}

/// Rounds finished during one run of the program
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTally {
    pub played: u32,
    pub won: u32,
    pub lost: u32,
}

impl RoundTally {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Won => self.won += 1,
            GameOutcome::Lost => self.lost += 1,
            GameOutcome::InProgress => {} // Abandoned rounds only count as played
        }
        self.played += 1;
    }
}
