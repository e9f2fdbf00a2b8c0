#![allow(dead_code)]

use hangman_core::GameSession;
use hangman_types::{BoardSnapshot, GuessResult};

/// Creates a session, panicking on an invalid test word
pub fn create_session(word: &str) -> GameSession {
    GameSession::from_word(word).unwrap()
}

/// Applies each guess in order and returns the last result
pub fn play_guesses(session: &mut GameSession, guesses: &[&str]) -> Option<GuessResult> {
    guesses
        .iter()
        .map(|guess| session.apply_guess(guess).unwrap())
        .last()
}

/// Distinct letters of `word`, uppercase, in order of first appearance
pub fn distinct_letters(word: &str) -> Vec<char> {
    let mut seen = Vec::new();
    for c in word.chars().map(|c| c.to_ascii_uppercase()) {
        if !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen
}

/// First uppercase letter that does not occur in `word`
pub fn absent_letter(word: &str) -> Option<char> {
    let upper = word.to_ascii_uppercase();
    ('A'..='Z').find(|c| !upper.contains(*c))
}

/// Asserts the four rendered items of a board
pub fn assert_board(board: &BoardSnapshot, revealed: &str, misses: &[char], remaining: usize) {
    assert_eq!(board.revealed, revealed, "revealed word");
    assert_eq!(board.misses, misses, "missed letters");
    assert_eq!(board.remaining_attempts, remaining, "remaining attempts");
}
