use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use hangman_core::SecretWord;
use hangman_types::{BoardSnapshot, GameOutcome, GuessResult, RoundTally};

use crate::runner::{InputProvider, Renderer};

/// Line-oriented input, one answer per line
pub struct TerminalInput<R> {
    reader: R,
}

impl<R: BufRead> TerminalInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead> InputProvider for TerminalInput<R> {
    fn read_secret_word(&mut self) -> Result<Option<String>> {
        self.next_line()
    }

    fn read_guess(&mut self) -> Result<Option<String>> {
        self.next_line()
    }

    fn read_replay_choice(&mut self) -> Result<Option<String>> {
        self.next_line()
    }
}

/// Plain-text renderer. Clearing uses crossterm escape sequences.
pub struct TerminalRenderer<W> {
    out: W,
    clear_screen: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush().context("Failed to flush output")
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn prompt_secret_word(&mut self) -> Result<()> {
        self.prompt("Enter your secret word : ")
    }

    fn prompt_guess(&mut self) -> Result<()> {
        self.prompt("Your guess : ")
    }

    fn prompt_replay(&mut self) -> Result<()> {
        self.prompt("Do you want to play again ?\n1. YES\n2. NO\n")
    }

    fn turn(&mut self, result: &GuessResult) -> Result<()> {
        let board = &result.board;
        writeln!(self.out, "Word : {}", board.revealed)?;
        writeln!(self.out, "Guess : {}", result.letter)?;
        writeln!(self.out, "Misses : {}", board.misses_joined())?;
        writeln!(
            self.out,
            "Number of guesses left : {}",
            board.remaining_attempts
        )?;
        Ok(())
    }

    fn round_over(&mut self, secret: &SecretWord, board: &BoardSnapshot) -> Result<()> {
        match board.outcome {
            GameOutcome::Won => writeln!(self.out, "You found the word {secret}!")?,
            GameOutcome::Lost => writeln!(self.out, "You lost! The word was {secret}.")?,
            GameOutcome::InProgress => {}
        }
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    fn summary(&mut self, tally: &RoundTally) -> Result<()> {
        writeln!(
            self.out,
            "Rounds played : {} (won {}, lost {})",
            tally.played, tally.won, tally.lost
        )?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangman_types::GuessOutcome;
    use std::io::Cursor;

    fn rendered(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_input_lines() {
        let mut input = TerminalInput::new(Cursor::new("cat\r\n z\n\n2"));
        assert_eq!(input.read_secret_word().unwrap().as_deref(), Some("cat"));
        assert_eq!(input.read_guess().unwrap().as_deref(), Some(" z"));
        assert_eq!(input.read_guess().unwrap().as_deref(), Some(""));
        assert_eq!(input.read_replay_choice().unwrap().as_deref(), Some("2"));
        assert_eq!(input.read_guess().unwrap(), None);
    }

    #[test]
    fn test_turn_layout() {
        let mut renderer = TerminalRenderer::new(Vec::new(), false);
        let result = GuessResult {
            letter: 'Q',
            outcome: GuessOutcome::Miss,
            board: BoardSnapshot {
                revealed: "C__".to_string(),
                misses: vec!['Z', 'Q'],
                remaining_attempts: 4,
                outcome: GameOutcome::InProgress,
            },
        };
        renderer.turn(&result).unwrap();

        assert_eq!(
            rendered(renderer),
            "Word : C__\nGuess : Q\nMisses : Z,Q\nNumber of guesses left : 4\n"
        );
    }

    #[test]
    fn test_round_over_reveals_word() {
        let secret = SecretWord::parse("ox").unwrap();
        let mut board = BoardSnapshot {
            revealed: "O_".to_string(),
            misses: vec!['A'],
            remaining_attempts: 0,
            outcome: GameOutcome::Lost,
        };

        let mut renderer = TerminalRenderer::new(Vec::new(), false);
        renderer.round_over(&secret, &board).unwrap();
        board.outcome = GameOutcome::Won;
        renderer.round_over(&secret, &board).unwrap();

        assert_eq!(
            rendered(renderer),
            "You lost! The word was OX.\nYou found the word OX!\n"
        );
    }

    #[test]
    fn test_clear_respects_setting() {
        let mut quiet = TerminalRenderer::new(Vec::new(), false);
        quiet.clear().unwrap();
        assert!(rendered(quiet).is_empty());

        let mut clearing = TerminalRenderer::new(Vec::new(), true);
        clearing.clear().unwrap();
        let out = rendered(clearing);
        assert!(out.starts_with('\u{1b}'), "expected an escape sequence, got {out:?}");
    }

    #[test]
    fn test_prompts_and_summary() {
        let mut renderer = TerminalRenderer::new(Vec::new(), false);
        renderer.prompt_secret_word().unwrap();
        renderer.prompt_guess().unwrap();
        renderer.prompt_replay().unwrap();
        renderer
            .summary(&RoundTally {
                played: 3,
                won: 2,
                lost: 1,
            })
            .unwrap();

        assert_eq!(
            rendered(renderer),
            "Enter your secret word : Your guess : Do you want to play again ?\n1. YES\n2. NO\n\
             Rounds played : 3 (won 2, lost 1)\n"
        );
    }
}
