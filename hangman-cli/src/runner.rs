use std::fmt;

use anyhow::{Context, Result};
use hangman_core::{GameEvent, GameEventBus, GameEventHandler, GameSession, SecretWord};
use hangman_types::{BoardSnapshot, GameError, GameOutcome, GuessResult, RoundId, RoundTally};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

pub const WORD_REJECTED: &str = "You have to input a word only with letters.";
pub const GUESS_REJECTED: &str = "You have to input only a letter.";
pub const REPLAY_REJECTED: &str = "You have to input either 1 or 2.";

/// Source of everything the players type. `None` means the input is closed.
pub trait InputProvider {
    fn read_secret_word(&mut self) -> Result<Option<String>>;
    fn read_guess(&mut self) -> Result<Option<String>>;
    fn read_replay_choice(&mut self) -> Result<Option<String>>;
}

pub trait Renderer {
    fn clear(&mut self) -> Result<()>;
    fn prompt_secret_word(&mut self) -> Result<()>;
    fn prompt_guess(&mut self) -> Result<()>;
    fn prompt_replay(&mut self) -> Result<()>;
    fn turn(&mut self, result: &GuessResult) -> Result<()>;
    fn round_over(&mut self, secret: &SecretWord, board: &BoardSnapshot) -> Result<()>;
    fn notice(&mut self, message: &str) -> Result<()>;
    fn summary(&mut self, tally: &RoundTally) -> Result<()>;
}

#[derive(Clone, PartialEq, Eq)]
pub enum RunMode {
    /// One round over a word given up front, no replay prompt
    SingleRound { word: String },
    /// Ask for a word every round and offer a replay after each
    Interactive,
}

impl RunMode {
    pub fn is_single_round(&self) -> bool {
        matches!(self, RunMode::SingleRound { .. })
    }
}

// Keeps the secret word out of debug output and logs
impl fmt::Debug for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::SingleRound { word } => f
                .debug_struct("SingleRound")
                .field("word_length", &word.len())
                .finish(),
            RunMode::Interactive => f.write_str("Interactive"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayChoice {
    Yes,
    No,
}

impl ReplayChoice {
    /// `1` plays again, `2` quits
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u16>() {
            Ok(1) => Some(ReplayChoice::Yes),
            Ok(2) => Some(ReplayChoice::No),
            _ => None,
        }
    }
}

pub struct SessionRunner<I, R> {
    input: I,
    renderer: R,
    mode: RunMode,
    events: GameEventBus,
    tally: RoundTally,
}

impl<I: InputProvider, R: Renderer> SessionRunner<I, R> {
    pub fn new(input: I, renderer: R, mode: RunMode) -> Self {
        Self {
            input,
            renderer,
            mode,
            events: GameEventBus::new(),
            tally: RoundTally::default(),
        }
    }

    pub fn with_event_handler(mut self, handler: Box<dyn GameEventHandler>) -> Self {
        self.events.add_handler(handler);
        self
    }

    pub fn tally(&self) -> RoundTally {
        self.tally
    }

    pub fn into_parts(self) -> (I, R) {
        (self.input, self.renderer)
    }

    /// Plays rounds until the mode says stop. Returns what was played.
    #[instrument(skip_all, fields(single_round = self.mode.is_single_round()))]
    pub fn run(&mut self) -> Result<RoundTally> {
        match self.mode.clone() {
            RunMode::SingleRound { word } => {
                let secret =
                    SecretWord::parse(&word).context("Secret word argument is not usable")?;
                self.renderer.clear()?;
                self.play_round(Uuid::new_v4(), secret)?;
            }
            RunMode::Interactive => {
                while let Some(secret) = self.ask_secret_word()? {
                    self.renderer.clear()?;
                    let outcome = self.play_round(Uuid::new_v4(), secret)?;
                    if !outcome.is_terminal() || !self.ask_replay()? {
                        break;
                    }
                }
                self.renderer.summary(&self.tally)?;
            }
        }

        self.events.publish(GameEvent::SessionEnded { tally: self.tally });
        Ok(self.tally)
    }

    /// Returns `InProgress` when input closed before the round ended
    #[instrument(skip(self, secret))]
    fn play_round(&mut self, round_id: RoundId, secret: SecretWord) -> Result<GameOutcome> {
        let mut session = GameSession::new(secret);
        self.events.publish(GameEvent::RoundStarted {
            round_id,
            word_length: session.secret().len(),
            attempts: session.remaining_attempts(),
        });

        while session.status() == GameOutcome::InProgress {
            self.renderer.prompt_guess()?;
            let Some(input) = self.input.read_guess()? else {
                warn!("Input closed before the round finished");
                break;
            };

            match session.apply_guess(&input) {
                Ok(result) => {
                    self.events.publish(GameEvent::GuessApplied {
                        round_id,
                        letter: result.letter,
                        outcome: result.outcome,
                        remaining_attempts: result.board.remaining_attempts,
                    });
                    self.renderer.clear()?;
                    self.renderer.turn(&result)?;
                }
                Err(GameError::InvalidGuess { input }) => {
                    self.events
                        .publish(GameEvent::GuessRejected { round_id, input });
                    self.renderer.notice(GUESS_REJECTED)?;
                }
                Err(err) => return Err(err.into()),
            }
        }

        let outcome = session.status();
        self.tally.record(outcome);
        self.events.publish(GameEvent::RoundFinished {
            round_id,
            outcome,
            guesses: session.guess_count(),
        });

        if outcome.is_terminal() {
            self.renderer
                .round_over(session.secret(), &session.snapshot())?;
        }
        Ok(outcome)
    }

    fn ask_secret_word(&mut self) -> Result<Option<SecretWord>> {
        loop {
            self.renderer.prompt_secret_word()?;
            let Some(line) = self.input.read_secret_word()? else {
                info!("Input closed while waiting for a secret word");
                return Ok(None);
            };

            match SecretWord::parse(&line) {
                Ok(secret) => return Ok(Some(secret)),
                Err(GameError::InvalidWord { .. }) => {
                    debug!("Secret word rejected");
                    self.renderer.notice(WORD_REJECTED)?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn ask_replay(&mut self) -> Result<bool> {
        loop {
            self.renderer.prompt_replay()?;
            let Some(line) = self.input.read_replay_choice()? else {
                return Ok(false);
            };

            match ReplayChoice::parse(&line) {
                Some(choice) => return Ok(choice == ReplayChoice::Yes),
                None => self.renderer.notice(REPLAY_REJECTED)?,
            }
        }
    }
}
