use hangman_types::{GameOutcome, GuessOutcome, RoundId, RoundTally};
use tracing::{debug, info};

/// Things that happen while rounds are played. Never carries the secret word.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    RoundStarted {
        round_id: RoundId,
        word_length: usize,
        attempts: usize,
    },
    GuessRejected {
        round_id: RoundId,
        input: String,
    },
    GuessApplied {
        round_id: RoundId,
        letter: char,
        outcome: GuessOutcome,
        remaining_attempts: usize,
    },
    RoundFinished {
        round_id: RoundId,
        outcome: GameOutcome,
        guesses: usize,
    },
    SessionEnded {
        tally: RoundTally,
    },
}

impl GameEvent {
    pub fn round_id(&self) -> Option<RoundId> {
        match self {
            GameEvent::RoundStarted { round_id, .. } => Some(*round_id),
            GameEvent::GuessRejected { round_id, .. } => Some(*round_id),
            GameEvent::GuessApplied { round_id, .. } => Some(*round_id),
            GameEvent::RoundFinished { round_id, .. } => Some(*round_id),
            GameEvent::SessionEnded { .. } => None,
        }
    }
}

/// Event handler trait for processing game events
pub trait GameEventHandler {
    fn handle_event(&mut self, event: &GameEvent);
}

/// Simple event bus for distributing game events
#[derive(Default)]
pub struct GameEventBus {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl GameEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn publish(&mut self, event: GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(&event);
        }
    }
}

/// Forwards every event to `tracing`
#[derive(Debug, Default)]
pub struct TracingEventLogger;

impl GameEventHandler for TracingEventLogger {
    fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundStarted {
                round_id,
                word_length,
                attempts,
            } => info!(%round_id, word_length, attempts, "round started"),
            GameEvent::GuessRejected { round_id, input } => {
                debug!(%round_id, input = %input.escape_debug(), "guess rejected")
            }
            GameEvent::GuessApplied {
                round_id,
                letter,
                outcome,
                remaining_attempts,
            } => debug!(%round_id, %letter, ?outcome, remaining_attempts, "guess applied"),
            GameEvent::RoundFinished {
                round_id,
                outcome,
                guesses,
            } => info!(%round_id, ?outcome, guesses, "round finished"),
            GameEvent::SessionEnded { tally } => info!(
                played = tally.played,
                won = tally.won,
                lost = tally.lost,
                "session ended"
            ),
        }
    }
}
