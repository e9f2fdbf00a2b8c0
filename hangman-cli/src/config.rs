use std::env;

use clap::Parser;
use tracing::warn;

use crate::runner::RunMode;

pub const CLEAR_SCREEN_VAR: &str = "HANGMAN_CLEAR_SCREEN";

/// Terminal hangman: one player picks a word, the other guesses it
#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "Guess the secret word one letter at a time", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Secret word for a single round. Without it, words are asked for
    /// interactively and a replay is offered after each round.
    pub word: Option<String>,

    /// Keep earlier turns on screen instead of clearing the terminal
    #[arg(long)]
    pub no_clear: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: RunMode,
    pub clear_screen: bool,
}

impl Config {
    pub fn new(cli: Cli) -> Self {
        Self::from_parts(cli, env::var(CLEAR_SCREEN_VAR).ok())
    }

    fn from_parts(cli: Cli, clear_screen_env: Option<String>) -> Self {
        let env_clear = match clear_screen_env.as_deref() {
            None => true,
            Some(value) => parse_flag(value).unwrap_or_else(|| {
                warn!(value, "Invalid {CLEAR_SCREEN_VAR}, keeping the default");
                true
            }),
        };

        let mode = match cli.word {
            Some(word) => RunMode::SingleRound { word },
            None => RunMode::Interactive,
        };

        Self {
            mode,
            clear_screen: env_clear && !cli.no_clear,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
