use std::io;

use anyhow::Result;
use clap::Parser;
use hangman_cli::{Cli, Config, SessionRunner, TerminalInput, TerminalRenderer};
use hangman_core::TracingEventLogger;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::new(cli);
    info!(mode = ?config.mode, clear_screen = config.clear_screen, "Starting hangman");

    let input = TerminalInput::new(io::stdin().lock());
    let renderer = TerminalRenderer::new(io::stdout(), config.clear_screen);
    let mut runner = SessionRunner::new(input, renderer, config.mode)
        .with_event_handler(Box::new(TracingEventLogger));

    let tally = runner.run()?;
    info!(played = tally.played, won = tally.won, lost = tally.lost, "Goodbye");
    Ok(())
}
