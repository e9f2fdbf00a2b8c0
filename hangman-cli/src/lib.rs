pub mod config;
pub mod runner;
pub mod terminal;

pub use config::{Cli, Config};
pub use runner::{InputProvider, Renderer, RunMode, SessionRunner};
pub use terminal::{TerminalInput, TerminalRenderer};
