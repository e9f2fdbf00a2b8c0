pub mod game_events;
pub mod secret_word;
pub mod session;

// Re-export main components
pub use game_events::*;
pub use secret_word::*;
pub use session::*;
