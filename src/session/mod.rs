//! Session lifecycle
//!
//! The state machine that owns the transcript, sequences one exchange at a
//! time, and interprets the reply protocol (including the end-of-session
//! sentinel).

pub mod controller;
pub mod state;

pub use controller::SessionController;
pub use state::{ChatEvent, SessionStatus, SubmitOutcome};

/// Reserved reply body meaning "end the session"
///
/// Matched exactly and case-sensitively against the raw reply text; it is
/// never displayed to the user, the farewell text stands in for it.
pub const QUIT_SENTINEL: &str = "quit";

/// Seed message for a fresh session
pub const WELCOME_TEXT: &str = "👋 Welcome to TechBuddy!\n\nI can help you with:\n• AI and Machine Learning\n• Scratch Programming\n• Web Development\n• Robotics\n• EA Sports\n• MIT App Inventor\n\nTo quit, type 'quit', 'exit', or 'bye'.";

/// Seed message after a restart
pub const WELCOME_BACK_TEXT: &str = "👋 Welcome back to TechBuddy! How can I help you today?";

/// Shown in place of the quit sentinel when the session ends
pub const FAREWELL_TEXT: &str = "👋 Goodbye! Thanks for chatting with TechBuddy.";

/// Synthesized locally when the reply service cannot be reached
pub const APOLOGY_TEXT: &str = "Sorry, I'm having trouble connecting right now. Please try again.";
