//! # TechBuddy Chat Core
//!
//! Client-side chat session core: an append-only transcript, a session state
//! machine with one outstanding exchange at a time, and a pluggable reply
//! service. The view layer stays outside this crate; it observes the
//! transcript and session flags and calls [`SessionController::submit`] /
//! [`SessionController::restart`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use techbuddy_chat::{ChatOptions, SessionController, SubmitOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = ChatOptions::builder()
//!         .endpoint("http://localhost:5000/api/chat")
//!         .build();
//!     let session = SessionController::over_http(options)?;
//!
//!     if session.submit("What is AI?").await == SubmitOutcome::Replied {
//!         for message in session.messages() {
//!             println!("{}: {}", message.role, message.text);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## State machine
//!
//! A session is `Active`/idle, `Active`/pending, or `Ended`:
//!
//! - `submit` is accepted only in `Active`/idle with non-blank input; every
//!   other call is a silent no-op ([`SubmitOutcome::Rejected`]).
//! - The reserved reply body [`QUIT_SENTINEL`] ends the session; the user
//!   sees a fixed farewell instead of the sentinel itself.
//! - Transport failure appends an error-status apology and leaves the
//!   session active.
//! - `restart` works in any state, reseeds the transcript, and bumps an
//!   epoch counter so a reply still in flight is discarded, never appended.
//!
//! ## Observing state
//!
//! [`SessionController::subscribe`] returns a broadcast receiver of
//! [`ChatEvent`] values covering message appends, transcript resets, and
//! flag changes; any view layer that reacts to those renders correctly
//! without polling.

pub mod config;
pub mod error;
pub mod reply;
pub mod session;
pub mod transcript;
pub mod types;

pub use config::{ChatOptions, ChatOptionsBuilder, DEFAULT_ENDPOINT, DEFAULT_REPLY_DELAY};
pub use error::{ChatError, Result};
pub use reply::{HttpReplyService, ReplyService};
pub use session::{
    ChatEvent, QUIT_SENTINEL, SessionController, SessionStatus, SubmitOutcome,
};
pub use transcript::TranscriptStore;
pub use types::{ChatMessage, DeliveryStatus, MessageId, Role};
