//! Session state structures
//!
//! The flag set a view layer renders from, the event type fanned out to
//! observers, and the outcome reported by a `submit` call.

use serde::{Deserialize, Serialize};

use crate::types::messages::ChatMessage;

/// Session liveness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Accepting submissions
    Active,
    /// Ended by the sentinel reply; only restart revives it
    Ended,
}

/// How a `submit` call resolved
///
/// Rejection and staleness are contractual no-ops, not errors, so they are
/// reported here instead of through `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input, an exchange already pending, or an ended session
    Rejected,
    /// Reply appended; session still active
    Replied,
    /// Sentinel received; farewell appended and session ended
    Ended,
    /// Transport failure; apology appended, session still active
    Failed,
    /// A restart abandoned this exchange; its resolution was discarded
    Stale,
}

/// Notification fanned out to observers (the view layer)
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// A message was appended to the transcript
    MessageAppended(ChatMessage),
    /// The transcript was cleared and reseeded by a restart
    TranscriptReset(ChatMessage),
    /// One or more session flags changed
    FlagsChanged {
        /// Current liveness
        status: SessionStatus,
        /// Whether an exchange is outstanding
        pending: bool,
        /// Typing-indicator affordance; false whenever `pending` is false
        typing: bool,
    },
}

/// Mutable session bookkeeping behind the controller's mutex
#[derive(Debug)]
pub(crate) struct SessionFlags {
    pub status: SessionStatus,
    pub pending: bool,
    pub typing: bool,
    /// Incremented on every restart; replies from an older epoch are stale
    pub epoch: u64,
}

impl SessionFlags {
    pub(crate) fn new() -> Self {
        Self {
            status: SessionStatus::Active,
            pending: false,
            typing: false,
            epoch: 0,
        }
    }
}
