//! Transcript store
//!
//! Holds the ordered message sequence for the current session. The store is
//! append-only; the only way messages ever leave it is a full [`reset`]
//! during session restart. Every mutation is fanned out to observers over a
//! broadcast channel so a view layer can re-render without polling.
//!
//! [`reset`]: TranscriptStore::reset

use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::session::state::ChatEvent;
use crate::types::messages::ChatMessage;

/// Capacity of the observer broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Ordered, append-only log of chat messages
pub struct TranscriptStore {
    messages: Mutex<Vec<ChatMessage>>,
    events: broadcast::Sender<ChatEvent>,
}

impl TranscriptStore {
    /// Create an empty store with its own event channel
    #[must_use]
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            messages: Mutex::new(Vec::new()),
            events,
        }
    }

    /// Append a message at the end of the transcript
    ///
    /// Always succeeds; input validation happens in the session controller
    /// before a message is ever constructed.
    pub fn append(&self, message: ChatMessage) {
        let mut messages = self.messages.lock();
        messages.push(message.clone());
        log::debug!(
            "transcript append: {} message ({} total)",
            message.role,
            messages.len()
        );
        drop(messages);
        let _ = self.events.send(ChatEvent::MessageAppended(message));
    }

    /// Clear the transcript and seed it with exactly one message
    ///
    /// Used only by session restart and initial construction.
    pub fn reset(&self, seed: ChatMessage) {
        let mut messages = self.messages.lock();
        messages.clear();
        messages.push(seed.clone());
        drop(messages);
        let _ = self.events.send(ChatEvent::TranscriptReset(seed));
    }

    /// Ordered snapshot of the current transcript
    #[must_use]
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.lock().clone()
    }

    /// Number of messages currently in the transcript
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    /// Whether the transcript holds no messages
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    /// Subscribe to transcript and session events
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.events.subscribe()
    }

    /// Handle to the event channel, shared with the session controller so
    /// flag changes and transcript changes reach observers in one stream
    pub(crate) fn events(&self) -> broadcast::Sender<ChatEvent> {
        self.events.clone()
    }
}

impl Default for TranscriptStore {
    fn default() -> Self {
        Self::new()
    }
}
