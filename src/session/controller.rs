//! Session controller
//!
//! Enforces the single-exchange-at-a-time state machine: validate input,
//! append the user message, issue one request to the reply service, interpret
//! the result (sentinel, ordinary reply, or failure), and return to idle.
//! A restart during a pending exchange bumps the epoch counter so the late
//! resolution is discarded instead of landing in the reseeded transcript.

use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::config::ChatOptions;
use crate::error::Result;
use crate::reply::{HttpReplyService, ReplyService};
use crate::transcript::TranscriptStore;
use crate::types::messages::ChatMessage;

use super::state::{ChatEvent, SessionFlags, SessionStatus, SubmitOutcome};
use super::{APOLOGY_TEXT, FAREWELL_TEXT, QUIT_SENTINEL, WELCOME_BACK_TEXT, WELCOME_TEXT};

/// One chat session: transcript, flags, and the reply-service collaborator
///
/// Construct one per client instance and share it by reference with the view
/// layer. All methods take `&self`; internal state sits behind a mutex that
/// is never held across an await.
pub struct SessionController<R: ReplyService> {
    reply_service: R,
    transcript: TranscriptStore,
    flags: Mutex<SessionFlags>,
    events: broadcast::Sender<ChatEvent>,
    reply_delay: Duration,
}

impl SessionController<HttpReplyService> {
    /// Build a controller wired to the HTTP reply service from `options`
    ///
    /// # Errors
    /// Returns error if the configured endpoint URL does not parse.
    pub fn over_http(options: ChatOptions) -> Result<Self> {
        let service = HttpReplyService::from_options(&options)?;
        Ok(Self::new(service, options))
    }
}

impl<R: ReplyService> SessionController<R> {
    /// Create a session seeded with the welcome message, in the active/idle state
    pub fn new(reply_service: R, options: ChatOptions) -> Self {
        let transcript = TranscriptStore::new();
        let events = transcript.events();
        transcript.append(ChatMessage::assistant(WELCOME_TEXT));
        Self {
            reply_service,
            transcript,
            flags: Mutex::new(SessionFlags::new()),
            events,
            reply_delay: options.reply_delay,
        }
    }

    /// Submit one user input and drive the exchange to completion
    ///
    /// Empty/whitespace input, an exchange already pending, and an ended
    /// session are all silent no-ops reported as [`SubmitOutcome::Rejected`].
    /// Transport failure is recovered locally as an error-status apology
    /// message; only the sentinel reply ends the session.
    pub async fn submit(&self, raw_input: &str) -> SubmitOutcome {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() {
            log::debug!("submit rejected: empty input");
            return SubmitOutcome::Rejected;
        }

        // Guard and append under one lock so the user message can never
        // interleave with another exchange or a concurrent restart.
        let epoch = {
            let mut flags = self.flags.lock();
            if flags.status == SessionStatus::Ended {
                log::debug!("submit rejected: session ended");
                return SubmitOutcome::Rejected;
            }
            if flags.pending {
                log::debug!("submit rejected: exchange already pending");
                return SubmitOutcome::Rejected;
            }
            flags.pending = true;
            flags.typing = true;
            self.transcript.append(ChatMessage::user(trimmed));
            flags.epoch
        };
        self.broadcast_flags();

        // Cosmetic pause only; correctness does not depend on it.
        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }

        let reply = self.reply_service.fetch_reply(trimmed).await;

        let mut flags = self.flags.lock();
        if flags.epoch != epoch {
            // A restart abandoned this exchange; its flags are already reset
            // and the reseeded transcript must not receive this reply.
            log::debug!("discarding reply from abandoned exchange (epoch {epoch})");
            return SubmitOutcome::Stale;
        }

        let outcome = match reply {
            Ok(body) if body == QUIT_SENTINEL => {
                self.transcript.append(ChatMessage::assistant(FAREWELL_TEXT));
                flags.status = SessionStatus::Ended;
                log::info!("session ended by sentinel reply");
                SubmitOutcome::Ended
            }
            Ok(body) => {
                self.transcript.append(ChatMessage::assistant(body));
                SubmitOutcome::Replied
            }
            Err(e) => {
                log::warn!("reply service failure: {e}");
                self.transcript.append(ChatMessage::error(APOLOGY_TEXT));
                SubmitOutcome::Failed
            }
        };
        flags.pending = false;
        flags.typing = false;
        drop(flags);
        self.broadcast_flags();
        outcome
    }

    /// Discard the session and start over
    ///
    /// Valid in any state, including while an exchange is pending: the epoch
    /// bump makes that exchange's eventual resolution a discard. The
    /// transcript is reseeded with the welcome-back message.
    pub fn restart(&self) {
        {
            let mut flags = self.flags.lock();
            flags.epoch += 1;
            flags.status = SessionStatus::Active;
            flags.pending = false;
            flags.typing = false;
            self.transcript.reset(ChatMessage::assistant(WELCOME_BACK_TEXT));
        }
        self.broadcast_flags();
        log::info!("session restarted");
    }

    /// Current session liveness
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.flags.lock().status
    }

    /// Whether an exchange is outstanding
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.flags.lock().pending
    }

    /// Whether the typing indicator should show
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.flags.lock().typing
    }

    /// The transcript store backing this session
    #[must_use]
    pub fn transcript(&self) -> &TranscriptStore {
        &self.transcript
    }

    /// Ordered snapshot of the transcript
    #[must_use]
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.transcript.messages()
    }

    /// Subscribe to transcript and flag-change events
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.events.subscribe()
    }

    fn broadcast_flags(&self) {
        let flags = self.flags.lock();
        let _ = self.events.send(ChatEvent::FlagsChanged {
            status: flags.status,
            pending: flags.pending,
            typing: flags.typing,
        });
    }
}
