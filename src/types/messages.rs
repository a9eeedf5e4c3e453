//! Message types for the transcript
//!
//! A transcript entry carries identity, role, literal UTF-8 text (embedded
//! newlines included), a creation timestamp, and a delivery status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identifiers::MessageId;

/// Who authored a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The person typing into the client
    User,
    /// The remote reply service (or a locally synthesized notice)
    Assistant,
}

impl Role {
    /// Get the role as a string slice
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Delivery status rendered next to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Appended normally
    Sent,
    /// Locally synthesized failure notice; never retried automatically
    Error,
}

/// One entry in the transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier
    pub id: MessageId,
    /// Message author
    pub role: Role,
    /// Literal message text
    pub text: String,
    /// When the message was created
    pub created_at: DateTime<Utc>,
    /// Delivery status
    pub status: DeliveryStatus,
}

impl ChatMessage {
    /// Build a user message
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::build(Role::User, text, DeliveryStatus::Sent)
    }

    /// Build an assistant message
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::build(Role::Assistant, text, DeliveryStatus::Sent)
    }

    /// Build a locally synthesized failure notice
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::build(Role::Assistant, text, DeliveryStatus::Error)
    }

    fn build(role: Role, text: impl Into<String>, status: DeliveryStatus) -> Self {
        Self {
            id: MessageId::new(),
            role,
            text: text.into(),
            created_at: Utc::now(),
            status,
        }
    }
}
