//! Configuration options for the chat core
//!
//! `ChatOptions` carries the knobs a client embeds at construction time,
//! with a builder for ergonomic setup.

use std::time::Duration;

/// Default reply-service endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/chat";

/// Default cosmetic pause before each request (500ms)
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(500);

/// Options for a chat session
#[derive(Debug, Clone)]
pub struct ChatOptions {
    /// Reply-service endpoint used by the HTTP client
    pub endpoint: String,
    /// Cosmetic pause before issuing each request; zero disables it
    pub reply_delay: Duration,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            reply_delay: DEFAULT_REPLY_DELAY,
        }
    }
}

impl ChatOptions {
    /// Create a new builder for `ChatOptions`
    #[must_use]
    pub fn builder() -> ChatOptionsBuilder {
        ChatOptionsBuilder::default()
    }
}

/// Builder for `ChatOptions`
#[derive(Debug, Default)]
pub struct ChatOptionsBuilder {
    options: ChatOptions,
}

impl ChatOptionsBuilder {
    /// Set the reply-service endpoint
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.options.endpoint = endpoint.into();
        self
    }

    /// Set the cosmetic pause before each request
    #[must_use]
    pub fn reply_delay(mut self, delay: Duration) -> Self {
        self.options.reply_delay = delay;
        self
    }

    /// Build the final `ChatOptions`
    #[must_use]
    pub fn build(self) -> ChatOptions {
        self.options
    }
}
