//! Reply-service abstraction
//!
//! The chat core does not generate replies itself; it talks to an external
//! collaborator through the [`ReplyService`] trait. The production
//! implementation is [`HttpReplyService`]; tests substitute mocks.

pub mod http;

use crate::error::Result;

/// Contract the session controller expects from the reply generator
pub trait ReplyService: Send + Sync {
    /// Fetch the reply for one trimmed user query
    ///
    /// A successful exchange yields the raw reply text. The sentinel value
    /// that ends a session travels through here as ordinary text; the
    /// session controller interprets it.
    ///
    /// # Errors
    /// Returns error on transport failure or a non-success response status.
    fn fetch_reply(&self, query: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub use http::HttpReplyService;
