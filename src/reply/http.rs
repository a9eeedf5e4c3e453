//! HTTP reply-service client
//!
//! Speaks the reply backend's wire format: POST a JSON body `{"text": query}`
//! to the endpoint, read the raw text body back. Any non-success status or
//! transport failure surfaces as an error; the caller decides how to recover.

use reqwest::Url;
use serde_json::json;

use super::ReplyService;
use crate::config::ChatOptions;
use crate::error::{ChatError, Result};

/// Reply service backed by an HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpReplyService {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpReplyService {
    /// Create a client for the given endpoint URL
    ///
    /// # Errors
    /// Returns `ChatError::InvalidEndpoint` if the URL does not parse.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ChatError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }

    /// Create a client from the endpoint configured in `options`
    ///
    /// # Errors
    /// Returns `ChatError::InvalidEndpoint` if the configured URL does not parse.
    pub fn from_options(options: &ChatOptions) -> Result<Self> {
        Self::new(&options.endpoint)
    }

    /// Endpoint this client posts to
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ReplyService for HttpReplyService {
    fn fetch_reply(&self, query: &str) -> impl std::future::Future<Output = Result<String>> + Send {
        let request = self
            .client
            .post(self.endpoint.clone())
            .json(&json!({ "text": query }));

        async move {
            let response = request
                .send()
                .await
                .map_err(|e| ChatError::Connection(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                log::debug!("reply service answered {status}");
                return Err(ChatError::Http {
                    status: status.as_u16(),
                });
            }

            response
                .text()
                .await
                .map_err(|e| ChatError::Connection(e.to_string()))
        }
    }
}
