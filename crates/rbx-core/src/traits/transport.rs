//! Transport trait (port) - the one capability the domain needs from the network
//!
//! The domain layer only ever asks for "the text behind this URL". The
//! infrastructure side decides how (HTTP client, timeouts, TLS) and reports
//! every failure the same way, without the domain inspecting status codes.

use async_trait::async_trait;
use thiserror::Error;

/// Fetch failures, all of which mean "the document could not be retrieved"
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} timed out")]
    Timeout { url: String },
}

impl FetchError {
    /// URL of the request that failed
    pub fn url(&self) -> &str {
        match self {
            Self::Request { url, .. } | Self::Status { url, .. } | Self::Timeout { url } => url,
        }
    }
}

/// Result type for transport operations
pub type FetchResult<T> = Result<T, FetchError>;

#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and return the response body as text
    async fn fetch_text(&self, url: &str) -> FetchResult<String>;
}
