//! Client error types
//!
//! Two ways an operation can fail: the document could not be fetched, or it
//! was fetched but does not have the shape we rely on. Negative answers
//! ("not a member", "no role", "no owner") are values, never errors.

use rbx_core::{FetchError, SchemaError};
use thiserror::Error;

/// Client operation error
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: network error, timeout, or non-success status
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The remote response violated the expected schema
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The client could not be set up
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Get the error code for logs and CLI output
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "FETCH_FAILED",
            Self::Schema(e) => e.code(),
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Check if the remote document could not be retrieved
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }

    /// Check if the remote contract was violated
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
