//! Client context - dependency container for services
//!
//! Holds the transport and the endpoint templates every service needs.

use std::fmt;
use std::sync::Arc;

use rbx_common::ClientConfig;
use rbx_core::json::parse_document;
use rbx_core::Transport;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::ClientResult;
use crate::endpoints::Endpoints;
use crate::transport::HttpTransport;

/// Client context containing all dependencies
///
/// Cheap to clone; nothing in it is mutable, so any number of independent
/// operations may share one context concurrently.
#[derive(Clone)]
pub struct ClientContext {
    transport: Arc<dyn Transport>,
    endpoints: Endpoints,
}

impl ClientContext {
    /// Create a new context from its parts
    pub fn new(transport: Arc<dyn Transport>, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    /// Create a context backed by the HTTP transport
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let transport = HttpTransport::new(&config.http)?;
        Ok(Self::new(
            Arc::new(transport),
            Endpoints::from_config(&config.endpoints),
        ))
    }

    /// Get the endpoint templates
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch `url` as raw text
    pub async fn fetch_text(&self, url: &str) -> ClientResult<String> {
        debug!(url, "Fetching document");
        match self.transport.fetch_text(url).await {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!(url, error = %e, "Fetch failed");
                Err(e.into())
            }
        }
    }

    /// Fetch `url` and parse it as JSON
    pub async fn fetch_document(&self, url: &str) -> ClientResult<Value> {
        let text = self.fetch_text(url).await?;
        Ok(parse_document(&text)?)
    }
}

impl fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientContext")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}
