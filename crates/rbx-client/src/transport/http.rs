//! `reqwest`-backed transport

use async_trait::async_trait;
use rbx_common::HttpConfig;
use rbx_core::{FetchError, FetchResult, Transport};
use tracing::instrument;

use crate::services::{ClientError, ClientResult};

/// HTTP transport for the platform's public group APIs
///
/// Plain GETs, no cookies or auth headers. Any non-success status is a fetch
/// failure; the body of an error response is never handed to the caller.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the configured timeout and user agent
    pub fn new(config: &HttpConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ClientError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

fn map_reqwest_error(url: &str, e: &reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            reason: e.to_string(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self))]
    async fn fetch_text(&self, url: &str) -> FetchResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_reqwest_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| map_reqwest_error(url, &e))
    }
}
