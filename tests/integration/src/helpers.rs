//! Test helpers for integration tests
//!
//! Provides a mock group API server and mount helpers for each endpoint.

use std::time::Duration;

use anyhow::Result;
use rbx_client::GroupClient;
use rbx_common::{ClientConfig, EndpointConfig, HttpConfig};
use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock server plus a client pointed at it
pub struct TestApi {
    pub server: MockServer,
    pub client: GroupClient,
}

impl TestApi {
    /// Start a mock server and build a client over the HTTP transport
    pub async fn start() -> Result<Self> {
        Self::start_with_timeout(5).await
    }

    /// Same as [`TestApi::start`] with a custom request timeout
    pub async fn start_with_timeout(timeout_secs: u64) -> Result<Self> {
        let server = MockServer::start().await;

        let config = ClientConfig {
            endpoints: EndpointConfig::uniform(&server.uri()),
            http: HttpConfig {
                timeout_secs,
                user_agent: "rbx-groups-tests".to_string(),
            },
            ..ClientConfig::default()
        };
        let client = GroupClient::from_config(&config)?;

        Ok(Self { server, client })
    }

    /// Serve the metadata document of a group
    pub async fn mount_group(&self, group_id: i64, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/groups/{group_id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Serve the role set listing of a group
    pub async fn mount_roles(&self, group_id: i64, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/groups/{group_id}/RoleSets/")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Serve one page of an allies/enemies listing; expects exactly one hit
    pub async fn mount_relation_page(&self, group_id: i64, listing: &str, page: u32, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/groups/{group_id}/{listing}")))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Serve one listing page only after `delay`
    pub async fn mount_slow_relation_page(
        &self,
        group_id: i64,
        listing: &str,
        page: u32,
        delay: Duration,
        body: Value,
    ) {
        Mock::given(method("GET"))
            .and(path(format!("/groups/{group_id}/{listing}")))
            .and(query_param("page", page.to_string()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Serve a user's membership listing
    pub async fn mount_memberships(&self, user_id: i64, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/users/{user_id}/groups/roles")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer a path with a bare status code
    pub async fn mount_status(&self, url_path: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(url_path))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Answer a path with a raw text body
    pub async fn mount_raw(&self, url_path: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(url_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Paths requested so far, in order
    pub async fn requested_paths(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| request.url.path().to_string())
            .collect()
    }
}
