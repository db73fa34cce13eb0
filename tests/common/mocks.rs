//! Mock HTTP configuration for integration tests.

pub use blogfront::adapters::mock::{MockHttpClient, MockResponse, RecordedRequest};
pub use blogfront::traits::Response;

use blogfront::error::TransportError;
use serde_json::Value;
use std::time::Duration;

use super::url;

/// Fluent setup for a [`MockHttpClient`] serving the test origin.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Sticky JSON response for `endpoint`.
    pub fn with_json(self, endpoint: &str, status: u16, body: Value) -> Self {
        self.client
            .set_response(&url(endpoint), MockResponse::json(status, &body));
        self
    }

    /// One-shot JSON response for `endpoint`, resolved after `delay_ms`.
    pub fn with_delayed_json(self, endpoint: &str, delay_ms: u64, status: u16, body: Value) -> Self {
        self.client.enqueue_response(
            &url(endpoint),
            MockResponse::json(status, &body).after(Duration::from_millis(delay_ms)),
        );
        self
    }

    /// Raw body, for responses that are not JSON.
    pub fn with_raw(self, endpoint: &str, status: u16, body: &str) -> Self {
        self.client.set_response(
            &url(endpoint),
            MockResponse::Success(Response::new(status, body.to_string().into())),
        );
        self
    }

    /// Every request fails as if the server were down.
    pub fn refusing_connections(self) -> Self {
        self.client
            .set_default_response(MockResponse::Error(TransportError::ConnectionFailed {
                url: super::ORIGIN.to_string(),
                message: "Connection refused".to_string(),
            }));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
