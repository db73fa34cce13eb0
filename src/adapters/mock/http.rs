//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or transport errors, optionally after a delay so that tests can
//! control the order in which overlapping requests complete.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::error::TransportError;
use crate::gateway::HttpVerb;
use crate::traits::{Headers, HttpClient, HttpRequest, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub verb: HttpVerb,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(TransportError),
    /// Wait, then resolve with the inner response
    Delayed(Duration, Box<MockResponse>),
    /// Never resolve
    Pending,
}

impl MockResponse {
    /// JSON body with the given status.
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        MockResponse::Success(Response::new(status, body.to_string().into()))
    }

    /// Wrap this response so it resolves after `delay`.
    pub fn after(self, delay: Duration) -> Self {
        MockResponse::Delayed(delay, Box::new(self))
    }
}

/// Mock HTTP client for testing.
///
/// Responses are looked up per URL: first from a FIFO queue of one-shot
/// responses, then from the sticky response set for that URL (exact match,
/// then prefix match), then from the default.
///
/// # Example
///
/// ```ignore
/// use blogfront::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://localhost:5000/posts",
///     MockResponse::json(200, &serde_json::json!([])),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// One-shot responses by exact URL, consumed in order
    queued: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a specific URL.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        lock(&self.responses).insert(url.to_string(), response);
    }

    /// Queue a one-shot response for an exact URL.
    pub fn enqueue_response(&self, url: &str, response: MockResponse) {
        lock(&self.queued)
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    fn record_request(&self, request: &HttpRequest) {
        lock(&self.requests).push(RecordedRequest {
            verb: request.verb,
            url: request.url.clone(),
            headers: request.headers.clone(),
            body: request.body.clone(),
        });
    }

    /// Get the response for a URL.
    fn get_response(&self, url: &str) -> Option<MockResponse> {
        if let Some(queued) = lock(&self.queued).get_mut(url).and_then(VecDeque::pop_front) {
            return Some(queued);
        }

        let responses = lock(&self.responses);
        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        // Longest prefix wins so overlapping patterns stay predictable
        let prefix_match = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        lock(&self.default_response).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn resolve(response: MockResponse) -> Result<Response, TransportError> {
    let mut current = response;
    loop {
        match current {
            MockResponse::Success(response) => return Ok(response),
            MockResponse::Error(err) => return Err(err),
            MockResponse::Delayed(delay, inner) => {
                tokio::time::sleep(delay).await;
                current = *inner;
            }
            MockResponse::Pending => return futures::future::pending().await,
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<Response, TransportError> {
        self.record_request(&request);

        match self.get_response(&request.url) {
            Some(response) => resolve(response).await,
            None => Err(TransportError::Other {
                message: format!("No mock response for URL: {}", request.url),
            }),
        }
    }
}
