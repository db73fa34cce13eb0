//! HTTP client trait abstraction.
//!
//! Provides a trait-based abstraction for HTTP operations, enabling
//! dependency injection and mocking in tests. The gateway only ever talks to
//! the network through [`HttpClient`].

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

use crate::error::{DecodeError, TransportError};
use crate::gateway::HttpVerb;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// A fully resolved request handed to an [`HttpClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method
    pub verb: HttpVerb,
    /// Absolute URL (origin + endpoint)
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Encoded request body, if any
    pub body: Option<String>,
}

impl HttpRequest {
    /// Create a bodiless request.
    pub fn new(verb: HttpVerb, url: impl Into<String>) -> Self {
        Self {
            verb,
            url: url.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// Attach a body together with its content type.
    pub fn with_body(mut self, content_type: &str, body: String) -> Self {
        self.headers
            .insert("Content-Type".to_string(), content_type.to_string());
        self.body = Some(body);
        self
    }
}

/// HTTP response wrapper.
///
/// The body is kept as raw bytes. Nothing is decoded until the caller asks,
/// so a non-2xx response reaches the caller exactly as the server sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Bytes) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    /// Create a new response with headers.
    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as a string.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, DecodeError> {
        serde_json::from_slice(&self.body).map_err(|source| DecodeError::new(self.status, source))
    }
}

/// Trait for HTTP client operations.
///
/// Implementations must hand back every completed exchange as `Ok`, whatever
/// its status code. `Err` is reserved for failures where no response exists.
/// Credentials (cookies) are the implementation's concern and are attached to
/// every request.
///
/// # Example
///
/// ```ignore
/// use blogfront::traits::{HttpClient, HttpRequest};
/// use blogfront::gateway::HttpVerb;
///
/// async fn status_of<C: HttpClient>(client: &C) -> Option<u16> {
///     let request = HttpRequest::new(HttpVerb::Get, "http://localhost:5000/posts");
///     client.execute(request).await.ok().map(|r| r.status)
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a request.
    ///
    /// # Returns
    /// The response for any status code, or a transport error
    async fn execute(&self, request: HttpRequest) -> Result<Response, TransportError>;
}
