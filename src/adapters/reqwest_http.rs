//! Reqwest-based HTTP client adapter.
//!
//! This module provides the production HTTP client, implementing the
//! [`HttpClient`] trait from `crate::traits`. The client always owns a cookie
//! jar: the session cookie the API sets on sign-in is sent back on every
//! request, and callers cannot opt out per call.

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::Method;
use std::sync::Arc;

use crate::error::{classify_reqwest_error, TransportError};
use crate::gateway::HttpVerb;
use crate::traits::{Headers, HttpClient, HttpRequest, Response};

/// HTTP client implementation using reqwest with a shared cookie jar.
///
/// # Example
///
/// ```ignore
/// use blogfront::adapters::ReqwestHttpClient;
///
/// let client = ReqwestHttpClient::new()?;
/// let jar = client.cookie_jar();
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    jar: Arc<Jar>,
}

impl ReqwestHttpClient {
    /// Create a client with an empty cookie jar.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_cookie_jar(Arc::new(Jar::default()))
    }

    /// Create a client around an existing cookie jar.
    pub fn with_cookie_jar(jar: Arc<Jar>) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()
            .map_err(|e| TransportError::Other {
                message: e.to_string(),
            })?;
        Ok(Self { client, jar })
    }

    /// The jar holding the session cookie.
    pub fn cookie_jar(&self) -> Arc<Jar> {
        Arc::clone(&self.jar)
    }

    /// Cookie header the jar would send to `origin`, if any.
    pub fn cookie_header(&self, origin: &url::Url) -> Option<String> {
        self.jar
            .cookies(origin)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    fn method(verb: HttpVerb) -> Method {
        match verb {
            HttpVerb::Get => Method::GET,
            HttpVerb::Post => Method::POST,
            HttpVerb::Put => Method::PUT,
            HttpVerb::Patch => Method::PATCH,
            HttpVerb::Delete => Method::DELETE,
        }
    }

    /// Convert reqwest headers to our Headers type.
    fn convert_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Apply headers to a request builder.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder;
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        builder
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<Response, TransportError> {
        let HttpRequest {
            verb,
            url,
            headers,
            body,
        } = request;

        let builder = self.client.request(Self::method(verb), &url);
        let mut builder = Self::apply_headers(builder, &headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e, &url))?;

        let status = response.status().as_u16();
        let response_headers = Self::convert_headers(response.headers());
        let body = response
            .bytes()
            .await
            .map_err(|e| classify_reqwest_error(&e, &url))?;

        Ok(Response::with_headers(status, response_headers, body))
    }
}
