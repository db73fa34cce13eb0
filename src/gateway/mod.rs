//! Request gateway.
//!
//! Every view reaches the blog API through [`Gateway::send`]. The gateway
//! resolves the endpoint against the configured origin, encodes an optional
//! form body and performs exactly one request. Transport failures are returned
//! as [`Outcome::TransportError`]; any HTTP response, whatever its status, is
//! returned as [`Outcome::Response`] with its body untouched.
//!
//! The gateway does not retry, does not enforce a timeout of its own and does
//! not log. Callers branch on the outcome and log what they need.

mod form;

pub use form::{FormData, FORM_CONTENT_TYPE};

use std::fmt;
use std::sync::Arc;

use crate::error::TransportError;
use crate::traits::{HttpClient, HttpRequest, Response};

/// HTTP methods the blog API understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request, built per call and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    endpoint: String,
    verb: HttpVerb,
    form: Option<FormData>,
}

impl RequestDescriptor {
    pub fn new(endpoint: impl Into<String>, verb: HttpVerb) -> Self {
        Self {
            endpoint: endpoint.into(),
            verb,
            form: None,
        }
    }

    pub fn with_form(mut self, form: FormData) -> Self {
        self.form = Some(form);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn verb(&self) -> HttpVerb {
        self.verb
    }

    pub fn form(&self) -> Option<&FormData> {
        self.form.as_ref()
    }

    /// Resolve against an origin into a transport-level request.
    pub fn to_request(&self, origin: &str) -> HttpRequest {
        let url = format!("{}{}", origin.trim_end_matches('/'), self.endpoint);
        let request = HttpRequest::new(self.verb, url);
        match &self.form {
            Some(form) => request.with_body(FORM_CONTENT_TYPE, form.encode()),
            None => request,
        }
    }
}

/// Result of attempting a request: either no response at all, or a response
/// of any status. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    TransportError(TransportError),
    Response(Response),
}

impl Outcome {
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Outcome::TransportError(_))
    }

    pub fn response(&self) -> Option<&Response> {
        match self {
            Outcome::Response(response) => Some(response),
            Outcome::TransportError(_) => None,
        }
    }
}

impl From<Result<Response, TransportError>> for Outcome {
    fn from(result: Result<Response, TransportError>) -> Self {
        match result {
            Ok(response) => Outcome::Response(response),
            Err(err) => Outcome::TransportError(err),
        }
    }
}

/// Gateway to the blog API at a single origin.
///
/// Cheap to clone; clones share the underlying client and therefore its
/// cookie jar.
#[derive(Clone)]
pub struct Gateway {
    origin: String,
    client: Arc<dyn HttpClient>,
}

impl Gateway {
    pub fn new(origin: impl Into<String>, client: Arc<dyn HttpClient>) -> Self {
        Self {
            origin: origin.into(),
            client,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Issue one request to `origin + endpoint`.
    pub async fn send(&self, endpoint: &str, verb: HttpVerb, form: Option<&FormData>) -> Outcome {
        let mut descriptor = RequestDescriptor::new(endpoint, verb);
        if let Some(form) = form {
            descriptor = descriptor.with_form(form.clone());
        }
        self.send_descriptor(&descriptor).await
    }

    /// Issue a pre-built request.
    pub async fn send_descriptor(&self, descriptor: &RequestDescriptor) -> Outcome {
        let request = descriptor.to_request(&self.origin);
        self.client.execute(request).await.into()
    }
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
