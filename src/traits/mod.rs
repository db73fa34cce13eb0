//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP transport used by the request gateway
//! - [`Navigator`](crate::navigation::Navigator) lives with the routes it
//!   navigates to, in [`crate::navigation`]

pub mod http;

pub use http::{Headers, HttpClient, HttpRequest, Response};
