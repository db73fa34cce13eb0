//! Mock implementations for testing.
//!
//! Enables unit testing of the gateway and views without network access.
//! Navigation is recorded with [`crate::navigation::RecordingNavigator`],
//! which the CLI uses as well.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable, optionally delayed
//!   responses

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
