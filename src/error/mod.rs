//! Error types for blogfront.
//!
//! Request failures come in three tiers (see [`ErrorTier`]):
//!
//! | Tier | Type | Reaction |
//! |------|------|----------|
//! | Transport | [`TransportError`] | redirect to the error page |
//! | Domain | [`crate::models::Errors`] | render inline, view stays usable |
//! | Decode | [`DecodeError`] | redirect to the error page |
//!
//! None of them are retried. Configuration and session-file failures have
//! their own types and only surface in the CLI.

mod category;
mod config;
mod decode;
mod transport;

pub use category::ErrorTier;
pub use config::{ConfigError, SessionError, StartupError};
pub use decode::DecodeError;
pub use transport::{classify_reqwest_error, TransportError};
