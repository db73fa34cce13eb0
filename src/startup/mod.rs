//! Startup: configuration, logging and client wiring.
//!
//! - [`config`] - layered [`BlogConfig`]
//! - [`logging`] - tracing subscriber
//! - [`bootstrap`] - [`BlogClient`] from a config

pub mod bootstrap;
pub mod config;
pub mod logging;

pub use bootstrap::BlogClient;
pub use config::BlogConfig;
pub use logging::init_tracing;
