//! blogfront - terminal client for a blog API
//!
//! The library holds the request gateway, the per-view state machine, the
//! shared user context and the views built on them. The `blogfront` binary
//! maps subcommands onto those views.

pub mod adapters;
pub mod cli;
pub mod error;
pub mod gateway;
pub mod models;
pub mod navigation;
pub mod render;
pub mod session;
pub mod startup;
pub mod state;
pub mod traits;
pub mod view_state;
pub mod views;
