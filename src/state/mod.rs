//! Application state shared between views.

mod user_context;

pub use user_context::{UpdatePolicy, UpdateTicket, UserContext, UserWatcher};
