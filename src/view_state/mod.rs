//! Per-view state for every data-bearing view.
//!
//! A view mounts in `loading`, issues exactly one request through the
//! [`Gateway`](crate::gateway::Gateway) and settles once:
//!
//! ```text
//! loading ──TransportError──▶ redirected (navigate to /error)
//!    │
//!    ├──Response ok──────────▶ data
//!    ├──Response not ok──────▶ errors (rendered inline)
//!    └──body not decodable───▶ redirected (navigate to /error)
//! ```
//!
//! [`ViewState::render`] decides what the view draws from those fields.

mod fetch;
mod machine;

pub use fetch::{fetch_view, settle_and_route};
pub use machine::{RedirectCause, Settlement, ViewRender, ViewState};
