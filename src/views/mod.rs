//! The blog's views.
//!
//! Each view owns the state of one mounted page or widget. Views that show
//! server data hold a [`ViewState`](crate::view_state::ViewState) and settle
//! it from a single gateway call; mutating views (bookmark, auth, comment
//! submission) replace the shared [`UserContext`](crate::state::UserContext)
//! or re-fetch on success.

pub mod auth;
pub mod bookmark;
pub mod comments;
pub mod home;
pub mod post;

pub use auth::{AuthView, LoginForm, LogoutOutcome, SignupForm};
pub use bookmark::{Bookmark, BookmarkFill, BookmarkOutcome};
pub use comments::{CommentsView, SubmitOutcome};
pub use home::HomeView;
pub use post::PostView;
