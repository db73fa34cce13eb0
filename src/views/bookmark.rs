//! Bookmark toggle shown on post previews and the post page.

use crate::gateway::{Gateway, HttpVerb};
use crate::models::{Errors, User};
use crate::navigation::Navigator;
use crate::state::UserContext;
use crate::view_state::{settle_and_route, Settlement, ViewState};

const BOOKMARKED_FILL: &str = "#196A69";
const EMPTY_INNER_FILL: &str = "#FAFAFA";
const EMPTY_OUTLINE_FILL: &str = "#27272a";

/// Colours of the two icon layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookmarkFill {
    pub inner: &'static str,
    pub outline: &'static str,
}

/// What a toggle did.
#[derive(Debug, Clone, PartialEq)]
pub enum BookmarkOutcome {
    /// The server accepted the change and returned the updated user.
    /// `applied` is false when the context's update policy dropped it as
    /// stale.
    Updated { applied: bool },
    /// The server refused; the context is untouched
    Rejected(Option<Errors>),
    /// Navigated to the error page
    Redirected,
    /// No one is signed in, so nothing was sent
    SignedOut,
}

/// Props of one bookmark button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub post_id: String,
    pub include_text: bool,
    pub is_bookmarked: bool,
}

impl Bookmark {
    pub fn new(post_id: impl Into<String>, include_text: bool, is_bookmarked: bool) -> Self {
        Self {
            post_id: post_id.into(),
            include_text,
            is_bookmarked,
        }
    }

    /// Button for `post_id` as seen by `user`.
    pub fn for_user(post_id: impl Into<String>, include_text: bool, user: Option<&User>) -> Self {
        let post_id = post_id.into();
        let is_bookmarked = user.is_some_and(|u| u.has_bookmarked(&post_id));
        Self::new(post_id, include_text, is_bookmarked)
    }

    /// Button text, if this button shows any.
    pub fn label(&self) -> Option<&'static str> {
        if !self.include_text {
            return None;
        }
        Some(if self.is_bookmarked {
            "Bookmarked"
        } else {
            "Add to bookmarks"
        })
    }

    pub fn fill(&self) -> BookmarkFill {
        if self.is_bookmarked {
            BookmarkFill {
                inner: BOOKMARKED_FILL,
                outline: BOOKMARKED_FILL,
            }
        } else {
            BookmarkFill {
                inner: EMPTY_INNER_FILL,
                outline: EMPTY_OUTLINE_FILL,
            }
        }
    }

    /// `PATCH` path that flips this bookmark for `user_id`.
    pub fn endpoint(&self, user_id: &str) -> String {
        format!(
            "/users/{}?post={}&bookmark={}",
            urlencoding::encode(user_id),
            urlencoding::encode(&self.post_id),
            !self.is_bookmarked
        )
    }

    /// Flip the bookmark for the signed-in user.
    ///
    /// On success the whole user in `ctx` is replaced with the server's copy.
    pub async fn toggle(
        &self,
        gateway: &Gateway,
        navigator: &dyn Navigator,
        ctx: &UserContext,
    ) -> BookmarkOutcome {
        let Some(user) = ctx.current() else {
            tracing::debug!(post = %self.post_id, "bookmark toggle while signed out");
            return BookmarkOutcome::SignedOut;
        };

        let endpoint = self.endpoint(&user.id);
        let ticket = ctx.begin_update();
        tracing::debug!(
            post = %self.post_id,
            bookmark = !self.is_bookmarked,
            ticket = ticket.sequence(),
            "toggling bookmark"
        );
        let outcome = gateway.send(&endpoint, HttpVerb::Patch, None).await;

        let mut state: ViewState<User> = ViewState::new();
        match settle_and_route(&mut state, outcome, navigator, &endpoint) {
            Settlement::Loaded => {
                let applied = ctx.set_user_with(ticket, state.into_data());
                BookmarkOutcome::Updated { applied }
            }
            Settlement::Rejected => {
                let errors = state.errors().cloned();
                tracing::error!(post = %self.post_id, errors = ?errors, "bookmark rejected");
                BookmarkOutcome::Rejected(errors)
            }
            Settlement::Redirect { .. } | Settlement::AlreadySettled => BookmarkOutcome::Redirected,
        }
    }
}
