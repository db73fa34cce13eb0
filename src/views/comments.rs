//! Comment list under a post, and the form for adding one.

use crate::gateway::{FormData, Gateway, HttpVerb};
use crate::models::{Comment, Errors};
use crate::navigation::Navigator;
use crate::view_state::{fetch_view, settle_and_route, Settlement, ViewState};

/// What submitting a comment did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Stored; the list was fetched again
    Posted,
    /// The request or the follow-up fetch ended on the error page
    /// Refused; the list is unchanged
    Rejected(Option<Errors>),
    Redirected,
}

#[derive(Debug, Clone)]
pub struct CommentsView {
    post_id: String,
    state: ViewState<Vec<Comment>>,
}

impl CommentsView {
    pub const LOADING_TEXT: &'static str = "Fetching comments...";

    pub fn endpoint(post_id: &str) -> String {
        format!("/posts/{}/comments", urlencoding::encode(post_id))
    }

    pub async fn load(gateway: &Gateway, navigator: &dyn Navigator, post_id: &str) -> Self {
        let state = fetch_view(
            gateway,
            navigator,
            &Self::endpoint(post_id),
            HttpVerb::Get,
            None,
        )
        .await;
        Self {
            post_id: post_id.to_string(),
            state,
        }
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    pub fn state(&self) -> &ViewState<Vec<Comment>> {
        &self.state
    }

    /// Post a comment. On success the whole list is replaced by a fresh fetch.
    pub async fn submit(
        &mut self,
        gateway: &Gateway,
        navigator: &dyn Navigator,
        text: &str,
    ) -> SubmitOutcome {
        let endpoint = Self::endpoint(&self.post_id);
        let form = FormData::new().with("text", text);
        let outcome = gateway.send(&endpoint, HttpVerb::Post, Some(&form)).await;

        // The created comment is not needed; only whether it was accepted.
        let mut submission: ViewState<serde_json::Value> = ViewState::new();
        match settle_and_route(&mut submission, outcome, navigator, &endpoint) {
            Settlement::Loaded => {
                tracing::info!(post = %self.post_id, "comment posted");
                self.state = fetch_view(gateway, navigator, &endpoint, HttpVerb::Get, None).await;
                if self.state.is_redirected() {
                    SubmitOutcome::Redirected
                } else {
                    SubmitOutcome::Posted
                }
            }
            Settlement::Rejected => SubmitOutcome::Rejected(submission.errors().cloned()),
            Settlement::Redirect { .. } | Settlement::AlreadySettled => SubmitOutcome::Redirected,
        }
    }
}
