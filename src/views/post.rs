//! Single post page.

use crate::gateway::{Gateway, HttpVerb};
use crate::models::Post;
use crate::navigation::Navigator;
use crate::view_state::{fetch_view, ViewState};

#[derive(Debug, Clone)]
pub struct PostView {
    post_id: String,
    state: ViewState<Post>,
}

impl PostView {
    pub const LOADING_TEXT: &'static str = "Fetching article...";

    pub fn endpoint(post_id: &str) -> String {
        format!("/posts/{}", urlencoding::encode(post_id))
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

    pub fn state(&self) -> &ViewState<Post> {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::navigation::{RecordingNavigator, Route};
    use crate::views::fixtures::{post_json, url, ORIGIN};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_endpoint_escapes_id() {
        assert_eq!(PostView::endpoint("abc123"), "/posts/abc123");
        assert_eq!(PostView::endpoint("a/b"), "/posts/a%2Fb");
    }

    #[tokio::test]
    async fn test_post_loads() {
        let mock = MockHttpClient::new();
        mock.set_response(&url("/posts/p1"), MockResponse::json(200, &post_json("p1", "One", true)));
        let gateway = Gateway::new(ORIGIN, Arc::new(mock));

        let view = PostView::load(&gateway, &RecordingNavigator::new(), "p1").await;

        assert_eq!(view.post_id(), "p1");
        assert_eq!(view.state().data().map(|p| p.title.as_str()), Some("One"));
    }

    #[tokio::test]
    async fn test_post_with_wrong_shape_redirects() {
        let mock = MockHttpClient::new();
        mock.set_response(&url("/posts/p1"), MockResponse::json(200, &json!({ "nope": true })));
        let gateway = Gateway::new(ORIGIN, Arc::new(mock));
        let nav = RecordingNavigator::new();

        let view = PostView::load(&gateway, &nav, "p1").await;

        assert!(view.state().is_redirected());
        assert_eq!(nav.current(), Some(Route::Error));
    }
}
