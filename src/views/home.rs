//! Home page: every published post, with the featured one pulled out.

use crate::gateway::{Gateway, HttpVerb};
use crate::models::{find_featured, Post};
use crate::navigation::Navigator;
use crate::view_state::{fetch_view, ViewState};

#[derive(Debug, Clone)]
pub struct HomeView {
    state: ViewState<Vec<Post>>,
}

impl HomeView {
    pub const ENDPOINT: &'static str = "/posts";
    pub const LOADING_TEXT: &'static str = "Fetching articles...";

    /// Mount the home page and fetch the post list.
    pub async fn load(gateway: &Gateway, navigator: &dyn Navigator) -> Self {
        let state = fetch_view(gateway, navigator, Self::ENDPOINT, HttpVerb::Get, None).await;
        Self { state }
    }

    pub fn state(&self) -> &ViewState<Vec<Post>> {
        &self.state
    }

    /// The first featured post. Having none is normal.
    pub fn featured(&self) -> Option<&Post> {
        self.state.data().and_then(|posts| find_featured(posts))
    }

    /// Everything except the featured post, in server order.
    pub fn regular(&self) -> Vec<&Post> {
        let featured_id = self.featured().map(|post| post.id.as_str());
        self.state
            .data()
            .map(|posts| {
                posts
                    .iter()
                    .filter(|post| Some(post.id.as_str()) != featured_id)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::navigation::RecordingNavigator;
    use crate::view_state::ViewRender;
    use crate::views::fixtures::{post_json, url, ORIGIN};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_home_without_featured_post() {
        let mock = MockHttpClient::new();
        mock.set_response(
            &url("/posts"),
            MockResponse::json(200, &json!([post_json("p1", "One", false), post_json("p2", "Two", false)])),
        );
        let gateway = Gateway::new(ORIGIN, Arc::new(mock));
        let nav = RecordingNavigator::new();

        let home = HomeView::load(&gateway, &nav).await;

        assert!(home.featured().is_none());
        assert_eq!(home.regular().len(), 2);
        assert!(matches!(home.state().render(), ViewRender::Ready(_)));
    }

    #[tokio::test]
    async fn test_home_empty_list_is_ready() {
        let mock = MockHttpClient::new();
        mock.set_response(&url("/posts"), MockResponse::json(200, &json!([])));
        let gateway = Gateway::new(ORIGIN, Arc::new(mock));

        let home = HomeView::load(&gateway, &RecordingNavigator::new()).await;

        assert!(home.regular().is_empty());
        assert_eq!(home.state().render(), ViewRender::Ready(&Vec::new()));
    }

    #[tokio::test]
    async fn test_home_rejection_shows_errors() {
        let mock = MockHttpClient::new();
        mock.set_response(
            &url("/posts"),
            MockResponse::json(500, &json!({ "error": "database unavailable" })),
        );
        let gateway = Gateway::new(ORIGIN, Arc::new(mock));

        let home = HomeView::load(&gateway, &RecordingNavigator::new()).await;

        assert!(home.featured().is_none());
        assert!(home.regular().is_empty());
        assert!(matches!(home.state().render(), ViewRender::ErrorList(Some(_))));
    }
}
