//! Plain-text rendering for the CLI.
//!
//! Every function returns the text instead of printing it so that commands
//! decide where output goes and tests can compare strings.

mod feedback;
mod posts;

pub use feedback::{bookmark_line, error_list, loading, GENERIC_ERROR};
pub use posts::{comment_list, home_page, post_page, post_preview};

use crate::view_state::{ViewRender, ViewState};

/// Line width for separators.
pub const LINE_WIDTH: usize = 60;

/// Draw a view according to its render decision.
///
/// Returns `None` once the view has redirected: nothing of it is shown.
pub fn view<T>(
    state: &ViewState<T>,
    loading_text: &str,
    ready: impl FnOnce(&T) -> String,
) -> Option<String> {
    match state.render() {
        ViewRender::Redirected => None,
        ViewRender::ErrorList(errors) => Some(error_list(errors)),
        ViewRender::Loading => Some(loading(loading_text)),
        ViewRender::Ready(data) => Some(ready(data)),
    }
}

pub(crate) fn rule(ch: char) -> String {
    ch.to_string().repeat(LINE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::Outcome;
    use crate::error::TransportError;

    #[test]
    fn test_view_loading() {
        let state: ViewState<u32> = ViewState::new();
        assert_eq!(
            view(&state, "Fetching articles...", |n| n.to_string()),
            Some("  ... Fetching articles...".to_string())
        );
    }

    #[test]
    fn test_view_redirected_draws_nothing() {
        let mut state: ViewState<u32> = ViewState::new();
        state.settle(Outcome::TransportError(TransportError::Cancelled));
        assert_eq!(view(&state, "loading", |n| n.to_string()), None);
    }

    #[test]
    fn test_view_ready() {
        let mut state: ViewState<u32> = ViewState::new();
        state.settle(Outcome::Response(crate::traits::Response::new(200, "5".into())));
        assert_eq!(view(&state, "loading", |n| format!("n={}", n)), Some("n=5".to_string()));
    }
}
