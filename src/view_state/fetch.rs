use serde::de::DeserializeOwned;

use super::{RedirectCause, Settlement, ViewState};
use crate::gateway::{FormData, Gateway, HttpVerb, Outcome};
use crate::navigation::Navigator;

/// Mount a view: issue its single request and settle a fresh state.
///
/// If the state redirects, the navigator is asked to show the error page
/// before this returns.
pub async fn fetch_view<T: DeserializeOwned>(
    gateway: &Gateway,
    navigator: &dyn Navigator,
    endpoint: &str,
    verb: HttpVerb,
    form: Option<&FormData>,
) -> ViewState<T> {
    tracing::debug!(%verb, endpoint, "fetching view");
    let outcome = gateway.send(endpoint, verb, form).await;

    let mut state = ViewState::new();
    settle_and_route(&mut state, outcome, navigator, endpoint);
    state
}

/// Settle `state` with `outcome`, logging the result and following a
/// redirect through `navigator`.
pub fn settle_and_route<T: DeserializeOwned>(
    state: &mut ViewState<T>,
    outcome: Outcome,
    navigator: &dyn Navigator,
    endpoint: &str,
) -> Settlement {
    let settlement = state.settle(outcome);
    let tier = settlement.tier().map(|t| t.as_str()).unwrap_or("none");
    match &settlement {
        Settlement::Loaded => tracing::debug!(endpoint, "view loaded"),
        Settlement::Rejected => {
            let count = state.errors().map(|e| e.messages().count()).unwrap_or(0);
            tracing::warn!(endpoint, tier, messages = count, "request rejected");
        }
        Settlement::Redirect { cause, .. } => {
            match cause {
                RedirectCause::Transport(err) => tracing::warn!(
                    endpoint,
                    tier,
                    code = err.error_code(),
                    "request failed: {}",
                    err
                ),
                RedirectCause::Decode(err) => tracing::error!(
                    endpoint,
                    tier,
                    status = err.status,
                    "undecodable response: {}",
                    err
                ),
            }
            navigator.show_error(cause.user_message());
        }
        Settlement::AlreadySettled => {
            tracing::debug!(endpoint, "outcome for settled view ignored")
        }
    }
    settlement
}
