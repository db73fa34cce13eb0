//! Account forms: sign in, sign up, sign out, and restoring the session user.

use crate::error::ErrorTier;
use crate::gateway::{FormData, Gateway, HttpVerb, Outcome};
use crate::models::{Errors, User};
use crate::navigation::{Navigator, Route};
use crate::state::UserContext;
use crate::view_state::{settle_and_route, Settlement, ViewState};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/auth/logout";
pub const CURRENT_USER_ENDPOINT: &str = "/auth/user";
pub const SIGNUP_ENDPOINT: &str = "/users";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn to_form(&self) -> FormData {
        FormData::new()
            .with("username", &self.username)
            .with("password", &self.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn to_form(&self) -> FormData {
        FormData::new()
            .with("name", &self.name)
            .with("username", &self.username)
            .with("password", &self.password)
            .with("confirmPassword", &self.confirm_password)
    }
}

/// Result of signing out.
#[derive(Debug, Clone, PartialEq)]
pub enum LogoutOutcome {
    SignedOut,
    Rejected(Option<Errors>),
    Redirected,
}

/// Sign-in and sign-up forms plus session helpers.
///
/// Each submission settles its own [`ViewState`], so a rejected form can be
/// corrected and submitted again.
#[derive(Debug, Clone)]
pub struct AuthView {
    target: Route,
}

impl Default for AuthView {
    fn default() -> Self {
        Self {
            target: Route::Home,
        }
    }
}

impl AuthView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where to go after a successful sign-in or sign-up.
    pub fn with_target(mut self, target: Route) -> Self {
        self.target = target;
        self
    }

    pub fn target(&self) -> &Route {
        &self.target
    }

    pub async fn login(
        &self,
        gateway: &Gateway,
        navigator: &dyn Navigator,
        ctx: &UserContext,
        form: &LoginForm,
    ) -> ViewState<User> {
        tracing::debug!(username = %form.username, "signing in");
        self.submit(gateway, navigator, ctx, LOGIN_ENDPOINT, &form.to_form())
            .await
    }

    pub async fn signup(
        &self,
        gateway: &Gateway,
        navigator: &dyn Navigator,
        ctx: &UserContext,
        form: &SignupForm,
    ) -> ViewState<User> {
        tracing::debug!(username = %form.username, "signing up");
        self.submit(gateway, navigator, ctx, SIGNUP_ENDPOINT, &form.to_form())
            .await
    }

    async fn submit(
        &self,
        gateway: &Gateway,
        navigator: &dyn Navigator,
        ctx: &UserContext,
        endpoint: &str,
        form: &FormData,
    ) -> ViewState<User> {
        let outcome = gateway.send(endpoint, HttpVerb::Post, Some(form)).await;

        let mut state: ViewState<User> = ViewState::new();
        if let Settlement::Loaded = settle_and_route(&mut state, outcome, navigator, endpoint) {
            let user = state.data().cloned();
            if let Some(user) = &user {
                tracing::info!(user = %user.username, "signed in");
            }
            ctx.set_user(user);
            navigator.navigate(self.target.clone());
        }
        state
    }

    /// Sign out and forget the current user.
    pub async fn logout(
        gateway: &Gateway,
        navigator: &dyn Navigator,
        ctx: &UserContext,
    ) -> LogoutOutcome {
        match gateway.send(LOGOUT_ENDPOINT, HttpVerb::Delete, None).await {
            Outcome::TransportError(err) => {
                tracing::warn!(code = err.error_code(), "sign out failed: {}", err);
                navigator.show_error(err.user_message());
                LogoutOutcome::Redirected
            }
            Outcome::Response(response) if response.is_ok() => {
                ctx.set_user(None);
                tracing::info!("signed out");
                LogoutOutcome::SignedOut
            }
            Outcome::Response(response) => {
                // The body is only informative here
                let errors = response.json::<Option<Errors>>().ok().flatten();
                tracing::warn!(status = response.status, "sign out rejected");
                LogoutOutcome::Rejected(errors)
            }
        }
    }

    /// Ask the server who the session cookie belongs to.
    ///
    /// A refusal means nobody is signed in and is not shown as an error.
    pub async fn restore(
        gateway: &Gateway,
        navigator: &dyn Navigator,
        ctx: &UserContext,
    ) -> Option<User> {
        match gateway.send(CURRENT_USER_ENDPOINT, HttpVerb::Get, None).await {
            Outcome::TransportError(err) => {
                tracing::warn!(code = err.error_code(), "session check failed: {}", err);
                navigator.show_error(err.user_message());
                None
            }
            Outcome::Response(response) if response.is_ok() => match response.json::<User>() {
                Ok(user) => {
                    tracing::debug!(user = %user.username, "session restored");
                    ctx.set_user(Some(user.clone()));
                    Some(user)
                }
                Err(err) => {
                    tracing::error!(status = err.status, "undecodable session user: {}", err);
                    navigator.show_error(ErrorTier::Decode.description().to_string());
                    None
                }
            },
            Outcome::Response(response) => {
                tracing::debug!(status = response.status, "no active session");
                ctx.set_user(None);
                None
            }
        }
    }
}
