//! The loading → settled lifecycle every data-bearing view goes through.

use serde::de::DeserializeOwned;

use crate::error::{DecodeError, ErrorTier, TransportError};
use crate::gateway::Outcome;
use crate::models::Errors;
use crate::navigation::Route;

/// What settling a view produced.
#[derive(Debug)]
pub enum Settlement {
    /// 2xx response decoded into the view's data
    Loaded,
    /// Non-2xx response decoded into an `Errors` payload (or `null`)
    Rejected,
    /// The view must be replaced by `route`; nothing of it renders any more
    Redirect { route: Route, cause: RedirectCause },
    /// The view had already settled; the outcome was ignored
    AlreadySettled,
}

impl Settlement {
    /// Tier of the failure this settlement represents, if any.
    pub fn tier(&self) -> Option<ErrorTier> {
        match self {
            Settlement::Rejected => Some(ErrorTier::Domain),
            Settlement::Redirect { cause, .. } => Some(cause.tier()),
            Settlement::Loaded | Settlement::AlreadySettled => None,
        }
    }

    pub fn redirect_route(&self) -> Option<&Route> {
        match self {
            Settlement::Redirect { route, .. } => Some(route),
            _ => None,
        }
    }
}

/// Why a view was redirected.
#[derive(Debug)]
pub enum RedirectCause {
    Transport(TransportError),
    Decode(DecodeError),
}

impl RedirectCause {
    pub fn tier(&self) -> ErrorTier {
        match self {
            RedirectCause::Transport(_) => ErrorTier::Transport,
            RedirectCause::Decode(_) => ErrorTier::Decode,
        }
    }

    /// What the error page tells the reader.
    pub fn user_message(&self) -> String {
        match self {
            RedirectCause::Transport(err) => err.user_message(),
            RedirectCause::Decode(_) => self.tier().description().to_string(),
        }
    }
}

/// What a view should draw, in precedence order.
#[derive(Debug, PartialEq)]
pub enum ViewRender<'a, T> {
    /// The view navigated away; draw nothing
    Redirected,
    /// Draw the error list (`None` when the server sent no payload)
    ErrorList(Option<&'a Errors>),
    /// Draw a loading indicator
    Loading,
    /// Draw the data
    Ready(&'a T),
}

/// `{data, errors, loading}` for one mounted view.
///
/// Starts loading. [`ViewState::settle`] applies exactly one outcome; later
/// outcomes are ignored. While loading, `data` and `errors` are not
/// authoritative.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    data: Option<T>,
    errors: Option<Errors>,
    loading: bool,
    redirected: bool,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            data: None,
            errors: None,
            loading: true,
            redirected: false,
        }
    }
}

impl<T> ViewState<T> {
    /// A freshly mounted view.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn errors(&self) -> Option<&Errors> {
        self.errors.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_redirected(&self) -> bool {
        self.redirected
    }

    /// True once an outcome has been applied (including a redirect).
    pub fn is_settled(&self) -> bool {
        !self.loading || self.redirected
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Decide what to draw.
    ///
    /// A missing payload only counts as an error once the view has settled,
    /// so the loading window never shows the error list.
    pub fn render(&self) -> ViewRender<'_, T> {
        if self.redirected {
            return ViewRender::Redirected;
        }
        if self.errors.is_some() || (!self.loading && self.data.is_none()) {
            return ViewRender::ErrorList(self.errors.as_ref());
        }
        if self.loading {
            return ViewRender::Loading;
        }
        match &self.data {
            Some(data) => ViewRender::Ready(data),
            None => ViewRender::ErrorList(None),
        }
    }

    fn redirect(&mut self, cause: RedirectCause) -> Settlement {
        self.redirected = true;
        Settlement::Redirect {
            route: Route::Error,
            cause,
        }
    }
}

impl<T: DeserializeOwned> ViewState<T> {
    /// Apply the outcome of the view's single request.
    pub fn settle(&mut self, outcome: Outcome) -> Settlement {
        if self.is_settled() {
            return Settlement::AlreadySettled;
        }

        let response = match outcome {
            Outcome::TransportError(err) => return self.redirect(RedirectCause::Transport(err)),
            Outcome::Response(response) => response,
        };

        if response.is_ok() {
            match response.json::<T>() {
                Ok(data) => {
                    self.data = Some(data);
                    self.errors = None;
                    self.loading = false;
                    Settlement::Loaded
                }
                Err(err) => self.redirect(RedirectCause::Decode(err)),
            }
        } else {
            match response.json::<Option<Errors>>() {
                Ok(errors) => {
                    self.data = None;
                    self.errors = errors;
                    self.loading = false;
                    Settlement::Rejected
                }
                Err(err) => self.redirect(RedirectCause::Decode(err)),
            }
        }
    }
}
