//! Shared "current user" state.
//!
//! There is exactly one writer entry point, [`UserContext::set_user`] (and its
//! ticketed form [`UserContext::set_user_with`]). Every update swaps the whole
//! user; nothing patches fields in place. Readers either take a snapshot or
//! subscribe and re-render when the value changes.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

use crate::models::User;

/// What to do when responses to overlapping updates arrive out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdatePolicy {
    /// Whichever response arrives last is kept, even if its request was
    /// issued first.
    #[default]
    LastWriteWins,
    /// A response is dropped if a later-issued request has already been
    /// applied.
    LatestIssued,
}

/// Issued before a mutating request; identifies its place in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UpdateTicket(u64);

impl UpdateTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Stamped {
    user: Option<User>,
    /// Sequence of the ticket that produced this value; 0 for untracked writes
    applied: u64,
}

/// Cloneable handle to the signed-in user shared by every view.
#[derive(Debug, Clone)]
pub struct UserContext {
    tx: Arc<watch::Sender<Stamped>>,
    issued: Arc<AtomicU64>,
    policy: UpdatePolicy,
}

impl UserContext {
    pub fn new(policy: UpdatePolicy) -> Self {
        let (tx, _rx) = watch::channel(Stamped {
            user: None,
            applied: 0,
        });
        Self {
            tx: Arc::new(tx),
            issued: Arc::new(AtomicU64::new(0)),
            policy,
        }
    }

    /// Context that starts signed in as `user`.
    pub fn signed_in(user: User, policy: UpdatePolicy) -> Self {
        let ctx = Self::new(policy);
        ctx.set_user(Some(user));
        ctx
    }

    pub fn policy(&self) -> UpdatePolicy {
        self.policy
    }

    /// Snapshot of the current user.
    pub fn current(&self) -> Option<User> {
        self.tx.borrow().user.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.tx.borrow().user.is_some()
    }

    /// Watch for replacements of the current user.
    pub fn subscribe(&self) -> UserWatcher {
        UserWatcher {
            rx: self.tx.subscribe(),
        }
    }

    /// Replace the current user unconditionally.
    pub fn set_user(&self, user: Option<User>) {
        self.tx.send_modify(|state| {
            state.user = user;
        });
    }

    /// Reserve a place in issue order for a mutating request.
    pub fn begin_update(&self) -> UpdateTicket {
        UpdateTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Apply the result of the request identified by `ticket`.
    ///
    /// Returns whether the value was replaced.
    pub fn set_user_with(&self, ticket: UpdateTicket, user: Option<User>) -> bool {
        let policy = self.policy;
        self.tx.send_if_modified(|state| {
            if policy == UpdatePolicy::LatestIssued && ticket.0 < state.applied {
                tracing::debug!(
                    ticket = ticket.0,
                    applied = state.applied,
                    "dropping stale user update"
                );
                return false;
            }
            state.user = user;
            state.applied = state.applied.max(ticket.0);
            true
        })
    }
}

impl Default for UserContext {
    fn default() -> Self {
        Self::new(UpdatePolicy::default())
    }
}

/// Receiver side of a [`UserContext`].
#[derive(Debug, Clone)]
pub struct UserWatcher {
    rx: watch::Receiver<Stamped>,
}

impl UserWatcher {
    /// Wait until the user is replaced, then return the new value.
    ///
    /// Returns `None` once every context handle has been dropped.
    pub async fn changed(&mut self) -> Option<Option<User>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().user.clone())
    }

    pub fn current(&self) -> Option<User> {
        self.rx.borrow().user.clone()
    }
}
