//! Route guards deciding whether a protected view may render.
//!
//! A guard starts in [`GuardState::Checking`] and settles exactly once into either
//! [`GuardState::Authorized`] or [`GuardState::Redirecting`]. Missing or malformed sessions are
//! never errors: they resolve to a redirect to login selection. A valid session with the wrong
//! role is sent to its own default landing page via the [`landing`] table.

pub mod landing;

use dioxus_logger::tracing;

pub use landing::{landing_for, Landing};

use crate::{
    model::user::{Role, Session},
    nav::Redirect,
    session::{KeyValueStore, SessionStore},
};

/// What a guard requires before rendering its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Only a token must be present.
    Authenticated,
    /// A token and a readable user record must be present; when a role list is given the user's
    /// role must be one of them.
    Roles(Option<Vec<Role>>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Authorized,
    Redirecting(Landing),
}

impl GuardState {
    pub fn is_authorized(&self) -> bool {
        matches!(self, GuardState::Authorized)
    }
}

/// Pure guard decision for a session snapshot.
///
/// # Arguments
/// - `policy` - Requirements of the guarded route
/// - `token_present` - Whether a non-empty token is stored
/// - `session` - Parsed session, `None` if token or user record is missing or malformed
pub fn decide(policy: &GuardPolicy, token_present: bool, session: Option<&Session>) -> GuardState {
    match policy {
        GuardPolicy::Authenticated => {
            if token_present {
                GuardState::Authorized
            } else {
                GuardState::Redirecting(Landing::SelectLogin)
            }
        }
        GuardPolicy::Roles(required) => {
            let Some(session) = session else {
                return GuardState::Redirecting(Landing::SelectLogin);
            };

            match required {
                Some(roles) if !roles.contains(&session.role()) => {
                    GuardState::Redirecting(landing_for(Some(session.role())))
                }
                _ => GuardState::Authorized,
            }
        }
    }
}

/// Stateful guard for a single mounted view.
#[derive(Clone, Debug)]
pub struct RouteGuard {
    policy: GuardPolicy,
    state: GuardState,
}

impl RouteGuard {
    pub fn new(policy: GuardPolicy) -> Self {
        Self {
            policy,
            state: GuardState::Checking,
        }
    }

    /// Guard requiring only an authentication token.
    pub fn authenticated() -> Self {
        Self::new(GuardPolicy::Authenticated)
    }

    /// Guard requiring a session whose role is one of `roles`.
    pub fn with_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self::new(GuardPolicy::Roles(Some(roles.into_iter().collect())))
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Settles the guard if it is still checking.
    ///
    /// A redirect is issued through `redirect` only on the transition out of `Checking`, so
    /// repeated calls never navigate twice.
    pub fn evaluate<S, R>(&mut self, sessions: &SessionStore<S>, redirect: &R) -> GuardState
    where
        S: KeyValueStore,
        R: Redirect + ?Sized,
    {
        if self.state != GuardState::Checking {
            return self.state;
        }

        let session = sessions.current();
        self.state = decide(&self.policy, sessions.has_token(), session.as_ref());

        if let GuardState::Redirecting(landing) = self.state {
            tracing::debug!(
                policy = ?self.policy,
                "Route guard redirecting to {}",
                landing.path()
            );
            redirect.redirect(landing.path());
        }

        self.state
    }

    /// Replaces the required role list, returning the guard to `Checking` if it changed.
    pub fn set_roles(&mut self, roles: Option<Vec<Role>>) -> bool {
        let policy = GuardPolicy::Roles(roles);
        if policy == self.policy {
            return false;
        }

        self.policy = policy;
        self.state = GuardState::Checking;
        true
    }

    /// Returns the guard to `Checking` after the session changed underneath it.
    pub fn reset(&mut self) {
        self.state = GuardState::Checking;
    }
}

#[cfg(test)]
mod tests;
