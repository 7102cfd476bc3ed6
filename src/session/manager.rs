//! The session state machine: login, logout, and restore-on-load.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single [`Session`] handle is created by the composition root and shared
//! via context with route guards and pages. It is the only writer of the
//! token store and of the HTTP layer's authorization header, and it always
//! mutates both together with the published user so no caller can observe a
//! persisted token without a user or the reverse.
//!
//! ERROR HANDLING
//! ==============
//! Restore failures (missing, malformed, or expired token) degrade silently
//! to an anonymous session and purge storage. Login failures come back as a
//! `Result` carrying a display message; they are never thrown into UI code.
//! Logout and local user updates cannot fail.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use leptos::prelude::*;
use thiserror::Error;

use crate::net::api;
use crate::net::http::{ApiError, HttpClient};
use crate::session::{claims, token_store};
use crate::util::clock;

/// The signed-in user, derived from token claims or a login response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: i64,
    pub username: String,
    pub role_id: i64,
    pub role_name: String,
}

impl CurrentUser {
    fn from_claims(claims: &claims::SessionClaims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username.clone(),
            role_id: claims.role_id,
            role_name: claims.role_name.clone(),
        }
    }
}

/// Where the session currently stands.
///
/// `Initializing` only exists between construction and the synchronous
/// [`Session::restore`] call in the composition root; route guards render a
/// placeholder rather than deciding anything while it lasts.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Initializing,
    Anonymous,
    Authenticated(CurrentUser),
}

/// Local patch applied to the published user after a profile update.
///
/// Only display fields are patchable; identity and role always come from the
/// token or the login response.
#[derive(Clone, Debug, Default)]
pub struct UserUpdate {
    pub username: Option<String>,
}

/// Why a login attempt did not produce a session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoginError {
    /// The server rejected the credentials with a display message.
    #[error("{0}")]
    Rejected(String),
    /// The request failed without a usable message from the server.
    #[error("Unable to sign in. Please try again.")]
    Unavailable,
}

impl From<ApiError> for LoginError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status {
                message: Some(message),
                ..
            } => Self::Rejected(message),
            ApiError::Status { message: None, .. } | ApiError::Network(_) => Self::Unavailable,
        }
    }
}

/// Handle onto the current session, cheap to clone and share via context.
#[derive(Clone)]
pub struct Session {
    state: RwSignal<SessionState>,
    http: HttpClient,
}

impl Session {
    /// A fresh session in the `Initializing` state.
    ///
    /// The composition root must call [`Session::restore`] exactly once
    /// before the router renders; guards treat `Initializing` as undecided.
    pub fn new(http: HttpClient) -> Self {
        Self {
            state: RwSignal::new(SessionState::Initializing),
            http,
        }
    }

    /// Reactive handle to the raw state, for guards and `move ||` closures.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// The published user, if authenticated. Tracks when read reactively.
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.state.with(|state| match state {
            SessionState::Authenticated(user) => Some(user.clone()),
            _ => None,
        })
    }

    /// True iff the state is `Authenticated`.
    pub fn is_authenticated(&self) -> bool {
        self.state
            .with(|state| matches!(state, SessionState::Authenticated(_)))
    }

    /// True while the startup restore has not yet settled.
    pub fn is_loading(&self) -> bool {
        self.state
            .with(|state| matches!(state, SessionState::Initializing))
    }

    /// Restore a persisted session at application start.
    pub fn restore(&self) {
        self.restore_at(clock::now_secs());
    }

    /// Restore a persisted session, checking expiry against `now` (seconds
    /// since epoch).
    ///
    /// A valid stored token transitions to `Authenticated` and sets the
    /// bearer header; a missing token transitions to `Anonymous`; a
    /// malformed or expired token additionally purges storage. Nothing here
    /// can fail from the caller's point of view.
    pub fn restore_at(&self, now: u64) {
        let Some(token) = token_store::read() else {
            self.state.set(SessionState::Anonymous);
            return;
        };
        match claims::validate(&token, now) {
            Ok(claims) => {
                self.http.set_bearer(&token);
                self.state
                    .set(SessionState::Authenticated(CurrentUser::from_claims(&claims)));
            }
            Err(err) => {
                log::warn!("discarding stored session: {err}");
                self.discard();
            }
        }
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token store, the bearer header, and the published user
    /// are all updated in one synchronous step after the response arrives.
    ///
    /// # Errors
    ///
    /// Returns a [`LoginError`] with the server's message, or a generic
    /// fallback when the failure carried none. The state is left untouched
    /// on failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<CurrentUser, LoginError> {
        let response = api::login(&self.http, username, password).await?;
        let user = CurrentUser {
            user_id: response.user.user_id,
            username: response.user.username,
            role_id: response.user.role_id,
            role_name: response.user.role_name,
        };
        self.establish(&response.token, user.clone());
        Ok(user)
    }

    /// End the session. Infallible and idempotent; never touches the network.
    pub fn logout(&self) {
        self.discard();
    }

    /// Merge already-fetched profile fields into the published user.
    ///
    /// Purely local: the token and its expiry are unaffected. No-op when not
    /// authenticated.
    pub fn update_user(&self, update: &UserUpdate) {
        self.state.update(|state| {
            if let SessionState::Authenticated(user) = state {
                if let Some(username) = &update.username {
                    user.username.clone_from(username);
                }
            }
        });
    }

    /// Commit a new token and user as one step: persist, set the bearer
    /// header, publish.
    fn establish(&self, token: &str, user: CurrentUser) {
        token_store::save(token);
        self.http.set_bearer(token);
        self.state.set(SessionState::Authenticated(user));
    }

    /// Drop all traces of the session: storage, bearer header, published user.
    fn discard(&self) {
        token_store::clear();
        self.http.clear_bearer();
        self.state.set(SessionState::Anonymous);
    }
}
