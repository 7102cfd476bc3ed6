//! Pure route-guard decision for protected views.
//!
//! DESIGN
//! ======
//! Side-effect free so it can be tested without a router: the wrapping
//! component (`components::protected_route`) turns the returned decision
//! into navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::manager::SessionState;
use crate::session::roles::{PUBLIC_LANDING, Role};

/// Route that unauthenticated visitors are sent to.
pub const LOGIN_ROUTE: &str = "/login";

/// What to do with a requested view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested view.
    Render,
    /// Send the visitor to the login page.
    RedirectToLogin,
    /// Send the user to a role-appropriate landing route.
    Redirect(&'static str),
}

/// Decide whether the current session may see a view gated by
/// `allowed_roles`.
///
/// Anything other than an authenticated session redirects to login. An empty
/// allow-list admits any authenticated user. Otherwise the user's role must
/// appear in the list exactly; a mismatch lands them on their own role's
/// dashboard (or the public landing when the role id is unrecognized).
pub fn evaluate(state: &SessionState, allowed_roles: &[Role]) -> RouteDecision {
    let SessionState::Authenticated(user) = state else {
        return RouteDecision::RedirectToLogin;
    };
    if allowed_roles.is_empty() {
        return RouteDecision::Render;
    }
    let role = Role::from_id(user.role_id);
    match role {
        Some(role) if allowed_roles.contains(&role) => RouteDecision::Render,
        Some(role) => RouteDecision::Redirect(role.landing_route()),
        None => RouteDecision::Redirect(PUBLIC_LANDING),
    }
}
