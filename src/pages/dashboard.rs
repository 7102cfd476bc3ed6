//! Role dispatch for `/dashboard`.
//!
//! The login page and deep links land here; the page immediately forwards to
//! the signed-in role's dashboard, the public landing for unrecognized
//! roles, or the login page when anonymous.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::guard::LOGIN_ROUTE;
use crate::session::roles::PUBLIC_LANDING;
use crate::session::{Role, Session, SessionState};

/// Target route for a settled session; `None` while still restoring.
fn dispatch_route(state: &SessionState) -> Option<&'static str> {
    match state {
        SessionState::Initializing => None,
        SessionState::Anonymous => Some(LOGIN_ROUTE),
        SessionState::Authenticated(user) => {
            Some(Role::from_id(user.role_id).map_or(PUBLIC_LANDING, Role::landing_route))
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.state();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(target) = state.with(dispatch_route) {
            let options = NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            };
            navigate(target, options);
        }
    });

    view! { <div class="page-loading">"Redirecting..."</div> }
}
