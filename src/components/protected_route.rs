//! View-wrapping route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Applies [`crate::session::evaluate`] to the live session on every state
//! change and turns the decision into navigation. Renders a placeholder
//! while the session is still restoring so a persisted login never flashes
//! through the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::guard::LOGIN_ROUTE;
use crate::session::{Role, RouteDecision, Session, SessionState, evaluate};

/// Gate `children` behind authentication and an optional role allow-list.
///
/// An empty `allowed_roles` admits any authenticated user. Denied users are
/// replaced-navigated to their own role's landing route, anonymous visitors
/// to the login page.
#[component]
pub fn ProtectedRoute(
    children: ChildrenFn,
    #[prop(optional)] allowed_roles: Vec<Role>,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.state();

    // `None` while restoring; guards must not decide on a half-built session.
    let decision = Memo::new(move |_| {
        state.with(|state| match state {
            SessionState::Initializing => None,
            settled => Some(evaluate(settled, &allowed_roles)),
        })
    });

    let navigate = use_navigate();
    Effect::new(move || {
        let options = NavigateOptions {
            replace: true,
            ..NavigateOptions::default()
        };
        match decision.get() {
            Some(RouteDecision::RedirectToLogin) => navigate(LOGIN_ROUTE, options),
            Some(RouteDecision::Redirect(landing)) => navigate(landing, options),
            Some(RouteDecision::Render) | None => {}
        }
    });

    view! {
        <Show
            when=move || decision.get() == Some(RouteDecision::Render)
            fallback=|| view! { <div class="route-loading">"Loading..."</div> }
        >
            {children()}
        </Show>
    }
}
