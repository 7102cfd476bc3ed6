//! Header strip showing who is signed in, with a sign-out action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::Session;
use crate::session::guard::LOGIN_ROUTE;

/// Identity summary plus logout. Logout is purely local (token + header +
/// user are dropped together) and always lands on the login page.
#[component]
pub fn SessionBanner() -> impl IntoView {
    let session = expect_context::<Session>();
    let display = session.clone();
    let navigate = use_navigate();

    let on_logout = move |_ev: leptos::ev::MouseEvent| {
        session.logout();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <header class="session-banner">
            <span class="session-banner__brand">"VALHALLA"</span>
            <span class="session-banner__user">
                {move || {
                    display
                        .current_user()
                        .map(|user| format!("{} · {}", user.username, user.role_name))
                        .unwrap_or_default()
                }}
            </span>
            <button class="session-banner__logout" on:click=on_logout>
                "Sign out"
            </button>
        </header>
    }
}
