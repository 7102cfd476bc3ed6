//! Login page: username + password against `POST /auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::Session;

/// Route authenticated users are forwarded to from here.
const DASHBOARD_ROUTE: &str = "/dashboard";

/// Trim and require both credential fields.
fn validate_credentials_input(
    username: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in (fresh login or restored session): skip the form.
    let redirect_session = session.clone();
    let redirect_navigate = use_navigate();
    Effect::new(move || {
        if redirect_session.is_authenticated() {
            let options = NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            };
            redirect_navigate(DASHBOARD_ROUTE, options);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) =
            match validate_credentials_input(&username.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                // Success flips the session to Authenticated; the redirect
                // effect above takes it from there.
                if let Err(err) = session.login(&username_value, &password_value).await {
                    error.set(err.to_string());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (username_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"VALHALLA"</h1>
                <p class="login-card__subtitle">"Residential management console"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
