//! Resident owner landing page with a small profile form.
//!
//! The profile form demonstrates the local user-merge contract: the server
//! persists the change via the REST layer, and only after that success does
//! the session's published display name get patched. The token is never
//! touched.

#[cfg(test)]
#[path = "owner_test.rs"]
mod owner_test;

use leptos::prelude::*;

use crate::components::session_banner::SessionBanner;
use crate::net::http::HttpClient;
use crate::session::Session;
#[cfg(feature = "csr")]
use crate::net::{api, types::ProfileUpdate};
#[cfg(feature = "csr")]
use crate::session::UserUpdate;

/// Trim and require both name fields.
fn validate_profile_input(
    first_name: &str,
    last_name: &str,
) -> Result<(String, String), &'static str> {
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err("Enter both first and last name.");
    }
    Ok((first_name.to_owned(), last_name.to_owned()))
}

/// Display name published to the session after a profile save.
#[cfg(any(test, feature = "csr"))]
fn display_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}

#[component]
pub fn OwnerDashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let http = expect_context::<HttpClient>();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let (first_value, last_value) =
            match validate_profile_input(&first_name.get(), &last_name.get()) {
                Ok(values) => values,
                Err(message) => {
                    notice.set(message.to_owned());
                    return;
                }
            };
        let Some(user) = session.current_user() else {
            return;
        };
        saving.set(true);
        notice.set(String::new());

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            let http = http.clone();
            leptos::task::spawn_local(async move {
                let update = ProfileUpdate {
                    profile_id: user.user_id,
                    first_name: first_value.clone(),
                    last_name: last_value.clone(),
                };
                match api::update_profile(&http, &update).await {
                    Ok(()) => {
                        session.update_user(&UserUpdate {
                            username: Some(display_name(&first_value, &last_value)),
                        });
                        notice.set("Profile updated.".to_owned());
                    }
                    Err(err) => notice.set(err.to_string()),
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (first_value, last_value, user, &http);
            saving.set(false);
        }
    };

    view! {
        <div class="dashboard dashboard--owner">
            <SessionBanner/>
            <main class="dashboard__body">
                <h1>"My home"</h1>
                <p>"Payments, reservations, pets, and requests for your apartment."</p>
                <section class="profile-card">
                    <h2>"My profile"</h2>
                    <form class="profile-form" on:submit=on_save>
                        <input
                            class="profile-input"
                            type="text"
                            placeholder="First name"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                        <input
                            class="profile-input"
                            type="text"
                            placeholder="Last name"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                        <button class="profile-save" type="submit" disabled=move || saving.get()>
                            "Save"
                        </button>
                    </form>
                    <Show when=move || !notice.get().is_empty()>
                        <p class="profile-notice">{move || notice.get()}</p>
                    </Show>
                </section>
            </main>
        </div>
    }
}
