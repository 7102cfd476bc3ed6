//! Public landing page.

use leptos::prelude::*;

use crate::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <div class="home-page">
            <h1>"VALHALLA"</h1>
            <p class="home-page__tagline">
                "Management platform for residential complexes: owners, payments, "
                "reservations, parking, pets, and security."
            </p>
            <Show
                when=move || session.is_authenticated()
                fallback=|| view! { <a class="home-page__cta" href="/login">"Sign in"</a> }
            >
                <a class="home-page__cta" href="/dashboard">"Go to your dashboard"</a>
            </Show>
        </div>
    }
}
