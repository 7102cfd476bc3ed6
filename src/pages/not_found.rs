//! Fallback page for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"The view you asked for does not exist."</p>
            <a href="/">"Back to the home page"</a>
        </div>
    }
}
