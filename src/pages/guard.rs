//! Security personnel landing page.

use leptos::prelude::*;

use crate::components::session_banner::SessionBanner;

#[component]
pub fn GuardDashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard dashboard--guard">
            <SessionBanner/>
            <main class="dashboard__body">
                <h1>"Security"</h1>
                <p>"Visitor registry, parking assignments, and shift notifications."</p>
            </main>
        </div>
    }
}
