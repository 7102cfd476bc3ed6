//! Administrative staff landing page.
//!
//! The management screens (owners, apartments, payments, surveys,
//! reservations, PQRS, notifications, parking, pets, guards) are reached
//! from here; each is a CRUD view over the same REST layer.

use leptos::prelude::*;

use crate::components::session_banner::SessionBanner;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard dashboard--admin">
            <SessionBanner/>
            <main class="dashboard__body">
                <h1>"Administration"</h1>
                <p>"Manage residents, apartments, payments, and community services."</p>
            </main>
        </div>
    }
}
