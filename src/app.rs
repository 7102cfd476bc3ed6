//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the composition root: the one place that builds the HTTP client
//! and the session, restores a persisted login, and wires both into context
//! before any route renders. Pages and guards may therefore `expect_context`
//! without runtime fallbacks.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::net::http::HttpClient;
use crate::pages::{
    admin::AdminDashboardPage, dashboard::DashboardPage, guard::GuardDashboardPage,
    home::HomePage, login::LoginPage, not_found::NotFoundPage, owner::OwnerDashboardPage,
};
use crate::session::{Role, Session};

/// Root application component.
///
/// Restores any persisted session synchronously, so by the time the router
/// evaluates its first guard the session has already settled to `Anonymous`
/// or `Authenticated`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let http = HttpClient::default();
    let session = Session::new(http.clone());
    session.restore();

    provide_context(http);
    provide_context(session);

    view! {
        <Title text="VALHALLA Console"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route
                    path=StaticSegment("admin")
                    view=|| {
                        view! {
                            <ProtectedRoute allowed_roles=vec![Role::Admin]>
                                <AdminDashboardPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("owner")
                    view=|| {
                        view! {
                            <ProtectedRoute allowed_roles=vec![Role::Owner]>
                                <OwnerDashboardPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("guard")
                    view=|| {
                        view! {
                            <ProtectedRoute allowed_roles=vec![Role::Guard]>
                                <GuardDashboardPage/>
                            </ProtectedRoute>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
