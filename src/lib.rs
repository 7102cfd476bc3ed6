//! # valhalla-console
//!
//! Leptos + WASM administrative console for the VALHALLA residential-complex
//! management platform. Staff sign in with a server-issued bearer token and
//! are routed to a role-specific dashboard (admin, owner, guard).
//!
//! This crate contains the session/authentication core (token persistence,
//! claim decoding, the session state machine, and role-based route guarding),
//! the REST client it drives, and the route-level pages that exercise them.
//! The management CRUD screens talk to the same REST layer but live behind
//! the role dashboards and are out of scope here.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod util;

/// Mount the application to `<body>`. Browser builds only.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
