//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, redirects) and
//! leans on `components` and the `session` core for everything shared. The
//! per-module CRUD screens of the full console hang off the dashboard pages
//! and are not part of this crate.

pub mod admin;
pub mod dashboard;
pub mod guard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod owner;
