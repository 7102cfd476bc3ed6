//! Shared components used across route-level pages.

pub mod protected_route;
pub mod session_banner;
