//! Networking modules for the VALHALLA REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the shared client wrapper that carries the bearer header and the
//! cross-cutting 401 handling; `api` holds the endpoint helpers the session
//! layer and pages call; `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
