//! Session and access-control core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything identity-related funnels through here: the persisted bearer
//! token (`token_store`), the client-side claim decode (`claims`), the
//! login/logout/restore state machine (`manager`), and the pure route-guard
//! decision (`guard`). Pages and the HTTP layer consume the `Session` handle
//! provided by the composition root; nothing else touches the token storage
//! directly.

pub mod claims;
pub mod guard;
pub mod manager;
pub mod roles;
pub mod token_store;

pub use claims::{SessionClaims, TokenError};
pub use guard::{RouteDecision, evaluate};
pub use manager::{CurrentUser, LoginError, Session, SessionState, UserUpdate};
pub use roles::Role;
