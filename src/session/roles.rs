//! Staff roles and their default landing routes.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

/// Landing route for users whose role id is not recognized.
pub const PUBLIC_LANDING: &str = "/";

/// A staff role, keyed by the server-assigned role id.
///
/// Flat enumeration with no hierarchy: access checks compare ids exactly and
/// no role inherits another's permissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Administrative staff (role id 1).
    Admin,
    /// Security/guard personnel (role id 2).
    Guard,
    /// Resident owner or tenant (role id 3).
    Owner,
}

impl Role {
    /// Map a server role id to a role, if recognized.
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Self::Admin),
            2 => Some(Self::Guard),
            3 => Some(Self::Owner),
            _ => None,
        }
    }

    /// The server-assigned role id.
    pub fn id(self) -> i64 {
        match self {
            Self::Admin => 1,
            Self::Guard => 2,
            Self::Owner => 3,
        }
    }

    /// The dashboard route this role is sent to by default.
    pub fn landing_route(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Guard => "/guard",
            Self::Owner => "/owner",
        }
    }
}
