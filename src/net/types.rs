//! Wire DTOs for the REST endpoints the console consumes.
//!
//! DESIGN
//! ======
//! Field renames follow the server's column-derived naming (`Users_id`,
//! `Role_FK_ID`, ...) so serde round-trips stay lossless; the rest of the
//! crate only ever sees the snake_case Rust names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials sent to `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload: the bearer token plus the user it identifies.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

/// User record embedded in a login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginUser {
    #[serde(rename = "Users_id")]
    pub user_id: i64,
    #[serde(rename = "Users_name")]
    pub username: String,
    #[serde(rename = "Role_FK_ID")]
    pub role_id: i64,
    #[serde(rename = "Role_name")]
    pub role_name: String,
}

/// Profile fields sent to `PUT /profile/{id}`.
#[derive(Clone, Debug, Serialize)]
pub struct ProfileUpdate {
    pub profile_id: i64,
    pub first_name: String,
    pub last_name: String,
}
