//! REST endpoint helpers.
//!
//! Thin functions over [`HttpClient`] so callers never format paths or
//! payloads inline. The session layer owns `/auth/login`; the profile page
//! uses `/profile/{id}` and hands the result back to the session for the
//! local user merge.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::http::{ApiError, HttpClient};
use crate::net::types::{LoginRequest, LoginResponse, ProfileUpdate};

fn profile_endpoint(profile_id: i64) -> String {
    format!("/profile/{profile_id}")
}

/// Exchange credentials for a token and user via `POST /auth/login`.
///
/// # Errors
///
/// Returns [`ApiError`] when the credentials are rejected or the request
/// fails; rejection messages ride along in [`ApiError::Status`].
pub async fn login(
    http: &HttpClient,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    http.post_json(
        "/auth/login",
        &LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        },
    )
    .await
}

/// Persist profile changes via `PUT /profile/{id}`.
///
/// The response body is not interesting to the caller; pages follow up with
/// a local `Session::update_user` merge on success.
///
/// # Errors
///
/// Returns [`ApiError`] when the update is rejected or the request fails.
pub async fn update_profile(http: &HttpClient, update: &ProfileUpdate) -> Result<(), ApiError> {
    let _: serde_json::Value = http
        .put_json(&profile_endpoint(update.profile_id), update)
        .await?;
    Ok(())
}
