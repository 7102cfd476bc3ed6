//! Client-side decode of the session token's claims.
//!
//! DESIGN
//! ======
//! The token is a JWT issued by the VALHALLA API. This module only peeks at
//! the payload segment so the UI can route by role and drop stale sessions
//! without a network round trip. It does NOT verify the signature: the
//! bearer-token check on the server is the trust boundary, and anything that
//! needs verified identity must ask the server.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use thiserror::Error;

/// Claims embedded in a session token.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionClaims {
    /// Subject identifier.
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Display name.
    pub username: String,
    /// Role identifier; see [`crate::session::Role`].
    #[serde(rename = "roleId")]
    pub role_id: i64,
    /// Human-readable role name.
    #[serde(rename = "roleName")]
    pub role_name: String,
    /// Absolute expiry instant, seconds since the Unix epoch.
    pub exp: u64,
}

/// Why a stored token could not be turned into a live session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token could not be parsed into the expected claim structure.
    #[error("malformed session token")]
    Malformed,
    /// The token decoded but its expiry instant has passed.
    #[error("session token expired")]
    Expired,
}

/// Decode the payload segment of `token` into claims.
///
/// # Errors
///
/// Returns [`TokenError::Malformed`] when the token is not a three-segment
/// JWT, the payload is not base64url, or the claim fields are missing.
pub fn decode(token: &str) -> Result<SessionClaims, TokenError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed);
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::Malformed)
}

/// Whether `claims` are expired at `now` (seconds since epoch).
///
/// Second resolution, no skew window; a token whose expiry equals `now` is
/// already expired.
pub fn is_expired(claims: &SessionClaims, now: u64) -> bool {
    now >= claims.exp
}

/// Decode `token` and reject it if expired at `now`.
///
/// # Errors
///
/// Returns [`TokenError::Malformed`] or [`TokenError::Expired`].
pub fn validate(token: &str, now: u64) -> Result<SessionClaims, TokenError> {
    let claims = decode(token)?;
    if is_expired(&claims, now) {
        return Err(TokenError::Expired);
    }
    Ok(claims)
}
