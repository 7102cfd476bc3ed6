//! HTTP client wrapper with a mutable default authorization header.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: request methods return a network error; only the header
//! bookkeeping runs, which is what the session tests exercise.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] carrying the server's
//! `message` field when the body has one. A 401 from a request that carried
//! a bearer token also clears the persisted token and forces navigation to
//! the login page; the session layer relies on this for tokens that outlive
//! their server-side validity. A 401 from an unauthenticated request (a
//! rejected login) is an ordinary status error so its message reaches the
//! caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[cfg(feature = "csr")]
use crate::session::token_store;

/// Default base path for same-origin API requests.
const DEFAULT_BASE: &str = "/api";

/// A failed API request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// Human-readable message from the response body, if any.
        message: Option<String>,
    },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
}

/// Shared REST client. Cloning is cheap and clones share the bearer slot,
/// so a header set through one handle is attached by all of them.
#[derive(Clone)]
pub struct HttpClient {
    base: String,
    bearer: Arc<Mutex<Option<String>>>,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE)
    }
}

impl HttpClient {
    /// A client rooted at `base` (no trailing slash).
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            bearer: Arc::new(Mutex::new(None)),
        }
    }

    /// Set the default bearer token attached to every request.
    ///
    /// Called by the session layer in the same step as persisting the token,
    /// so there is no window where requests carry a stale credential.
    pub fn set_bearer(&self, token: &str) {
        if let Ok(mut slot) = self.bearer.lock() {
            *slot = Some(token.to_owned());
        }
    }

    /// Remove the default bearer token.
    pub fn clear_bearer(&self) {
        if let Ok(mut slot) = self.bearer.lock() {
            *slot = None;
        }
    }

    /// The full `Authorization` header value, if a bearer token is set.
    pub fn authorization_header(&self) -> Option<String> {
        self.bearer
            .lock()
            .ok()
            .and_then(|slot| slot.as_ref().map(|token| format!("Bearer {token}")))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// GET `path` and deserialize the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        #[cfg(feature = "csr")]
        {
            let bearer = self.authorization_header();
            let mut request = gloo_net::http::Request::get(&self.url(path));
            if let Some(header) = &bearer {
                request = request.header("Authorization", header);
            }
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.read_json(response, bearer.is_some()).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(unavailable())
        }
    }

    /// POST `body` as JSON to `path` and deserialize the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        #[cfg(feature = "csr")]
        {
            let bearer = self.authorization_header();
            let mut request = gloo_net::http::Request::post(&self.url(path));
            if let Some(header) = &bearer {
                request = request.header("Authorization", header);
            }
            let response = request
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.read_json(response, bearer.is_some()).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(unavailable())
        }
    }

    /// PUT `body` as JSON to `path` and deserialize the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn put_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        #[cfg(feature = "csr")]
        {
            let bearer = self.authorization_header();
            let mut request = gloo_net::http::Request::put(&self.url(path));
            if let Some(header) = &bearer {
                request = request.header("Authorization", header);
            }
            let response = request
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.read_json(response, bearer.is_some()).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(unavailable())
        }
    }

    #[cfg(feature = "csr")]
    async fn read_json<R: DeserializeOwned>(
        &self,
        response: gloo_net::http::Response,
        sent_bearer: bool,
    ) -> Result<R, ApiError> {
        if response.ok() {
            return response
                .json::<R>()
                .await
                .map_err(|e| ApiError::Network(e.to_string()));
        }
        let status = response.status();
        let message = response
            .text()
            .await
            .ok()
            .as_deref()
            .and_then(error_message);
        if should_expire(status, sent_bearer) {
            self.expire_session();
        }
        Err(ApiError::Status { status, message })
    }

    /// Token rejected by the server: drop it and send the user to login.
    #[cfg(feature = "csr")]
    fn expire_session(&self) {
        token_store::clear();
        self.clear_bearer();
        if let Some(window) = web_sys::window() {
            let _ = window
                .location()
                .set_href(crate::session::guard::LOGIN_ROUTE);
        }
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

/// Whether a response status voids the current session.
///
/// Only a 401 answering a request that carried the bearer header counts: the
/// token the server just refused is the one we hold. An unauthenticated 401,
/// such as a rejected login attempt, must stay an ordinary error so the page
/// that made the request can show its message.
#[cfg(any(test, feature = "csr"))]
fn should_expire(status: u16, sent_bearer: bool) -> bool {
    status == 401 && sent_bearer
}

/// Extract the `message` field from an error response body, if present.
#[cfg(any(test, feature = "csr"))]
fn error_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|parsed| parsed.message)
}
