//! REST fetchers for the JSONPlaceholder API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Native builds
//! stub both fetchers with a network error, so pages render their error
//! path instead of panicking.
//!
//! ERROR HANDLING
//! ==============
//! Fetchers return a closed [`ApiError`]: a missing-id error raised
//! before any I/O, a status error carrying the HTTP code for the list
//! endpoint, a generic load failure for the detail endpoint, and a
//! 500-flavored wrapper for transport or parse failures. No caching, no
//! retry, no in-flight dedup.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;

/// Fixed API host; there is no configuration surface.
pub const API_BASE: &str = "https://jsonplaceholder.typicode.com";

/// Failure modes of the two fetchers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Raised by [`fetch_user`] before any network call.
    #[error("User id is required")]
    MissingUserId,
    /// Non-success HTTP status from the collection endpoint.
    #[error("Load failed: {status}")]
    Status { status: u16 },
    /// Transport or JSON-parse failure, surfaced 500-flavored.
    #[error("Load failed: 500 ({detail})")]
    Network { detail: String },
    /// Non-success HTTP status from the single-user endpoint.
    #[error("Failed to load user")]
    UserLoad,
}

impl ApiError {
    #[cfg(any(test, not(feature = "hydrate")))]
    fn unavailable() -> Self {
        Self::Network {
            detail: "not available during server rendering".to_owned(),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn users_endpoint() -> String {
    format!("{API_BASE}/users")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(id: &str) -> String {
    format!("{API_BASE}/users/{id}")
}

/// Reject empty or blank ids before any I/O happens.
pub(crate) fn validate_user_id(id: &str) -> Result<(), ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::MissingUserId);
    }
    Ok(())
}

/// Fetch the full user collection.
///
/// # Errors
///
/// [`ApiError::Status`] on a non-success response, [`ApiError::Network`]
/// when the request or JSON parse fails.
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&users_endpoint())
            .send()
            .await
            .map_err(|e| ApiError::Network {
                detail: e.to_string(),
            })?;
        if !resp.ok() {
            return Err(ApiError::Status {
                status: resp.status(),
            });
        }
        resp.json::<Vec<User>>().await.map_err(|e| ApiError::Network {
            detail: e.to_string(),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch a single user by id.
///
/// # Errors
///
/// [`ApiError::MissingUserId`] for blank ids (no network call is made),
/// [`ApiError::UserLoad`] on a non-success response, [`ApiError::Network`]
/// when the request or JSON parse fails.
pub async fn fetch_user(id: &str) -> Result<User, ApiError> {
    validate_user_id(id)?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&user_endpoint(id))
            .send()
            .await
            .map_err(|e| ApiError::Network {
                detail: e.to_string(),
            })?;
        if !resp.ok() {
            return Err(ApiError::UserLoad);
        }
        resp.json::<User>().await.map_err(|e| ApiError::Network {
            detail: e.to_string(),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}
