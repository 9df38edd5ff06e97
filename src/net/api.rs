//! REST API helpers for the bug collection.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! to the error banner without crashing hydration. No call retries; the
//! component decides when to fetch again.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Bug, BugDraft, BugPatch};

/// Collection endpoint for bug records.
pub const BUGS_ENDPOINT: &str = "/api/bugs";

/// Path for a single bug, addressed by its stringified id.
pub fn bug_url(id: &str) -> String {
    format!("{BUGS_ENDPOINT}/{id}")
}

/// Failure surfaced by an API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The response body did not decode as the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Called outside a browser environment.
    #[error("not available on server")]
    Unavailable,
}

/// Fetch the full bug collection from `GET /api/bugs`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server answers with a
/// non-success status, or the body does not decode.
pub async fn fetch_bugs() -> Result<Vec<Bug>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(BUGS_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<Vec<Bug>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a bug via `POST /api/bugs`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the created record does
/// not decode.
pub async fn create_bug(draft: &BugDraft) -> Result<Bug, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(BUGS_ENDPOINT)
            .json(draft)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<Bug>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(ApiError::Unavailable)
    }
}

/// Update a bug via `PUT /api/bugs/{id}` with a partial field set.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the updated record does
/// not decode.
pub async fn update_bug(id: &str, patch: &BugPatch) -> Result<Bug, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&bug_url(id))
            .json(patch)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<Bug>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, patch);
        Err(ApiError::Unavailable)
    }
}

/// Delete a bug via `DELETE /api/bugs/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server answers with
/// a non-success status.
pub async fn delete_bug(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&bug_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
