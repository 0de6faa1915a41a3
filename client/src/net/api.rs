//! REST calls against the activity endpoints.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Native build: stubs returning [`ApiError::Unavailable`] so state and view
//! modules stay testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Bodies are read as text and decoded with `roster`, so transport failures,
//! non-2xx statuses and unparseable bodies each map to their own
//! [`ApiError`] variant. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use roster::{ActivityCollection, MutationReply};

use crate::config::BoardConfig;

/// Failure of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Network unreachable or request rejected before a response arrived.
    #[error("request failed: {0}")]
    Transport(String),
    /// The list endpoint answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// Called outside the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// A decoded signup/unregister response.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// True for 2xx statuses. Picks the success or failure branch.
    pub ok: bool,
    pub status: u16,
    pub body: MutationReply,
}

/// Classify a list response.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn read_collection(ok: bool, status: u16, body: &str) -> Result<ActivityCollection, ApiError> {
    if !ok {
        return Err(ApiError::Status(status));
    }
    roster::decode_collection(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Classify a signup/unregister response. The body must decode on both branches.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn read_reply(ok: bool, status: u16, body: &str) -> Result<Reply, ApiError> {
    let body = roster::decode_reply(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    Ok(Reply { ok, status, body })
}

/// Fetch the full collection from `GET /activities`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or an
/// unparseable body.
pub async fn fetch_activities(config: &BoardConfig) -> Result<ActivityCollection, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config.endpoint(roster::ACTIVITIES_PATH);
        let resp = gloo_net::http::Request::get(&url).send().await?;
        let (ok, status) = (resp.ok(), resp.status());
        let body = resp.text().await?;
        read_collection(ok, status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Register `email` via `POST /activities/{activity}/signup`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or an unparseable body. A
/// non-2xx status with a readable body is an `Ok` reply with `ok == false`.
pub async fn signup(config: &BoardConfig, activity: &str, email: &str) -> Result<Reply, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config.endpoint(&roster::signup_target(activity, email));
        let resp = gloo_net::http::Request::post(&url).send().await?;
        let (ok, status) = (resp.ok(), resp.status());
        let body = resp.text().await?;
        read_reply(ok, status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, activity, email);
        Err(ApiError::Unavailable)
    }
}

/// Remove `email` via `DELETE /activities/{activity}/unregister`.
///
/// # Errors
///
/// Same contract as [`signup`].
pub async fn unregister(config: &BoardConfig, activity: &str, email: &str) -> Result<Reply, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config.endpoint(&roster::unregister_target(activity, email));
        let resp = gloo_net::http::Request::delete(&url).send().await?;
        let (ok, status) = (resp.ok(), resp.status());
        let body = resp.text().await?;
        read_reply(ok, status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, activity, email);
        Err(ApiError::Unavailable)
    }
}
