//! Error type for panel API calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Failure of a panel API request.
///
/// `Display` yields the message shown to users in flash banners.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure before a response arrived.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response; `detail` is the server's human-readable reason.
    #[error("{detail}")]
    Status { status: u16, detail: String },
    /// Response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, pulling the first `errors[].detail` (or the
    /// top-level `error`) out of the body when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
        let detail = parsed
            .errors
            .into_iter()
            .next()
            .and_then(|e| e.detail)
            .or(parsed.error)
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| format!("request failed with status code {status}"));
        Self::Status { status, detail }
    }

    pub(crate) fn decode(err: &serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
