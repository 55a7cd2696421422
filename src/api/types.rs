//! Backend DTOs and the error type shared by every `AuthApi` implementation.

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

use serde::Serialize;

// =============================================================================
// CREDENTIALS
// =============================================================================

/// Name and password sent to `/signUp` and `/login`.
///
/// Serialized as `{ "name": ..., "password": ... }`. Not validated here; the
/// backend decides what is acceptable.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self { name: name.into(), password: password.into() }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Failure talking to the auth backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// Transport failure: connect, DNS, timeout, or body read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned status {status}")]
    Status { status: u16, body: String },

    /// A success response whose body is not JSON.
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether calling again might succeed. The store never retries on its
    /// own; this is for callers deciding whether to offer a retry.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599, .. })
    }

    /// HTTP status, for errors that carry one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(e) => e.status().as_ref().map(reqwest::StatusCode::as_u16),
            _ => None,
        }
    }
}
