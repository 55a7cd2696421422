//! Auth backend seam.
//!
//! DESIGN
//! ======
//! The store only sees the [`AuthApi`] trait. [`HttpAuthApi`] is the real
//! `reqwest` client; tests swap in mocks so state behavior can be checked
//! without a server.

pub mod http;
pub mod types;

pub use http::HttpAuthApi;
pub use types::{ApiError, Credentials};

use crate::state::UserRecord;

/// Provider-neutral async trait for the auth backend. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// Register a new user via `POST /signUp`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, a non-success status, or
    /// a body that is not JSON.
    async fn sign_up(&self, credentials: &Credentials) -> Result<UserRecord, ApiError>;

    /// Authenticate an existing user via `POST /login`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AuthApi::sign_up`].
    async fn log_in(&self, credentials: &Credentials) -> Result<UserRecord, ApiError>;

    /// End the current session via `POST /logout`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or a non-success status.
    async fn log_out(&self) -> Result<(), ApiError>;
}
