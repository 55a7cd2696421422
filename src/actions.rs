//! Asynchronous auth actions.
//!
//! Each action performs exactly one backend call and, on success, yields the
//! [`Mutation`] to commit. Failure yields the backend error untouched and no
//! mutation, so a failed action can never leave state half-written.

#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use crate::api::{ApiError, AuthApi, Credentials};
use crate::state::Mutation;

/// Operations dispatched through [`crate::Store::dispatch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// `POST /signUp`, then log the new user in.
    SignUp(Credentials),
    /// `POST /login`, then log the returned user in.
    LogIn(Credentials),
    /// `POST /logout`, then clear the user.
    LogOut,
}

impl Action {
    #[must_use]
    pub fn sign_up(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self::SignUp(Credentials::new(name, password))
    }

    #[must_use]
    pub fn log_in(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self::LogIn(Credentials::new(name, password))
    }

    /// Conventional store name, used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SignUp(_) => "SIGN_UP",
            Self::LogIn(_) => "LOG_IN",
            Self::LogOut => "LOG_OUT",
        }
    }

    /// Perform the backend call and return the transition to commit.
    ///
    /// # Errors
    ///
    /// Returns whatever [`ApiError`] the backend call produced.
    pub async fn run(&self, api: &dyn AuthApi) -> Result<Mutation, ApiError> {
        match self {
            Self::SignUp(credentials) => {
                let user = api.sign_up(credentials).await?;
                Ok(Mutation::logged_in(user))
            }
            Self::LogIn(credentials) => {
                let user = api.log_in(credentials).await?;
                Ok(Mutation::logged_in(user))
            }
            Self::LogOut => {
                api.log_out().await?;
                Ok(Mutation::logged_out())
            }
        }
    }
}
