//! Authentication state, selectors, and the `SET_USER` transition.
//!
//! DESIGN
//! ======
//! `AuthState` is plain data. The login flag and the user record are only
//! ever written together through [`AuthState::apply`], which keeps the
//! "logged in iff a user is present" pairing intact for every state the
//! crate itself produces. Nothing validates that pairing; a caller that
//! commits `SetUser { user: None, is_logged_in: true }` gets exactly that.

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// USER RECORD
// =============================================================================

/// User object returned by the backend on sign-up or login.
///
/// The shape is owned by the backend, so the body is kept verbatim. The
/// accessors below only peek at fields the chat server is known to send.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(Value);

impl UserRecord {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Numeric user id, when the backend sent one.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.0.get("id").and_then(Value::as_u64)
    }

    /// Display name, when the backend sent one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }
}

// =============================================================================
// AUTH STATE
// =============================================================================

/// Authentication state tracking the current user and login flag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub is_logged_in: bool,
    pub user: Option<UserRecord>,
}

impl AuthState {
    /// Fresh logged-out state. Every call returns an independent value.
    #[must_use]
    pub fn new() -> Self {
        Self { is_logged_in: false, user: None }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    /// Apply a transition in place. Both fields are written under the same
    /// exclusive borrow, so no reader can observe one without the other.
    pub fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::SetUser { user, is_logged_in } => {
                self.user = user;
                self.is_logged_in = is_logged_in;
            }
        }
    }
}

// =============================================================================
// MUTATIONS
// =============================================================================

/// Synchronous state transitions.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    /// Overwrite the user record and the login flag together.
    SetUser { user: Option<UserRecord>, is_logged_in: bool },
}

impl Mutation {
    /// Transition committed after a successful sign-up or login.
    #[must_use]
    pub fn logged_in(user: UserRecord) -> Self {
        Self::SetUser { user: Some(user), is_logged_in: true }
    }

    /// Transition committed after a successful logout.
    #[must_use]
    pub fn logged_out() -> Self {
        Self::SetUser { user: None, is_logged_in: false }
    }
}
