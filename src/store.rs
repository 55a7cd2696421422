//! Store owning one [`AuthState`] and the backend handle.
//!
//! DESIGN
//! ======
//! There is no process-wide singleton: each `Store::new` call owns a fresh
//! logged-out state. `commit` takes the write lock once per transition, so
//! readers always see both fields from the same commit. `dispatch` never
//! holds the lock across the backend await; other reads and commits may run
//! while an action is pending.

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use crate::actions::Action;
use crate::api::{ApiError, AuthApi};
use crate::state::{AuthState, Mutation, UserRecord};

pub struct Store {
    state: RwLock<AuthState>,
    api: Arc<dyn AuthApi>,
}

impl Store {
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self { state: RwLock::new(AuthState::new()), api }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.read().is_logged_in()
    }

    #[must_use]
    pub fn user(&self) -> Option<UserRecord> {
        self.read().user().cloned()
    }

    /// Both fields read under one lock.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.read().clone()
    }

    /// Apply a synchronous transition.
    pub fn commit(&self, mutation: Mutation) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .apply(mutation);
    }

    /// Run an action against the backend and commit its transition on
    /// success. No retry; on failure the state is untouched.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`ApiError`] unchanged.
    pub async fn dispatch(&self, action: Action) -> Result<(), ApiError> {
        let mutation = action.run(self.api.as_ref()).await?;
        self.commit(mutation);
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, AuthState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}
