//! # chat-auth
//!
//! Client-side authentication slice for the chat application.
//!
//! DESIGN
//! ======
//! The slice is split the same way a reactive UI store splits it:
//!
//! - [`state`] holds the plain data (`AuthState`), its selectors, and the
//!   single synchronous transition (`Mutation::SetUser`).
//! - [`actions`] holds the asynchronous operations (`Action::SignUp` and
//!   friends) that talk to the backend and then commit a transition.
//! - [`store`] owns one `AuthState` plus an [`api::AuthApi`] handle and is
//!   the only place that mutates state at runtime.
//! - [`api`] is the backend seam: a trait plus a `reqwest` implementation.
//! - [`config`] reads client settings from the environment.

pub mod actions;
pub mod api;
pub mod config;
pub mod state;
pub mod store;

pub use actions::Action;
pub use api::{ApiError, AuthApi, Credentials, HttpAuthApi};
pub use config::AuthClientConfig;
pub use state::{AuthState, Mutation, UserRecord};
pub use store::Store;
