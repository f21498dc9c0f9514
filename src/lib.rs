//! Local authentication component
//!
//! Client-side login/signup state management over an injected persistent
//! key-value store, with form validation helpers and a console front-end.

pub mod auth;
pub mod config;
pub mod console;
pub mod error;
pub mod storage;
pub mod validation;

pub use auth::AuthManager;
