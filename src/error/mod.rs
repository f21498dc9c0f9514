//! Error handling
//!
//! Defines error types and handling for the auth component.

pub mod handlers;
pub mod types;

pub use types::*;
