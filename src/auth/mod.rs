//! Authentication system
//!
//! Holds the auth manager, the persisted user record, and the result types
//! returned by auth operations.

pub mod manager;
pub mod results;
pub mod user;

pub use manager::AuthManager;
pub use results::{LoginResult, SignupResult};
pub use user::User;
