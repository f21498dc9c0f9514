//! User record
//!
//! The unit stored in the registry and mirrored as the active session.

use serde::{Deserialize, Serialize};

/// A registered user
///
/// The password is stored as entered. The email doubles as the unique key
/// within the registry (case-sensitive exact match).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
