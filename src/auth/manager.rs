//! Authentication manager
//!
//! The context object owned by the application's composition root. Wraps an
//! injected key-value store and exposes login, signup, logout, and
//! session-check operations to the front-end, mirroring the active session
//! between memory and storage.

use std::sync::Arc;

use log::{info, warn};

use crate::auth::results::{LoginResult, SignupResult};
use crate::auth::user::User;
use crate::error::{AuthError, StorageError};
use crate::storage::{KeyValueStore, SESSION_KEY, USERS_KEY};

/// Client-side authentication state manager
///
/// Constructed once at startup with its storage dependency and kept for the
/// process lifetime. Operations take `&mut self`; the host front-end runs one
/// user action at a time, so no internal locking is needed.
pub struct AuthManager {
    store: Arc<dyn KeyValueStore>,
    current_user: Option<User>,
    auth_error: Option<String>,
}

impl AuthManager {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            current_user: None,
            auth_error: None,
        }
    }

    /// Load a previously persisted session at startup.
    ///
    /// A missing session key is the normal logged-out state, not an error.
    pub async fn initialize(&mut self) -> Result<(), StorageError> {
        if let Some(raw) = self.store.get(SESSION_KEY).await? {
            let user: User = serde_json::from_str(&raw)?;
            info!("Restored session for {}", user.email);
            self.current_user = Some(user);
        }
        Ok(())
    }

    /// Whether a session is persisted right now.
    ///
    /// Reads the store directly rather than the in-memory cache, so it
    /// reflects what a fresh process would see.
    pub async fn is_logged_in(&self) -> Result<bool, StorageError> {
        Ok(self.store.get(SESSION_KEY).await?.is_some())
    }

    /// Attempt to log in with an email and password.
    ///
    /// On a match the found record becomes the active session, in memory and
    /// in storage. Unknown email and wrong password both produce the same
    /// auth error message and leave the current session untouched.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<LoginResult, StorageError> {
        let users = self.load_registry().await?;

        let found = users.iter().find(|user| user.email == email);
        match found {
            Some(user) if user.password == password => {
                self.persist_session(user).await?;
                info!("Login successful for {}", user.email);
                self.current_user = Some(user.clone());
                Ok(LoginResult {
                    success: true,
                    email: email.to_string(),
                })
            }
            _ => {
                warn!("Login failed for {}", email);
                self.auth_error = Some(AuthError::InvalidCredentials.to_string());
                Ok(LoginResult {
                    success: false,
                    email: email.to_string(),
                })
            }
        }
    }

    /// Register a new user and start a session for them.
    ///
    /// Rejects an email that is already in the registry without touching
    /// storage. Otherwise the record is appended to the registry and becomes
    /// the active session.
    pub async fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SignupResult, StorageError> {
        let mut users = self.load_registry().await?;

        if users.iter().any(|user| user.email == email) {
            warn!("Signup rejected, email already registered: {}", email);
            self.auth_error = Some(AuthError::EmailAlreadyRegistered.to_string());
            return Ok(SignupResult {
                success: false,
                email: email.to_string(),
            });
        }

        let new_user = User::new(name, email, password);
        users.push(new_user.clone());

        let encoded = serde_json::to_string(&users)?;
        self.store.set(USERS_KEY, &encoded).await?;
        self.persist_session(&new_user).await?;
        info!("Signup successful for {}", new_user.email);
        self.current_user = Some(new_user);

        Ok(SignupResult {
            success: true,
            email: email.to_string(),
        })
    }

    /// End the active session, removing it from storage. Unconditional.
    pub async fn logout(&mut self) -> Result<(), StorageError> {
        self.store.remove(SESSION_KEY).await?;
        if let Some(user) = self.current_user.take() {
            info!("Logged out {}", user.email);
        }
        Ok(())
    }

    /// The in-memory session user, for display.
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Message of the most recent failed login/signup attempt, if any.
    pub fn auth_error(&self) -> Option<&str> {
        self.auth_error.as_deref()
    }

    pub fn set_auth_error(&mut self, message: impl Into<String>) {
        self.auth_error = Some(message.into());
    }

    /// Called by the front-end on the next input change after a failure.
    pub fn clear_auth_error(&mut self) {
        self.auth_error = None;
    }

    /// Read and decode the user registry; an absent key is the empty registry.
    async fn load_registry(&self) -> Result<Vec<User>, StorageError> {
        match self.store.get(USERS_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Persist `user` as the active session.
    async fn persist_session(&self, user: &User) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(user)?;
        self.store.set(SESSION_KEY, &encoded).await
    }
}
