//! End-to-end scenarios over the auth manager and both store implementations.

use std::sync::Arc;

use tempfile::tempdir;

use local_auth::auth::AuthManager;
use local_auth::storage::{FileStore, KeyValueStore, MemoryStore, SESSION_KEY, USERS_KEY};
use local_auth::validation::{validate_email, validate_password};

fn memory_manager() -> AuthManager {
    AuthManager::new(Arc::new(MemoryStore::new()))
}

#[tokio::test]
async fn signup_then_login_yields_named_session() {
    let mut auth = memory_manager();

    let signup = auth.signup("Alice", "a@b.com", "Abc123!").await.unwrap();
    assert!(signup.success);

    auth.logout().await.unwrap();

    let login = auth.login("a@b.com", "Abc123!").await.unwrap();
    assert!(login.success);
    assert_eq!(auth.current_user().unwrap().name, "Alice");
    assert!(auth.is_logged_in().await.unwrap());
}

#[tokio::test]
async fn second_signup_with_same_email_is_rejected_without_duplicates() {
    let store = Arc::new(MemoryStore::new());
    let mut auth = AuthManager::new(store.clone());

    auth.signup("Alice", "a@b.com", "Abc123!").await.unwrap();
    let result = auth.signup("Impostor", "a@b.com", "Zzz999!").await.unwrap();

    assert!(!result.success);
    assert_eq!(auth.auth_error(), Some("Email is already registered."));

    let raw = store.get(USERS_KEY).await.unwrap().unwrap();
    let registry: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry[0]["name"], "Alice");
}

#[tokio::test]
async fn wrong_password_sets_error_and_leaves_no_session() {
    let mut auth = memory_manager();

    auth.signup("Alice", "a@b.com", "Abc123!").await.unwrap();
    auth.logout().await.unwrap();

    let login = auth.login("a@b.com", "Nope999!").await.unwrap();
    assert!(!login.success);
    assert_eq!(auth.auth_error(), Some("Invalid email or password."));
    assert!(auth.current_user().is_none());
    assert!(!auth.is_logged_in().await.unwrap());
}

#[tokio::test]
async fn unknown_email_and_wrong_password_share_one_message() {
    let mut auth = memory_manager();
    auth.signup("Alice", "a@b.com", "Abc123!").await.unwrap();
    auth.logout().await.unwrap();

    auth.login("missing@b.com", "Abc123!").await.unwrap();
    let unknown_email_msg = auth.auth_error().unwrap().to_string();

    auth.clear_auth_error();
    auth.login("a@b.com", "Wrong11!").await.unwrap();
    let wrong_password_msg = auth.auth_error().unwrap().to_string();

    assert_eq!(unknown_email_msg, wrong_password_msg);
}

#[tokio::test]
async fn logout_clears_the_persisted_session_key() {
    let store = Arc::new(MemoryStore::new());
    let mut auth = AuthManager::new(store.clone());

    auth.signup("Alice", "a@b.com", "Abc123!").await.unwrap();
    auth.login("a@b.com", "Abc123!").await.unwrap();
    assert!(auth.is_logged_in().await.unwrap());

    auth.logout().await.unwrap();
    assert!(!auth.is_logged_in().await.unwrap());
    assert_eq!(store.get(SESSION_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn session_round_trips_through_a_fresh_process() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("auth_store.json");

    // First "process": sign up and exit without logging out
    {
        let store = Arc::new(FileStore::new(&path));
        let mut auth = AuthManager::new(store);
        auth.signup("Alice", "a@b.com", "Abc123!").await.unwrap();
    }

    // Second "process": the persisted session is restored field for field
    let store = Arc::new(FileStore::new(&path));
    let mut auth = AuthManager::new(store);
    assert!(auth.is_logged_in().await.unwrap());

    auth.initialize().await.unwrap();
    let user = auth.current_user().unwrap();
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.password, "Abc123!");
}

#[tokio::test]
async fn registry_persists_across_processes_for_login() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("auth_store.json");

    {
        let store = Arc::new(FileStore::new(&path));
        let mut auth = AuthManager::new(store);
        auth.signup("Alice", "a@b.com", "Abc123!").await.unwrap();
        auth.logout().await.unwrap();
    }

    let store = Arc::new(FileStore::new(&path));
    let mut auth = AuthManager::new(store);
    assert!(!auth.is_logged_in().await.unwrap());

    let login = auth.login("a@b.com", "Abc123!").await.unwrap();
    assert!(login.success);
    assert_eq!(auth.current_user().unwrap().name, "Alice");
}

#[tokio::test]
async fn missing_storage_file_behaves_as_empty_storage() {
    let dir = tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("never_written.json")));
    let mut auth = AuthManager::new(store);

    auth.initialize().await.unwrap();
    assert!(auth.current_user().is_none());
    assert!(!auth.is_logged_in().await.unwrap());

    let login = auth.login("a@b.com", "Abc123!").await.unwrap();
    assert!(!login.success);
    assert_eq!(auth.auth_error(), Some("Invalid email or password."));
}

#[test]
fn email_validation_matches_the_published_shape() {
    assert!(validate_email("a@b.co"));
    assert!(!validate_email("a@b"));
    for s in ["", "plain", "no.at.sign", "spaces in@b.co"] {
        assert!(!validate_email(s), "expected {:?} to be rejected", s);
    }
}

#[test]
fn password_validation_reports_first_violation_only() {
    assert_eq!(
        validate_password("short").unwrap_err().to_string(),
        "Password must be at least 6 characters long."
    );
    assert!(validate_password("Abc123!").is_ok());
}
