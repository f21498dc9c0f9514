//! Local Auth Console - Entry Point
//!
//! Wires the file-backed credential store into the auth manager and runs the
//! interactive front-end.

use std::sync::Arc;

use log::info;

use local_auth::auth::AuthManager;
use local_auth::config::AppConfig;
use local_auth::console;
use local_auth::error::AppError;
use local_auth::error::handlers::{error_to_user_message, handle_error};
use local_auth::storage::FileStore;

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    if let Err(e) = run().await {
        handle_error(&e);
        eprintln!("{}", error_to_user_message(&e));
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    info!("Using credential store at {}", config.storage_path);

    let store = Arc::new(FileStore::new(&config.storage_path));
    let mut auth = AuthManager::new(store);
    auth.initialize().await?;

    console::run(&config, &mut auth).await
}
