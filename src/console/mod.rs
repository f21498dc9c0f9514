//! Interactive console front-end
//!
//! The stand-in for the application's screens: collects input, runs the
//! validation helpers before any auth operation, and displays the auth
//! manager's results. Validation failures never reach storage.

pub mod parser;

pub use parser::{Command, parse_command};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::auth::AuthManager;
use crate::config::AppConfig;
use crate::error::handlers::{error_to_user_message, handle_error};
use crate::error::{AppError, StorageError, ValidationError};
use crate::validation::{is_clean_input, validate_email, validate_password};

const PROMPT: &str = "auth> ";

/// Run the interactive session until QUIT or end of input.
pub async fn run(config: &AppConfig, auth: &mut AuthManager) -> Result<(), AppError> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut stdout = tokio::io::stdout();

    greet(auth).await?;

    loop {
        stdout
            .write_all(PROMPT.as_bytes())
            .await
            .map_err(StorageError::from)?;
        stdout.flush().await.ok();

        let Some(line) = lines.next_line().await.ok().flatten() else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        // New input clears the previous attempt's error
        auth.clear_auth_error();

        let command = parse_command(&line);
        match dispatch(command, config, auth).await {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Quit) => break,
            Err(e) => {
                handle_error(&e);
                println!("{}", error_to_user_message(&e));
            }
        }
    }

    Ok(())
}

enum Outcome {
    Continue,
    Quit,
}

/// Startup behavior of the home screen: show the session if one is
/// persisted, otherwise point at the login/signup commands.
async fn greet(auth: &mut AuthManager) -> Result<(), AppError> {
    if auth.is_logged_in().await? {
        if let Some(user) = auth.current_user() {
            println!("Welcome back, {}!", user.name);
            return Ok(());
        }
    }
    println!("Not logged in. Use LOGIN or SIGNUP (HELP for usage).");
    Ok(())
}

async fn dispatch(
    command: Command,
    config: &AppConfig,
    auth: &mut AuthManager,
) -> Result<Outcome, AppError> {
    match command {
        Command::Signup {
            name,
            email,
            password,
        } => {
            if let Err(e) = check_form(config, Some(&name), &email, &password) {
                println!("{}", e);
                return Ok(Outcome::Continue);
            }
            let result = auth.signup(&name, &email, &password).await?;
            if result.success {
                println!("Account created. Welcome, {}!", name);
            } else if let Some(message) = auth.auth_error() {
                println!("{}", message);
            }
            Ok(Outcome::Continue)
        }
        Command::Login { email, password } => {
            if let Err(e) = check_form(config, None, &email, &password) {
                println!("{}", e);
                return Ok(Outcome::Continue);
            }
            let result = auth.login(&email, &password).await?;
            if result.success {
                let name = auth.current_user().map(|u| u.name.clone()).unwrap_or_default();
                println!("Welcome, {}!", name);
            } else if let Some(message) = auth.auth_error() {
                println!("{}", message);
            }
            Ok(Outcome::Continue)
        }
        Command::Logout => {
            auth.logout().await?;
            println!("Logged out.");
            Ok(Outcome::Continue)
        }
        Command::Whoami => {
            match auth.current_user() {
                Some(user) => println!("{} <{}>", user.name, user.email),
                None => println!("Not logged in."),
            }
            Ok(Outcome::Continue)
        }
        Command::Status => {
            if auth.is_logged_in().await? {
                println!("A session is active.");
            } else {
                println!("No active session.");
            }
            Ok(Outcome::Continue)
        }
        Command::Help => {
            print_help();
            Ok(Outcome::Continue)
        }
        Command::Quit => {
            println!("Goodbye.");
            Ok(Outcome::Quit)
        }
        Command::Unknown(raw) => {
            println!("Unrecognized command: {} (HELP for usage)", raw);
            Ok(Outcome::Continue)
        }
    }
}

/// Field validation in fixed order: hygiene first, then email shape, then
/// the password rules. Returns the first failure.
fn check_form(
    config: &AppConfig,
    name: Option<&str>,
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if let Some(name) = name {
        if !is_clean_input(name, config.max_name_length) {
            return Err(ValidationError::MalformedInput("name".into()));
        }
    }
    if !is_clean_input(email, config.max_email_length) {
        return Err(ValidationError::MalformedInput("email".into()));
    }
    if !is_clean_input(password, config.max_password_length) {
        return Err(ValidationError::MalformedInput("password".into()));
    }
    if !validate_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    validate_password(password)
}

fn print_help() {
    println!("Commands:");
    println!("  SIGNUP <name> <email> <password>   create an account and log in");
    println!("  LOGIN <email> <password>           log in to an existing account");
    println!("  LOGOUT                             end the active session");
    println!("  WHOAMI                             show the logged-in user");
    println!("  STATUS                             check the persisted session");
    println!("  QUIT                               exit");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig::default()
    }

    #[test]
    fn test_check_form_orders_failures() {
        let cfg = config();

        // Hygiene runs before email shape
        assert_eq!(
            check_form(&cfg, Some(""), "a@b.co", "Abc123!"),
            Err(ValidationError::MalformedInput("name".into()))
        );
        // Email shape runs before password rules
        assert_eq!(
            check_form(&cfg, None, "not-an-email", "short"),
            Err(ValidationError::InvalidEmail)
        );
        // Password rules reported last
        assert_eq!(
            check_form(&cfg, None, "a@b.co", "short"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(check_form(&cfg, Some("Alice"), "a@b.co", "Abc123!"), Ok(()));
    }

    #[test]
    fn test_check_form_respects_length_limits() {
        let cfg = AppConfig {
            max_email_length: 5,
            ..AppConfig::default()
        };
        assert_eq!(
            check_form(&cfg, None, "a@b.co", "Abc123!"),
            Err(ValidationError::MalformedInput("email".into()))
        );
    }
}
