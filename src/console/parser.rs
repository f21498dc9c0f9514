//! Console command parser
//!
//! Turns raw input lines into commands for the interactive front-end.

/// Command enum to represent console commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Signup {
        name: String,
        email: String,
        password: String,
    },
    Login {
        email: String,
        password: String,
    },
    Logout,
    Whoami,
    Status,
    Help,
    Quit,
    Unknown(String),
}

/// Parse a raw input line into a Command
///
/// The verb is case-insensitive; arguments are whitespace-separated and keep
/// their case. A recognized verb with the wrong argument count is `Unknown`.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.split_whitespace();
    let verb = parts.next().unwrap_or("").to_ascii_uppercase();
    let args: Vec<&str> = parts.collect();

    match (verb.as_str(), args.as_slice()) {
        ("SIGNUP", [name, email, password]) => Command::Signup {
            name: (*name).to_string(),
            email: (*email).to_string(),
            password: (*password).to_string(),
        },
        ("LOGIN", [email, password]) => Command::Login {
            email: (*email).to_string(),
            password: (*password).to_string(),
        },
        ("LOGOUT", []) => Command::Logout,
        ("WHOAMI", []) => Command::Whoami,
        ("STATUS", []) => Command::Status,
        ("HELP", []) | ("H", []) => Command::Help,
        ("QUIT", []) | ("Q", []) | ("EXIT", []) => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("LOGOUT"), Command::Logout);
        assert_eq!(parse_command("WHOAMI"), Command::Whoami);
        assert_eq!(parse_command("STATUS"), Command::Status);
        assert_eq!(parse_command("HELP"), Command::Help);
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn test_parse_commands_with_args() {
        assert_eq!(
            parse_command("LOGIN a@b.com Abc123!"),
            Command::Login {
                email: "a@b.com".to_string(),
                password: "Abc123!".to_string(),
            }
        );
        assert_eq!(
            parse_command("SIGNUP Alice a@b.com Abc123!"),
            Command::Signup {
                name: "Alice".to_string(),
                email: "a@b.com".to_string(),
                password: "Abc123!".to_string(),
            }
        );
    }

    #[test]
    fn test_verb_is_case_insensitive_args_are_not() {
        assert_eq!(
            parse_command("login A@b.com Abc123!"),
            Command::Login {
                email: "A@b.com".to_string(),
                password: "Abc123!".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_command("  LOGOUT  "), Command::Logout);
        assert_eq!(
            parse_command("LOGIN   a@b.com   Abc123!"),
            Command::Login {
                email: "a@b.com".to_string(),
                password: "Abc123!".to_string(),
            }
        );
    }

    #[test]
    fn test_wrong_arity_is_unknown() {
        assert_eq!(
            parse_command("LOGIN a@b.com"),
            Command::Unknown("LOGIN a@b.com".to_string())
        );
        assert_eq!(
            parse_command("LOGOUT now"),
            Command::Unknown("LOGOUT now".to_string())
        );
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(parse_command(""), Command::Unknown(String::new()));
        assert_eq!(
            parse_command("DELETE a@b.com"),
            Command::Unknown("DELETE a@b.com".to_string())
        );
    }
}
