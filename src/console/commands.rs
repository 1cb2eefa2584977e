//! Built-in commands and the binary entry path.
//!
//! The binary assembles a console from `tiller.json`, registers the built-in
//! command set, and dispatches. All logic lives here; main.rs only forwards
//! the exit code.

use std::path::Path;

use crate::auth::{crypto, AuthMethod, Credential, LocalMethod, Status};

use super::application::Console;
use super::command::{Command, HandlerContext};
use super::config::ConsoleConfig;
use super::errors::{ConsoleResult, HandlerError};
use super::io::{ConsoleIo, StdIo};

/// Default configuration file path
const CONFIG_PATH: &str = "tiller.json";

/// Main entry point
///
/// Loads configuration, assembles the console, and dispatches the process
/// argument vector. This is the only function main.rs should call.
pub fn run() -> ConsoleResult<i32> {
    let config = ConsoleConfig::load_or_default(Path::new(CONFIG_PATH))?;
    let io = StdIo::from_env();
    let mut console = build_console(io, config);
    Ok(console.execute())
}

/// Assemble a console with the built-in command set registered.
pub fn build_console<I: ConsoleIo>(io: I, config: ConsoleConfig) -> Console<I> {
    let mut console = Console::new(io, config);
    register_version(&mut console);
    register_hash(&mut console);
    register_login(&mut console);
    console
}

fn register_version<I: ConsoleIo>(console: &mut Console<I>) {
    let line = format!("{} {}", console.name(), console.version());

    console.add_command(
        Command::new("version")
            .description("Show the application version")
            .handler(move |ctx: HandlerContext<'_>| {
                ctx.io.out(&line);
                Ok(0)
            }),
    );
}

fn register_hash<I: ConsoleIo>(console: &mut Console<I>) {
    console.add_command(
        Command::new("hash")
            .description("Hash a password for the users list")
            .handler(|ctx: HandlerContext<'_>| {
                let password = match ctx.args {
                    [password] => password,
                    _ => return Err(HandlerError::with_code("Usage: hash <password>", 2)),
                };

                let hash =
                    crypto::hash_password(password).map_err(|e| HandlerError::new(e.to_string()))?;
                ctx.io.out(&hash);
                Ok(0)
            }),
    );
}

fn register_login<I: ConsoleIo>(console: &mut Console<I>) {
    // Stored secrets are Argon2id hashes produced by the hash command.
    let users = console.config().users.clone();

    console.add_command(
        Command::new("login")
            .description("Check a username/password against the configured users")
            .handler(move |ctx: HandlerContext<'_>| {
                let (username, password) = match ctx.args {
                    [username, password] => (username, password),
                    _ => {
                        return Err(HandlerError::with_code(
                            "Usage: login <username> <password>",
                            2,
                        ))
                    }
                };

                let mut method = LocalMethod::new(users.clone());
                method.set_verify_handler(crypto::argon2_verifier());

                let credential = Credential::new(username.clone(), password.clone());
                if method.authenticate(&credential) {
                    ctx.io.out(&format!("Authenticated '{}'", username));
                    return Ok(0);
                }

                match method.status() {
                    Status::InvalidCredential => {
                        Err(HandlerError::new("Authentication failed: invalid credential"))
                    }
                    Status::UserNotFound => {
                        Err(HandlerError::new("Authentication failed: user not found"))
                    }
                    status => Err(HandlerError::new(format!(
                        "Authentication failed: {}",
                        status
                    ))),
                }
            }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::UserRecord;
    use crate::console::io::MemoryIo;

    fn config_with_user(username: &str, password: &str) -> ConsoleConfig {
        ConsoleConfig {
            users: vec![UserRecord::new(
                username,
                crypto::hash_password(password).unwrap(),
            )],
            ..ConsoleConfig::default()
        }
    }

    #[test]
    fn test_version_command_prints_name_and_version() {
        let mut console = build_console(MemoryIo::new(&["version"]), ConsoleConfig::default());

        assert_eq!(console.execute(), 0);
        assert_eq!(console.io().output(), &["tiller 0.1.0".to_string()]);
    }

    #[test]
    fn test_hash_command_produces_verifiable_hash() {
        let mut console = build_console(MemoryIo::new(&["hash", "qwer"]), ConsoleConfig::default());

        assert_eq!(console.execute(), 0);
        let hash = &console.io().output()[0];
        assert!(crypto::verify_password("qwer", hash).unwrap());
    }

    #[test]
    fn test_hash_command_usage_error() {
        let mut console = build_console(MemoryIo::new(&["hash"]), ConsoleConfig::default());

        assert_eq!(console.execute(), 2);
        assert!(console.io().errors()[0].contains("Usage: hash"));
    }

    #[test]
    fn test_login_success() {
        let config = config_with_user("flower", "1234");
        let mut console = build_console(MemoryIo::new(&["login", "flower", "1234"]), config);

        assert_eq!(console.execute(), 0);
        assert!(console.io().output()[0].contains("flower"));
    }

    #[test]
    fn test_login_wrong_password() {
        let config = config_with_user("flower", "1234");
        let mut console = build_console(MemoryIo::new(&["login", "flower", "5678"]), config);

        assert_eq!(console.execute(), 1);
        assert!(console.io().errors()[0].contains("invalid credential"));
    }

    #[test]
    fn test_login_unknown_user() {
        let config = config_with_user("flower", "1234");
        let mut console = build_console(MemoryIo::new(&["login", "olive", "1234"]), config);

        assert_eq!(console.execute(), 1);
        assert!(console.io().errors()[0].contains("user not found"));
    }

    #[test]
    fn test_login_usage_error() {
        let mut console = build_console(MemoryIo::new(&["login", "flower"]), ConsoleConfig::default());

        assert_eq!(console.execute(), 2);
        assert!(console.io().errors()[0].contains("Usage: login"));
    }
}
