//! Console application configuration.
//!
//! A single JSON file with defaults for every field, so an absent file and
//! an empty object mean the same thing.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::auth::UserRecord;

use super::errors::{ConsoleError, ConsoleResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Application name shown in help output
    #[serde(default = "default_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Application description (root command description)
    #[serde(default)]
    pub description: String,

    /// Whether the console terminates the process itself after dispatch
    /// (default: false, the exit code is returned to the caller)
    #[serde(default)]
    pub auto_exit: bool,

    /// User records for the built-in login command
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

fn default_name() -> String {
    "tiller".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            description: String::new(),
            auto_exit: false,
            users: Vec::new(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConsoleResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConsoleError::Config(format!("Failed to read config: {}", e)))?;

        let config: ConsoleConfig = serde_json::from_str(&content)
            .map_err(|e| ConsoleError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> ConsoleResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration
    fn validate(&self) -> ConsoleResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConsoleError::Config("name must not be empty".to_string()));
        }

        if self.version.trim().is_empty() {
            return Err(ConsoleError::Config(
                "version must not be empty".to_string(),
            ));
        }

        // Duplicate usernames would make the login store ambiguous.
        let mut seen = HashSet::new();
        for user in &self.users {
            if !seen.insert(user.username.as_str()) {
                return Err(ConsoleError::Config(format!(
                    "Duplicate username in users: '{}'",
                    user.username
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let file = write_config("{}");
        let config = ConsoleConfig::load(file.path()).unwrap();

        assert_eq!(config.name, "tiller");
        assert!(!config.auto_exit);
        assert!(config.users.is_empty());
    }

    #[test]
    fn test_full_config_round_trip() {
        let file = write_config(
            r#"{
                "name": "demo",
                "version": "2.1.0",
                "description": "A demo console",
                "auto_exit": true,
                "users": [{"username": "flower", "secret": "1234"}]
            }"#,
        );
        let config = ConsoleConfig::load(file.path()).unwrap();

        assert_eq!(config.name, "demo");
        assert_eq!(config.version, "2.1.0");
        assert!(config.auto_exit);
        assert_eq!(config.users.len(), 1);
        assert_eq!(config.users[0].username, "flower");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let file = write_config("not json");
        let result = ConsoleConfig::load(file.path());

        assert!(matches!(result, Err(ConsoleError::Config(_))));
    }

    #[test]
    fn test_empty_name_rejected() {
        let file = write_config(r#"{"name": "  "}"#);
        assert!(ConsoleConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_duplicate_usernames_rejected() {
        let file = write_config(
            r#"{"users": [
                {"username": "flower", "secret": "1234"},
                {"username": "flower", "secret": "5678"}
            ]}"#,
        );
        let result = ConsoleConfig::load(file.path());

        assert!(matches!(result, Err(ConsoleError::Config(_))));
    }

    #[test]
    fn test_load_or_default_with_missing_file() {
        let config = ConsoleConfig::load_or_default(Path::new("/nonexistent/tiller.json")).unwrap();
        assert_eq!(config.name, "tiller");
    }
}
