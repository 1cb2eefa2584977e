//! Console-specific error types
//!
//! Handler failures are values, not panics: a command handler returns
//! `Result<i32, HandlerError>` and the console converts the error branch to
//! an exit code exactly once, at the top of the dispatch pipeline.

use std::io;

use thiserror::Error;

/// Error raised by a command handler, carrying an optional explicit exit
/// code. Without one the console falls back to exit code 1.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
    code: Option<i32>,
}

impl HandlerError {
    /// Create a handler error with the default exit code.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Create a handler error with an explicit exit code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            code: Some(code),
        }
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The explicit exit code, if one was attached.
    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

/// Console error
#[derive(Debug, Clone, Error)]
pub enum ConsoleError {
    /// No command matched the leftover tokens and the resolved command has
    /// no handler of its own.
    #[error("Unknown command: '{0}'")]
    CommandNotFound(String),

    /// A command handler failed.
    #[error(transparent)]
    Handler(#[from] HandlerError),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (argument stream, stdout/stderr)
    #[error("I/O error: {0}")]
    Io(String),
}

impl ConsoleError {
    /// Exit code for this error, before POSIX range normalization.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConsoleError::Handler(e) => e.code().unwrap_or(1),
            ConsoleError::CommandNotFound(_) => 1,
            ConsoleError::Config(_) => 1,
            ConsoleError::Io(_) => 1,
        }
    }
}

impl From<io::Error> for ConsoleError {
    fn from(e: io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {}", e))
    }
}

/// Console result type
pub type ConsoleResult<T> = Result<T, ConsoleError>;
