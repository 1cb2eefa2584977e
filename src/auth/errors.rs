//! # Auth Errors
//!
//! Error types for the authentication module.
//!
//! Normal authentication failures (wrong password, unknown user) are never
//! errors; they are `Status` values. Only hashing faults reach this type.

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication infrastructure errors
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Password hashing failed
    #[error("Internal error: password hashing failed")]
    HashingFailed,

    /// Stored secret could not be parsed as a password hash
    #[error("Stored secret is not a valid password hash")]
    InvalidHash,
}
