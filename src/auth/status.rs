//! Authentication status values.
//!
//! Normal authentication failures are represented as statuses, never as
//! errors, so repeated attempts stay cheap and exception-free.

use std::fmt;

/// Outcome of the most recent authentication attempt.
///
/// A status always reflects the latest `authenticate` call only; it is not
/// cumulative across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No authentication attempt has been made yet.
    NotAuthenticated,
    /// Credential matched a stored user record.
    Success,
    /// User record found but the secret did not verify.
    InvalidCredential,
    /// No user record matched the presented username.
    UserNotFound,
    /// No verify handler installed; the method fails closed (see DESIGN.md).
    NotConfigured,
    /// Named dispatch addressed a method that is not registered.
    MethodNotFound,
}

impl Status {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotAuthenticated => "NOT_AUTHENTICATED",
            Status::Success => "SUCCESS",
            Status::InvalidCredential => "INVALID_CREDENTIAL",
            Status::UserNotFound => "USER_NOT_FOUND",
            Status::NotConfigured => "NOT_CONFIGURED",
            Status::MethodNotFound => "METHOD_NOT_FOUND",
        }
    }

    /// True only for a successful attempt.
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        assert_eq!(Status::Success.as_str(), "SUCCESS");
        assert_eq!(Status::InvalidCredential.as_str(), "INVALID_CREDENTIAL");
        assert_eq!(Status::UserNotFound.as_str(), "USER_NOT_FOUND");
        assert_eq!(Status::NotAuthenticated.as_str(), "NOT_AUTHENTICATED");
    }

    #[test]
    fn test_only_success_is_success() {
        assert!(Status::Success.is_success());
        assert!(!Status::NotAuthenticated.is_success());
        assert!(!Status::InvalidCredential.is_success());
        assert!(!Status::UserNotFound.is_success());
        assert!(!Status::NotConfigured.is_success());
        assert!(!Status::MethodNotFound.is_success());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", Status::UserNotFound), "USER_NOT_FOUND");
    }
}
