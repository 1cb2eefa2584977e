//! Credential value type.

use serde::{Deserialize, Serialize};

/// A username/secret pair presented for authentication.
///
/// Plain value; callers may mutate the fields between attempts. The
/// authentication pipeline never mutates a credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Name the user claims.
    pub username: String,

    /// Secret presented for verification (plaintext as typed; comparison
    /// against the stored form is the verify handler's job).
    pub password: String,
}

impl Credential {
    /// Create a new credential
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
