//! # Authentication Methods
//!
//! The `AuthMethod` trait and the built-in `LocalMethod`, which checks a
//! credential against an in-memory list of user records using a pluggable
//! verify handler.

use serde::{Deserialize, Serialize};

use super::credential::Credential;
use super::status::Status;

/// Pluggable secret comparison: `(provided, stored) -> bool`.
///
/// The method never hashes or compares secrets itself; it only plumbs the
/// comparison through. See `crypto` for ready-made handlers.
pub type VerifyHandler = Box<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// A stored user entry: username plus the stored form of the secret
/// (plaintext, hash, whatever the installed verify handler expects).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub secret: String,
}

impl UserRecord {
    /// Create a new user record
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }
}

/// An authentication method
///
/// Implementations record the outcome of the most recent `authenticate`
/// call and expose it through `status()`.
pub trait AuthMethod: Send + Sync {
    /// Check a credential. Returns true on success; the precise outcome is
    /// available from `status()` afterwards.
    fn authenticate(&mut self, credential: &Credential) -> bool;

    /// Outcome of the most recent `authenticate` call, or
    /// `Status::NotAuthenticated` before the first one.
    fn status(&self) -> Status;
}

/// Local in-memory username/password method.
///
/// Records are searched linearly by exact, case-sensitive username equality;
/// the first match wins. The store is replaced wholesale via `set_users`,
/// never merged.
pub struct LocalMethod {
    users: Vec<UserRecord>,
    verify: Option<VerifyHandler>,
    status: Status,
}

impl LocalMethod {
    /// Create a method backed by the given records. No verify handler is
    /// installed yet; until one is, every attempt fails closed with
    /// `Status::NotConfigured`.
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users,
            verify: None,
            status: Status::NotAuthenticated,
        }
    }

    /// Replace the backing user store wholesale.
    pub fn set_users(&mut self, users: Vec<UserRecord>) -> &mut Self {
        self.users = users;
        self
    }

    /// The configured user records.
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Install the secret comparison function.
    pub fn set_verify_handler<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        self.verify = Some(Box::new(handler));
        self
    }

    /// The installed verify handler, if any.
    pub fn verify_handler(&self) -> Option<&VerifyHandler> {
        self.verify.as_ref()
    }
}

impl AuthMethod for LocalMethod {
    fn authenticate(&mut self, credential: &Credential) -> bool {
        // Fail closed before touching the store: a pipeline without a verify
        // handler must never report anything about stored users.
        let status = match &self.verify {
            None => Status::NotConfigured,
            Some(verify) => {
                match self
                    .users
                    .iter()
                    .find(|u| u.username == credential.username)
                {
                    None => Status::UserNotFound,
                    Some(record) => {
                        if verify(&credential.password, &record.secret) {
                            Status::Success
                        } else {
                            Status::InvalidCredential
                        }
                    }
                }
            }
        };

        self.status = status;
        status.is_success()
    }

    fn status(&self) -> Status {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_users() -> Vec<UserRecord> {
        vec![
            UserRecord::new("sakura", "qwer"),
            UserRecord::new("flower", "1234"),
        ]
    }

    fn method_with_equality() -> LocalMethod {
        let mut method = LocalMethod::new(seed_users());
        method.set_verify_handler(|provided, stored| provided == stored);
        method
    }

    #[test]
    fn test_initial_status_is_sentinel() {
        let method = LocalMethod::new(seed_users());
        assert_eq!(method.status(), Status::NotAuthenticated);
    }

    #[test]
    fn test_authenticate_success() {
        let mut method = method_with_equality();
        let credential = Credential::new("flower", "1234");

        assert!(method.authenticate(&credential));
        assert_eq!(method.status(), Status::Success);
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let mut method = method_with_equality();
        let credential = Credential::new("flower", "5678");

        assert!(!method.authenticate(&credential));
        assert_eq!(method.status(), Status::InvalidCredential);
    }

    #[test]
    fn test_authenticate_unknown_user() {
        let mut method = method_with_equality();
        let credential = Credential::new("olive", "anything");

        assert!(!method.authenticate(&credential));
        assert_eq!(method.status(), Status::UserNotFound);
    }

    #[test]
    fn test_username_match_is_case_sensitive() {
        let mut method = method_with_equality();
        let credential = Credential::new("Flower", "1234");

        assert!(!method.authenticate(&credential));
        assert_eq!(method.status(), Status::UserNotFound);
    }

    #[test]
    fn test_missing_verify_handler_fails_closed() {
        let mut method = LocalMethod::new(seed_users());
        let credential = Credential::new("flower", "1234");

        assert!(!method.authenticate(&credential));
        assert_eq!(method.status(), Status::NotConfigured);
    }

    #[test]
    fn test_status_reflects_latest_call_only() {
        let mut method = method_with_equality();

        assert!(method.authenticate(&Credential::new("flower", "1234")));
        assert_eq!(method.status(), Status::Success);

        assert!(!method.authenticate(&Credential::new("olive", "1234")));
        assert_eq!(method.status(), Status::UserNotFound);
    }

    #[test]
    fn test_authenticate_does_not_mutate_inputs() {
        let mut method = method_with_equality();
        let users_before = method.users().to_vec();
        let credential = Credential::new("flower", "1234");
        let credential_before = credential.clone();

        method.authenticate(&credential);

        assert_eq!(credential, credential_before);
        assert_eq!(method.users(), users_before.as_slice());
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let mut method = LocalMethod::new(vec![
            UserRecord::new("flower", "1234"),
            UserRecord::new("flower", "5678"),
        ]);
        method.set_verify_handler(|provided, stored| provided == stored);

        assert!(method.authenticate(&Credential::new("flower", "1234")));
        assert!(!method.authenticate(&Credential::new("flower", "5678")));
    }

    #[test]
    fn test_set_users_replaces_store() {
        let mut method = method_with_equality();
        method.set_users(vec![UserRecord::new("olive", "zxcv")]);

        assert!(!method.authenticate(&Credential::new("flower", "1234")));
        assert_eq!(method.status(), Status::UserNotFound);
        assert!(method.authenticate(&Credential::new("olive", "zxcv")));
    }

    #[test]
    fn test_verify_handler_accessor() {
        let method = method_with_equality();
        assert!(method.verify_handler().is_some());

        let bare = LocalMethod::new(vec![]);
        assert!(bare.verify_handler().is_none());
    }
}
