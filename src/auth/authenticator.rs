//! # Authenticator
//!
//! Ordered registry of named authentication methods. A credential is tried
//! against each method in insertion order until one succeeds.

use super::credential::Credential;
use super::method::AuthMethod;
use super::status::Status;

/// Runs a credential through one or more registered methods and records the
/// aggregate outcome.
///
/// Authentication failures are silent; callers inspect the returned bool and
/// `status()`. Nothing here writes to any stream.
pub struct Authenticator {
    methods: Vec<(String, Box<dyn AuthMethod>)>,
    status: Status,
}

impl Authenticator {
    /// Create an authenticator with no methods registered.
    pub fn new() -> Self {
        Self {
            methods: Vec::new(),
            status: Status::NotAuthenticated,
        }
    }

    /// Register a method under a name. A method registered under an existing
    /// name replaces the prior one in place, keeping its position in the
    /// evaluation order.
    pub fn add_method(&mut self, name: impl Into<String>, method: Box<dyn AuthMethod>) -> &mut Self {
        let name = name.into();
        match self.methods.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = method,
            None => self.methods.push((name, method)),
        }
        self
    }

    /// Names of the registered methods, in evaluation order.
    pub fn method_names(&self) -> Vec<&str> {
        self.methods.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Try the credential against every method in order, stopping at the
    /// first success. On overall failure the status is the outcome of the
    /// last method tried; with no methods registered it is
    /// `Status::UserNotFound`.
    pub fn authenticate(&mut self, credential: &Credential) -> bool {
        let mut last = Status::UserNotFound;

        for (_, method) in &mut self.methods {
            if method.authenticate(credential) {
                self.status = Status::Success;
                return true;
            }
            last = method.status();
        }

        self.status = last;
        false
    }

    /// Try the credential against a single named method. An unknown name
    /// yields `Status::MethodNotFound`.
    pub fn authenticate_by(&mut self, name: &str, credential: &Credential) -> bool {
        match self.methods.iter_mut().find(|(n, _)| n == name) {
            Some((_, method)) => {
                let ok = method.authenticate(credential);
                self.status = method.status();
                ok
            }
            None => {
                self.status = Status::MethodNotFound;
                false
            }
        }
    }

    /// Outcome of the most recent authenticate call.
    pub fn status(&self) -> Status {
        self.status
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new()
    }
}
