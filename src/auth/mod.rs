//! # Authentication Module
//!
//! Credential verification against pluggable authentication methods.
//!
//! The built-in `LocalMethod` checks a credential against an in-memory user
//! store through an injected verify handler; `Authenticator` runs a
//! credential through several named methods in order. Outcomes are `Status`
//! values, never errors, and never printed by this module.

pub mod authenticator;
pub mod credential;
pub mod crypto;
pub mod errors;
pub mod method;
pub mod status;

pub use authenticator::Authenticator;
pub use credential::Credential;
pub use errors::{AuthError, AuthResult};
pub use method::{AuthMethod, LocalMethod, UserRecord, VerifyHandler};
pub use status::Status;
