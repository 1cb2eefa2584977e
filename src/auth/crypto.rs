//! # Cryptographic Utilities
//!
//! Ready-made verify handlers and the password hashing helper that produces
//! storable secrets for them.
//!
//! The authentication method itself never compares secrets; everything here
//! is injected through the `VerifyHandler` seam.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use subtle::ConstantTimeEq;

use super::errors::{AuthError, AuthResult};
use super::method::VerifyHandler;

/// Hash a password using Argon2id, producing a string suitable for a
/// `UserRecord` secret checked by `argon2_verifier`.
pub fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::HashingFailed)
}

/// Verify a password against an Argon2id hash.
///
/// Uses constant-time comparison internally (via argon2 crate).
pub fn verify_password(password: &str, hash: &str) -> AuthResult<bool> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidHash)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Constant-time comparison of two byte slices
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Constant-time comparison of two strings
pub fn constant_time_str_eq(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}

/// Verify handler comparing the provided secret to a plaintext stored
/// secret in constant time.
pub fn equality_verifier() -> VerifyHandler {
    Box::new(|provided, stored| constant_time_str_eq(provided, stored))
}

/// Verify handler treating the stored secret as an Argon2id hash.
///
/// An unparseable stored hash fails closed rather than erroring.
pub fn argon2_verifier() -> VerifyHandler {
    Box::new(|provided, stored| verify_password(provided, stored).unwrap_or(false))
}
