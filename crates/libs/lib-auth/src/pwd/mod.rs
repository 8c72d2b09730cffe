//! # Password Hashing
//!
//! Password hashing and verification using Argon2id.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`),
//! so the salt and cost parameters travel with the hash and verification needs
//! nothing else.

use argon2::{
    password_hash::{
        self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2,
};
use thiserror::Error;

/// Password hashing errors.
///
/// A wrong password is not an error: [`verify_password`] returns `Ok(false)`.
#[derive(Debug, Error)]
pub enum Error {
    /// Refused to hash an empty password.
    #[error("Password must not be empty")]
    EmptyPassword,

    /// The hash could not be computed, or a stored hash is malformed or uses
    /// parameters this build does not support.
    #[error("Password hashing failed: {0}")]
    HashingFailure(String),
}

impl From<password_hash::Error> for Error {
    fn from(err: password_hash::Error) -> Self {
        Error::HashingFailure(err.to_string())
    }
}

/// Argon2id, version 0x13, with the crate's default cost parameters.
fn hasher() -> Argon2<'static> {
    Argon2::default()
}

/// Hash a password using Argon2id with a freshly generated salt.
pub fn hash_password(password: &str) -> Result<String, Error> {
    if password.is_empty() {
        return Err(Error::EmptyPassword);
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = hasher().hash_password(password.as_bytes(), &salt)?;

    Ok(password_hash.to_string())
}

/// Verify a plaintext password against a stored PHC hash.
///
/// The comparison is constant time. Returns `Ok(false)` only for a mismatch;
/// an unparsable hash, or one missing its salt or output, is an
/// [`Error::HashingFailure`].
pub fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
    let parsed_hash = PasswordHash::new(hash)?;

    // The verifier reports a missing salt or output as a mismatch.
    if parsed_hash.salt.is_none() || parsed_hash.hash.is_none() {
        return Err(Error::HashingFailure(
            "stored hash is missing its salt or output".to_string(),
        ));
    }

    match hasher().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_password_hashing() {
        let password = "correct-horse-battery-staple";
        let hash = hash_password(password).expect("Password hashing should succeed");

        assert!(hash.starts_with("$argon2id$"), "expected argon2id PHC prefix");
        assert!(!hash.contains(password));
        assert!(verify_password(password, &hash)
            .expect("Verification should succeed for a well-formed hash"));
    }

    #[test]
    fn test_wrong_password_is_false() {
        let hash = hash_password("04234").expect("Password hashing should succeed");

        assert!(!verify_password("04235", &hash).expect("verify should succeed"));
        assert!(!verify_password("", &hash).expect("verify should succeed"));
    }

    #[test]
    fn test_salt_is_random() {
        let first = hash_password("same-password").expect("hashing should succeed");
        let second = hash_password("same-password").expect("hashing should succeed");

        assert_ne!(first, second);
        assert!(verify_password("same-password", &first).expect("verify should succeed"));
        assert!(verify_password("same-password", &second).expect("verify should succeed"));
    }

    #[test]
    fn test_empty_password_rejected() {
        assert_matches!(hash_password(""), Err(Error::EmptyPassword));
    }

    #[test]
    fn test_malformed_hash_is_error_not_mismatch() {
        assert_matches!(
            verify_password("password", "not-a-phc-string"),
            Err(Error::HashingFailure(_))
        );
        assert_matches!(verify_password("password", ""), Err(Error::HashingFailure(_)));
    }

    #[test]
    fn test_truncated_hash_is_error_not_mismatch() {
        let hash = hash_password("hunter22").expect("hashing should succeed");
        let without_output = &hash[..hash.rfind('$').expect("PHC string has segments")];

        assert_matches!(
            verify_password("hunter22", without_output),
            Err(Error::HashingFailure(_))
        );
        assert_matches!(
            verify_password("hunter22", "$argon2id$v=19$m=19456,t=2,p=1"),
            Err(Error::HashingFailure(_))
        );
    }

    #[test]
    fn test_unsupported_algorithm_is_error() {
        // Well-formed PHC string for an algorithm Argon2 does not implement.
        let pbkdf2 = concat!(
            "$pbkdf2-sha256$i=600000$c2FsdHNhbHQ$",
            "7yZ3B2u4vP0r9o6mW9n3YjY0hR3f5lq2pS9w7tF0c8A"
        );
        assert_matches!(
            verify_password("password", pbkdf2),
            Err(Error::HashingFailure(_))
        );
    }
}
