//! Password hashing with Argon2id.
//!
//! Hashes are PHC strings, so the algorithm parameters and salt travel with
//! the hash and verification needs nothing else.

use argon2::Argon2;
use once_cell::sync::Lazy;
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::error::AppResult;

/// Hash `password` with a fresh random salt.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string();
    Ok(hash)
}

/// Check `password` against a stored PHC hash.
///
/// A stored value that does not parse as a PHC string counts as a mismatch;
/// the caller cannot tell it apart from a wrong password.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        tracing::warn!("stored password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Hash checked when the username is unknown, so a failed login costs one
/// Argon2 verification whether or not the account exists.
static DUMMY_HASH: Lazy<Option<String>> = Lazy::new(|| hash_password("no-such-user").ok());

/// Spend the same work as [`verify_password`] without an account to check.
pub fn verify_dummy(password: &str) {
    match DUMMY_HASH.as_deref() {
        Some(hash) => {
            verify_password(password, hash);
        }
        None => tracing::warn!("dummy password hash unavailable"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_the_original_password() {
        let hash = hash_password("correct horse").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse", &hash));
        assert!(!verify_password("battery staple", &hash));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hash_password("pw").unwrap();
        let b = hash_password("pw").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn dummy_hash_is_a_real_argon2_hash() {
        verify_dummy("anything");
        let hash = DUMMY_HASH.as_deref().expect("dummy hash should be generated");
        let parsed = PasswordHash::new(hash).unwrap();
        assert_eq!(parsed.algorithm.as_str(), "argon2id");
        assert!(!verify_password("anything", hash));
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!verify_password("pw", "plaintext-password"));
        assert!(!verify_password("", ""));
    }
}
