use anyhow::{Result, anyhow};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a password with argon2 and a fresh random salt, returning the PHC
/// string for storage.
pub fn hash(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("failed to hash password: {e}"))?;
    Ok(hash.to_string())
}

/// Check a password against a stored PHC hash. An unparseable hash counts as
/// a mismatch.
pub fn verify(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_matching_password_only() {
        let hash = hash("hunter2").unwrap();
        assert!(verify("hunter2", &hash));
        assert!(!verify("hunter3", &hash));
        assert!(!verify("", &hash));
    }

    #[test]
    fn salts_are_unique_per_hash() {
        assert_ne!(hash("hunter2").unwrap(), hash("hunter2").unwrap());
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify("hunter2", "not-a-phc-string"));
    }
}
