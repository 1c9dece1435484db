use rand::RngCore;
use sha2::{Digest, Sha256};

const SALT_LENGTH_IN_BYTES: usize = 16;

/// Hash a password with a fresh random salt, encoded as `salt$digest`.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LENGTH_IN_BYTES];
    rand::rng().fill_bytes(&mut salt);
    let salt = hex::encode(salt);
    let digest = compute_digest(&salt, password);

    format!("{salt}${digest}")
}

/// Check a password against a stored `salt$digest` value.
/// A malformed stored value never matches.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match stored_hash.split_once('$') {
        Some((salt, expected_digest)) => compute_digest(salt, password) == expected_digest,
        None => false,
    }
}

fn compute_digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());

    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_verify_hashed_password() {
        let hash = hash_password("securepass123");

        assert!(verify_password("securepass123", &hash));
    }

    #[test]
    fn should_reject_wrong_password() {
        let hash = hash_password("securepass123");

        assert!(!verify_password("strongpass456", &hash));
    }

    #[test]
    fn should_salt_each_hash_differently() {
        let first = hash_password("securepass123");
        let second = hash_password("securepass123");

        assert_ne!(first, second);
    }

    #[test]
    fn should_reject_malformed_stored_hash() {
        assert!(!verify_password("securepass123", "not-a-salted-digest"));
    }
}
