//! Password digests for stored users.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hex digest of a plaintext password.
///
/// # Arguments
/// * `plaintext` - The password as received from the client
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn hash_password(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Check a plaintext password against a stored digest.
pub fn verify_password(plaintext: &str, hashed: &str) -> bool {
    hash_password(plaintext) == hashed
}
