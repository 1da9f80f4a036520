//! SHA-256 digest of artifact bytes.
//!
//! The digest is taken over the exact bytes written to disk, so a consumer
//! can pin a fixture file and detect any edit to it.

use sha2::{Digest, Sha256};

/// Lowercase 64-character hex SHA-256 of `bytes`.
pub fn digest_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
