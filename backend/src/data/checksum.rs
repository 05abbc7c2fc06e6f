//! Checksum calculation for dataset identity.

use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of raw dataset content.
///
/// # Arguments
/// * `content` - Raw bytes of the dataset file
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash. The dashboard
/// reports it so operators can tell which CSV revision is being served.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    hex::encode(result)
}
