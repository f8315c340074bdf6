//! Content fingerprints for trees.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::TreeError;

/// SHA-256 hex digest of the RFC 8785 (JCS) form of `value`.
///
/// Key order and number formatting do not affect the result, so two trees
/// that compare equal always share a fingerprint.
pub fn fingerprint<T: Serialize>(value: &T) -> Result<String, TreeError> {
    let jcs_bytes = serde_json_canonicalizer::to_vec(value)
        .map_err(|e| TreeError::Canonicalize(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(&jcs_bytes);
    Ok(hex::encode(hasher.finalize()))
}
