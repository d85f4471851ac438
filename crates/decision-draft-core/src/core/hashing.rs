// crates/decision-draft-core/src/core/hashing.rs
// ============================================================================
// Module: Canonical Hashing
// Description: RFC 8785 canonical JSON hashing for draft snapshots.
// Purpose: Give stored versions a stable content fingerprint independent of
//          key order or numeric spelling.
// Dependencies: serde, serde_jcs, sha2, thiserror
// ============================================================================

//! ## Overview
//! Version snapshots are fingerprinted by hashing their canonical JSON form
//! (RFC 8785), so two snapshots with identical content hash identically
//! regardless of map ordering or numeric representation. Non-finite floats
//! cannot be canonicalized and are rejected rather than coerced.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::fmt::Write as _;

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;
use thiserror::Error;

use crate::core::step::DecisionStep;

// ============================================================================
// SECTION: Hash Algorithm
// ============================================================================

/// Default algorithm for snapshot fingerprints.
pub const DEFAULT_HASH_ALGORITHM: HashAlgorithm = HashAlgorithm::Sha256;

/// Supported content-hash algorithms.
///
/// # Invariants
/// - Variants are stable for serialization and digest labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    /// SHA-256.
    Sha256,
}

impl HashAlgorithm {
    /// Returns the stable label for this algorithm.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

// ============================================================================
// SECTION: Hash Digest
// ============================================================================

/// Content-hash digest with its producing algorithm.
///
/// # Invariants
/// - `hex` is the lowercase hexadecimal encoding of the digest bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashDigest {
    /// Algorithm that produced the digest.
    pub algorithm: HashAlgorithm,
    /// Lowercase hexadecimal digest.
    pub hex: String,
}

impl fmt::Display for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm.as_str(), self.hex)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while canonicalizing or hashing content.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Canonical JSON serialization failed (for example, non-finite floats).
    #[error("canonical json serialization failed: {0}")]
    Canonicalization(String),
}

// ============================================================================
// SECTION: Hashing Functions
// ============================================================================

/// Serializes a value into RFC 8785 canonical JSON bytes.
///
/// # Errors
///
/// Returns [`HashError::Canonicalization`] when the value cannot be
/// represented in canonical JSON.
pub fn canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, HashError> {
    serde_jcs::to_vec(value).map_err(|err| HashError::Canonicalization(err.to_string()))
}

/// Hashes raw bytes with the given algorithm.
#[must_use]
pub fn hash_bytes(algorithm: HashAlgorithm, bytes: &[u8]) -> HashDigest {
    match algorithm {
        HashAlgorithm::Sha256 => {
            let digest = Sha256::digest(bytes);
            let mut hex = String::with_capacity(digest.len() * 2);
            for byte in digest {
                // Writing into a String cannot fail; ignore the fmt result.
                let _ = write!(hex, "{byte:02x}");
            }
            HashDigest {
                algorithm,
                hex,
            }
        }
    }
}

/// Hashes a value's canonical JSON form.
///
/// # Errors
///
/// Returns [`HashError::Canonicalization`] when the value cannot be
/// represented in canonical JSON.
pub fn hash_canonical_json<T: Serialize>(
    algorithm: HashAlgorithm,
    value: &T,
) -> Result<HashDigest, HashError> {
    let bytes = canonical_json_bytes(value)?;
    Ok(hash_bytes(algorithm, &bytes))
}

/// Fingerprints an ordered step snapshot with the default algorithm.
///
/// # Errors
///
/// Returns [`HashError::Canonicalization`] when a step carries values that
/// cannot be represented in canonical JSON.
pub fn snapshot_hash(steps: &[DecisionStep]) -> Result<HashDigest, HashError> {
    hash_canonical_json(DEFAULT_HASH_ALGORITHM, &steps)
}
