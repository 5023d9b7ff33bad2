// crates/nfr-forge-core/src/core/hashing.rs
// ============================================================================
// Module: NFR Forge Suite Digests
// Description: Canonical JSON digests for generated test suites.
// Purpose: Give enhancement stamps a stable, replayable content hash.
// Dependencies: serde, serde_jcs, sha2
// ============================================================================

//! ## Overview
//! Enhancement stamps record a SHA-256 digest over the RFC 8785 (JCS)
//! canonical JSON form of the generated test-case list. Canonicalization
//! makes the digest independent of field ordering and whitespace, so the same
//! challenge always stamps identically across runs and serializer versions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;
use thiserror::Error;

// ============================================================================
// SECTION: Suite Digest
// ============================================================================

/// SHA-256 digest of a canonical-JSON test suite, hex encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuiteDigest(String);

impl SuiteDigest {
    /// Computes the digest of a serializable suite value.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Canonicalization`] when serialization fails.
    pub fn compute<T: Serialize + ?Sized>(suite: &T) -> Result<Self, HashError> {
        let bytes =
            serde_jcs::to_vec(suite).map_err(|err| HashError::Canonicalization(err.to_string()))?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(Self(hex_encode(&hasher.finalize())))
    }

    /// Returns the digest as a lowercase hex string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SuiteDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when computing suite digests.
#[derive(Debug, Error)]
pub enum HashError {
    /// JSON canonicalization failed.
    #[error("failed to canonicalize json: {0}")]
    Canonicalization(String),
}

// ============================================================================
// SECTION: Hex Encoding
// ============================================================================

/// Encodes bytes as a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}
