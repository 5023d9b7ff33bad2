// crates/nfr-forge-core/src/core/identifiers.rs
// ============================================================================
// Module: NFR Forge Identifiers
// Description: Canonical opaque identifiers for challenges and requirements.
// Purpose: Provide strongly typed, serializable IDs with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the string-based identifiers used throughout NFR
//! Forge. Identifiers are opaque and serialize as strings. Validation is
//! handled at catalog boundaries rather than within these simple wrappers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Challenge identifier assigned by content authors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeId(String);

impl ChallengeId {
    /// Creates a new challenge identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ChallengeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ChallengeId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Requirement tag attached to a test case, for example `NFR-LAT-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementTag(String);

impl RequirementTag {
    /// Creates a new requirement tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequirementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for RequirementTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RequirementTag {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
