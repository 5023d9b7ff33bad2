// crates/nfr-forge-core/src/core/challenge.rs
// ============================================================================
// Module: NFR Forge Challenge Specification
// Description: Author-supplied challenge records and enhancement results.
// Purpose: Define the canonical challenge shape read and returned by the
//   engine.
// Dependencies: crate::core::{hashing, identifiers, testcase}, serde
// ============================================================================

//! ## Overview
//! A challenge specification is the author-supplied input: a title, a prose
//! description, functional requirements, and free-text requirement fields.
//! The engine reads it, synthesizes an NFR test suite, and returns a new
//! value carrying the merged suite plus an [`EnhancementStamp`] so repeated
//! enhancement is a no-op. The input value is never mutated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::hashing::SuiteDigest;
use crate::core::identifiers::ChallengeId;
use crate::core::testcase::TestCase;

// ============================================================================
// SECTION: Challenge Specification
// ============================================================================

/// Author-supplied system-design challenge specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeSpec {
    /// Challenge identifier.
    pub id: ChallengeId,
    /// Challenge title.
    pub title: String,
    /// Free-text challenge description.
    pub description: String,
    /// Functional requirement statements, extended with derived NFR lines.
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Free-text quality requirement fields.
    #[serde(default)]
    pub requirement_fields: RequirementFields,
    /// Existing test cases, extended with the generated suite.
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    /// Existing remediation hints, extended with generated hints.
    #[serde(default)]
    pub hints: Vec<RemediationHint>,
    /// Present once the challenge has been enhanced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhancement: Option<EnhancementStamp>,
}

/// Free-text quality requirement fields written by content authors.
///
/// None of these fields is guaranteed well-formed; extraction falls back to
/// defaults rather than rejecting authoring input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequirementFields {
    /// Traffic description, for example "1000 RPS, mostly reads".
    #[serde(default)]
    pub traffic: String,
    /// Latency target, for example "p99 < 200ms".
    #[serde(default)]
    pub latency: String,
    /// Availability expectation prose.
    #[serde(default)]
    pub availability: String,
    /// Infrastructure budget prose.
    #[serde(default)]
    pub budget: String,
}

// ============================================================================
// SECTION: Enhancement Stamp
// ============================================================================

/// Marker recorded on an enhanced challenge.
///
/// The stamp replaces id-suffix conventions as the idempotency guard: its
/// presence alone means the challenge already carries a generated suite.
///
/// # Invariants
/// - `engine_version` identifies the generator that produced the suite.
/// - `suite_digest` is the canonical JSON digest of the generated test cases
///   at enhancement time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancementStamp {
    /// Version of the synthesis engine that produced the suite.
    pub engine_version: String,
    /// Canonical digest of the generated test-case list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite_digest: Option<SuiteDigest>,
}

// ============================================================================
// SECTION: Remediation Hints
// ============================================================================

/// Diagnostic guidance keyed to a generated test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationHint {
    /// Substring matched against a failing test case's name.
    pub trigger: String,
    /// Human-readable remediation guidance.
    pub message: String,
}

impl RemediationHint {
    /// Creates a hint for the given trigger pattern.
    #[must_use]
    pub fn new(trigger: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            message: message.into(),
        }
    }

    /// Returns true when the hint applies to the named test case.
    #[must_use]
    pub fn matches(&self, test_name: &str) -> bool {
        test_name.contains(&self.trigger)
    }
}
