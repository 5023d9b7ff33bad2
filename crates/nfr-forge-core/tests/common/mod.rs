// crates/nfr-forge-core/tests/common/mod.rs
// ============================================================================
// Module: Core Test Helpers
// Description: Shared builders for synthesis test fixtures.
// Purpose: Keep challenge construction in one place across test files.
// ============================================================================

//! Shared fixtures for nfr-forge-core integration tests.

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use nfr_forge_core::ChallengeId;
use nfr_forge_core::ChallengeSpec;
use nfr_forge_core::RequirementFields;

/// Builds a challenge with the given text fields and nothing else.
#[must_use]
pub fn challenge(title: &str, description: &str, traffic: &str, latency: &str) -> ChallengeSpec {
    ChallengeSpec {
        id: ChallengeId::new("test-challenge"),
        title: title.to_string(),
        description: description.to_string(),
        requirements: Vec::new(),
        requirement_fields: RequirementFields {
            traffic: traffic.to_string(),
            latency: latency.to_string(),
            availability: String::new(),
            budget: String::new(),
        },
        test_cases: Vec::new(),
        hints: Vec::new(),
        enhancement: None,
    }
}

/// Builds the social-feed challenge from the worked example.
#[must_use]
pub fn social_feed() -> ChallengeSpec {
    challenge("Social Feed", "social timeline app", "1000 RPS", "p99 < 200")
}
