// crates/nfr-forge-core/src/core/mod.rs
// ============================================================================
// Module: NFR Forge Core Data Model
// Description: Challenge, baseline, multiplier, and test-case types.
// Purpose: Define the canonical data model shared by synthesizers and tools.
// Dependencies: crate::core::{baseline, challenge, hashing, identifiers,
//   multipliers, testcase}
// ============================================================================

//! ## Overview
//! The core data model: challenge specifications supplied by content authors,
//! the numeric baseline derived from them, the static multiplier table, and
//! the declarative test cases and hints the synthesizers emit. All types are
//! plain serde values; JSON is the natural on-disk form.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod baseline;
pub mod challenge;
pub mod hashing;
pub mod identifiers;
pub mod multipliers;
pub mod testcase;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use baseline::BaselineMetrics;
pub use baseline::DomainArchetype;
pub use challenge::ChallengeSpec;
pub use challenge::EnhancementStamp;
pub use challenge::RemediationHint;
pub use challenge::RequirementFields;
pub use hashing::HashError;
pub use hashing::SuiteDigest;
pub use identifiers::ChallengeId;
pub use identifiers::RequirementTag;
pub use multipliers::MultiplierError;
pub use multipliers::MultiplierTable;
pub use multipliers::ScaleShape;
pub use multipliers::TrafficMultipliers;
pub use testcase::FaultInjection;
pub use testcase::FaultKind;
pub use testcase::PassCriteria;
pub use testcase::TestCase;
pub use testcase::TestCategory;
pub use testcase::TrafficShape;
