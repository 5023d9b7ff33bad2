// crates/nfr-forge-core/src/core/baseline.rs
// ============================================================================
// Module: NFR Forge Baseline Metrics
// Description: Structured numeric baseline and domain archetypes.
// Purpose: Hold the synthesized baseline context consumed by all generators.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! The baseline is derived exactly once per synthesis run from the
//! challenge's free-text requirement fields, then treated as immutable input
//! by every scenario generator. The archetype drives which row of the
//! multiplier table applies and how strict the durability policy is.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ChallengeId;

// ============================================================================
// SECTION: Baseline Metrics
// ============================================================================

/// Structured numeric baseline derived from a challenge's free-text fields.
///
/// # Invariants
/// - `base_rps` and `target_p99_ms` are positive.
/// - `read_ratio` lies in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineMetrics {
    /// Challenge the baseline was derived from.
    pub challenge_id: ChallengeId,
    /// Steady-state requests per second.
    pub base_rps: f64,
    /// Fraction of requests that are reads, in `0.0..=1.0`.
    pub read_ratio: f64,
    /// Target P99 latency in milliseconds.
    pub target_p99_ms: f64,
    /// Inferred domain archetype.
    pub archetype: DomainArchetype,
}

// ============================================================================
// SECTION: Domain Archetype
// ============================================================================

/// Inferred domain category of a system-design challenge.
///
/// # Invariants
/// - Classification always resolves to exactly one variant; [`Self::General`]
///   is the fallback when no keyword family matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainArchetype {
    /// Social feeds and timelines.
    Social,
    /// E-commerce, payments, and checkout flows.
    Ecommerce,
    /// Video and live streaming.
    Streaming,
    /// Search and indexing systems.
    Search,
    /// Messaging, chat, and real-time delivery.
    Messaging,
    /// Anything without a recognized domain keyword.
    General,
}

impl DomainArchetype {
    /// All archetypes in classification priority order.
    pub const ALL: [Self; 6] =
        [Self::Social, Self::Ecommerce, Self::Streaming, Self::Search, Self::Messaging, Self::General];

    /// Returns a stable snake_case label for the archetype.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Social => "social",
            Self::Ecommerce => "ecommerce",
            Self::Streaming => "streaming",
            Self::Search => "search",
            Self::Messaging => "messaging",
            Self::General => "general",
        }
    }

    /// Returns true when the archetype carries a zero-data-loss expectation.
    ///
    /// Commerce and messaging systems treat lost writes as broken promises
    /// to users; the rest tolerate a bounded loss window.
    #[must_use]
    pub const fn is_loss_critical(self) -> bool {
        matches!(self, Self::Ecommerce | Self::Messaging)
    }
}

impl fmt::Display for DomainArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
