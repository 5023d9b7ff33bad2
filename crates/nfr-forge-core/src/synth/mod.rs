// crates/nfr-forge-core/src/synth/mod.rs
// ============================================================================
// Module: NFR Forge Synthesis Engine
// Description: Extraction, classification, scenario generators, orchestration.
// Purpose: Derive complete NFR test suites from free-text challenge specs.
// Dependencies: crate::core, crate::synth::*
// ============================================================================

//! ## Overview
//! The synthesis engine is a one-way pipeline: raw challenge text flows
//! through extraction and classification into a [`crate::BaselineMetrics`]
//! value, the scenario generators each derive their test cases independently
//! from that baseline, and the orchestrator merges everything into a new
//! challenge value. Every function here is pure; the generators share no
//! state and may run in any order.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod classifier;
pub mod distribution;
pub mod durability;
pub mod enhancer;
pub mod extractor;
pub mod hints;
pub mod latency;
pub mod reliability;
pub mod scalability;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Test window length in seconds for every generated scenario.
///
/// Long enough for percentile estimates to be statistically meaningful; a
/// design constant, never derived from input.
pub const TEST_DURATION_SECS: u64 = 300;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use classifier::classify;
pub use distribution::synthesize_distribution;
pub use durability::synthesize_durability;
pub use enhancer::ENGINE_VERSION;
pub use enhancer::enhance;
pub use enhancer::try_enhance;
pub use extractor::BaselineDefaults;
pub use extractor::extract;
pub use hints::synthesize_hints;
pub use latency::synthesize_latency;
pub use reliability::synthesize_reliability;
pub use scalability::synthesize_scalability;
