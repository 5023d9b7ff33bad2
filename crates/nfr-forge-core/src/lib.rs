// crates/nfr-forge-core/src/lib.rs
// ============================================================================
// Module: NFR Forge Core Library
// Description: Public API surface for the NFR Forge synthesis engine.
// Purpose: Expose the challenge data model and the test-suite synthesizers.
// Dependencies: crate::{core, synth}
// ============================================================================

//! ## Overview
//! NFR Forge core derives complete non-functional-requirement test suites
//! from free-text system-design challenge specifications. Every operation is
//! a pure function of its inputs: extraction and classification build a
//! numeric baseline, independent scenario generators emit declarative test
//! cases, and the orchestrator merges results into a new challenge value
//! without mutating the original.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod synth;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::*;

pub use synth::BaselineDefaults;
pub use synth::ENGINE_VERSION;
pub use synth::TEST_DURATION_SECS;
pub use synth::classify;
pub use synth::enhance;
pub use synth::extract;
pub use synth::synthesize_distribution;
pub use synth::synthesize_durability;
pub use synth::synthesize_hints;
pub use synth::synthesize_latency;
pub use synth::synthesize_reliability;
pub use synth::synthesize_scalability;
pub use synth::try_enhance;
