// crates/nfr-forge-core/src/synth/latency.rs
// ============================================================================
// Module: NFR Forge Latency Profile Synthesizer
// Description: Percentile-ladder derivation from a single P99 target.
// Purpose: Emit steady-state and tail-amplification latency test cases.
// Dependencies: crate::core, crate::synth
// ============================================================================

//! ## Overview
//! Authors state one latency number: the P99 target. The synthesizer derives
//! the full percentile ladder from it by fixed ratios. The ratios guarantee
//! p50 <= p90 <= p95 <= p99 <= p99.9 for every positive target; anyone tuning
//! them must preserve that monotonicity.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::BaselineMetrics;
use crate::core::PassCriteria;
use crate::core::RequirementTag;
use crate::core::TestCase;
use crate::core::TestCategory;
use crate::core::TrafficShape;
use crate::synth::TEST_DURATION_SECS;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// P50 is one third of the P99 target.
const P50_DIVISOR: f64 = 3.0;
/// P90 factor relative to P99.
const P90_FACTOR: f64 = 0.7;
/// P95 factor relative to P99.
const P95_FACTOR: f64 = 0.85;
/// P99.9 factor relative to P99.
const P999_FACTOR: f64 = 2.0;
/// Looser P99 headroom for the tail-amplification check.
const TAIL_HEADROOM: f64 = 1.5;

/// Name of the full-ladder steady-state test case.
pub const STEADY_STATE_NAME: &str = "steady-state latency profile";
/// Name of the tail-amplification test case.
pub const TAIL_AMPLIFICATION_NAME: &str = "tail amplification";

// ============================================================================
// SECTION: Latency Synthesis
// ============================================================================

/// Derives the latency test cases from the baseline.
///
/// Emits the full-percentile steady-state case and a looser secondary check
/// on tail blow-up.
#[must_use]
pub fn synthesize_latency(baseline: &BaselineMetrics) -> Vec<TestCase> {
    let p99 = baseline.target_p99_ms;
    let traffic = TrafficShape {
        rps: baseline.base_rps,
        read_ratio: baseline.read_ratio,
        duration_secs: TEST_DURATION_SECS,
    };

    let profile = TestCase {
        name: STEADY_STATE_NAME.to_string(),
        category: TestCategory::Latency,
        requirement: RequirementTag::new("NFR-LAT-1"),
        description: format!(
            "Hold the full percentile ladder at the steady-state {} RPS for the whole window.",
            baseline.base_rps
        ),
        traffic,
        fault: None,
        pass_criteria: PassCriteria {
            max_p50_ms: Some(p99 / P50_DIVISOR),
            max_p90_ms: Some(p99 * P90_FACTOR),
            max_p95_ms: Some(p99 * P95_FACTOR),
            max_p99_ms: Some(p99),
            max_p999_ms: Some(p99 * P999_FACTOR),
            ..PassCriteria::default()
        },
    };

    let tail = TestCase {
        name: TAIL_AMPLIFICATION_NAME.to_string(),
        category: TestCategory::Latency,
        requirement: RequirementTag::new("NFR-LAT-2"),
        description: format!(
            "Secondary guard on tail blow-up: P99 stays within {TAIL_HEADROOM}x of the {p99} ms target.",
        ),
        traffic,
        fault: None,
        pass_criteria: PassCriteria {
            max_p99_ms: Some(p99 * TAIL_HEADROOM),
            ..PassCriteria::default()
        },
    };

    vec![profile, tail]
}
