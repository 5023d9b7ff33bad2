// crates/nfr-forge-core/src/synth/distribution.rs
// ============================================================================
// Module: NFR Forge Distribution Generator
// Description: Traffic-skew scenarios for power-law and hot-partition load.
// Purpose: Emit skew test cases that expose caching and sharding defects.
// Dependencies: crate::core, crate::synth
// ============================================================================

//! ## Overview
//! Real traffic is never uniform. The power-law case drives an 80/20 access
//! skew at baseline RPS with a strict pass bar: skew makes caching trivially
//! effective, so failing it implies a caching defect, not a capacity problem.
//! The hot-partition case raises RPS modestly to model one shard absorbing
//! disproportionate load, tolerating local slowdown without global impact.

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

/// P99 headroom under power-law skew; near baseline by design.
const POWER_LAW_HEADROOM: f64 = 1.1;
/// RPS factor for the hot-partition case.
const HOT_PARTITION_FACTOR: f64 = 1.5;
/// P99 headroom for the hot-partition case.
const HOT_PARTITION_HEADROOM: f64 = 1.5;

/// Name of the power-law skew test case.
pub const POWER_LAW_NAME: &str = "power-law access skew";
/// Name of the hot-partition test case.
pub const HOT_PARTITION_NAME: &str = "hot partition";

// ============================================================================
// SECTION: Distribution Synthesis
// ============================================================================

/// Derives the power-law and hot-partition test cases from the baseline.
#[must_use]
pub fn synthesize_distribution(baseline: &BaselineMetrics) -> Vec<TestCase> {
    let power_law = TestCase {
        name: POWER_LAW_NAME.to_string(),
        category: TestCategory::Distribution,
        requirement: RequirementTag::new("NFR-DIST-1"),
        description: format!(
            "80% of requests hit 20% of keys at {} RPS; skewed access should make caching \
             trivially effective, so latency must stay near baseline.",
            baseline.base_rps
        ),
        traffic: TrafficShape {
            rps: baseline.base_rps,
            read_ratio: baseline.read_ratio,
            duration_secs: TEST_DURATION_SECS,
        },
        fault: None,
        pass_criteria: PassCriteria {
            max_p99_ms: Some(baseline.target_p99_ms * POWER_LAW_HEADROOM),
            max_error_rate: Some(0.001),
            min_availability: Some(0.999),
            ..PassCriteria::default()
        },
    };

    let hot_partition = TestCase {
        name: HOT_PARTITION_NAME.to_string(),
        category: TestCategory::Distribution,
        requirement: RequirementTag::new("NFR-DIST-2"),
        description: format!(
            "One shard absorbs disproportionate load at {HOT_PARTITION_FACTOR}x baseline RPS; \
             local slowdown is acceptable, global impact is not.",
        ),
        traffic: TrafficShape {
            rps: baseline.base_rps * HOT_PARTITION_FACTOR,
            read_ratio: baseline.read_ratio,
            duration_secs: TEST_DURATION_SECS,
        },
        fault: None,
        pass_criteria: PassCriteria {
            max_p99_ms: Some(baseline.target_p99_ms * HOT_PARTITION_HEADROOM),
            max_error_rate: Some(0.01),
            min_availability: Some(0.99),
            ..PassCriteria::default()
        },
    };

    vec![power_law, hot_partition]
}
