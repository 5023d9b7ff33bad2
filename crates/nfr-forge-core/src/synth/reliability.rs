// crates/nfr-forge-core/src/synth/reliability.rs
// ============================================================================
// Module: NFR Forge Reliability Generator
// Description: Fault-injection scenarios for cascading and gray failures.
// Purpose: Emit degrade-don't-die test cases with declarative faults.
// Dependencies: crate::core, crate::synth
// ============================================================================

//! ## Overview
//! Two failure modes matter most in review: the total cache flush that lets a
//! thundering herd through to storage, and the gray failure where one
//! dependency quietly slows down. The cascade may degrade hard as long as the
//! system survives; the gray failure is partial and must be contained, so its
//! thresholds are tighter. Faults are declarative descriptors for a
//! downstream harness; nothing is executed here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::BaselineMetrics;
use crate::core::FaultInjection;
use crate::core::FaultKind;
use crate::core::PassCriteria;
use crate::core::RequirementTag;
use crate::core::TestCase;
use crate::core::TestCategory;
use crate::core::TrafficShape;
use crate::synth::TEST_DURATION_SECS;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Offset into the window when reliability faults trigger, in seconds.
const FAULT_AT_SECS: u64 = 60;
/// Added latency injected on one dependency for the gray failure, in ms.
const GRAY_ADDED_LATENCY_MS: f64 = 100.0;

/// Name of the cascading-failure test case.
pub const CASCADE_NAME: &str = "cascading cache failure";
/// Name of the gray-failure test case.
pub const GRAY_FAILURE_NAME: &str = "gray dependency failure";

// ============================================================================
// SECTION: Reliability Synthesis
// ============================================================================

/// Derives the cascading-failure and gray-failure test cases.
#[must_use]
pub fn synthesize_reliability(baseline: &BaselineMetrics) -> Vec<TestCase> {
    let traffic = TrafficShape {
        rps: baseline.base_rps,
        read_ratio: baseline.read_ratio,
        duration_secs: TEST_DURATION_SECS,
    };

    let cascade = TestCase {
        name: CASCADE_NAME.to_string(),
        category: TestCategory::Reliability,
        requirement: RequirementTag::new("NFR-REL-1"),
        description: format!(
            "Survive a full cache flush at {FAULT_AT_SECS}s: degrade, don't die, while the cache refills.",
        ),
        traffic,
        fault: Some(FaultInjection {
            kind: FaultKind::CacheFlush,
            at_secs: FAULT_AT_SECS,
            recovery_secs: None,
            magnitude_ms: None,
        }),
        pass_criteria: PassCriteria {
            max_p99_ms: Some(baseline.target_p99_ms * 3.0),
            max_error_rate: Some(0.05),
            min_availability: Some(0.95),
            ..PassCriteria::default()
        },
    };

    let gray = TestCase {
        name: GRAY_FAILURE_NAME.to_string(),
        category: TestCategory::Reliability,
        requirement: RequirementTag::new("NFR-REL-2"),
        description: format!(
            "Contain a gray failure: one dependency gains {GRAY_ADDED_LATENCY_MS} ms of latency at \
             {FAULT_AT_SECS}s and must not drag the whole system down.",
        ),
        traffic,
        fault: Some(FaultInjection {
            kind: FaultKind::DependencyLatency,
            at_secs: FAULT_AT_SECS,
            recovery_secs: None,
            magnitude_ms: Some(GRAY_ADDED_LATENCY_MS),
        }),
        pass_criteria: PassCriteria {
            max_p99_ms: Some(baseline.target_p99_ms * 2.0),
            max_error_rate: Some(0.02),
            min_availability: Some(0.99),
            ..PassCriteria::default()
        },
    };

    vec![cascade, gray]
}
