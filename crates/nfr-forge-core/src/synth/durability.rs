// crates/nfr-forge-core/src/synth/durability.rs
// ============================================================================
// Module: NFR Forge Durability Generator
// Description: Database-crash recovery scenario with archetype criticality.
// Purpose: Emit the durability test case with RPO/RTO pass criteria.
// Dependencies: crate::core, crate::synth
// ============================================================================

//! ## Overview
//! Durability policy is classified from the archetype: commerce and messaging
//! systems promise users their writes stick (RPO zero, fast recovery), while
//! a stale feed entry or search result is survivable (bounded loss window,
//! relaxed availability bar). The scenario crashes the database mid-window
//! and expects recovery by a fixed offset.

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

/// Offset when the database crashes, in seconds.
const CRASH_AT_SECS: u64 = 60;
/// Offset when the database recovers, in seconds.
const RECOVERY_AT_SECS: u64 = 120;
/// Tolerated loss window for lenient archetypes, in seconds.
const LENIENT_LOSS_WINDOW_SECS: u64 = 300;

/// Name of the durability test case.
pub const DURABILITY_NAME: &str = "database crash recovery";

// ============================================================================
// SECTION: Durability Synthesis
// ============================================================================

/// Derives the durability test case from the baseline.
///
/// Loss-critical archetypes (commerce, messaging) demand zero data loss and
/// recovery within the crash-to-recovery window; the rest tolerate a bounded
/// loss window with a relaxed availability bar.
#[must_use]
pub fn synthesize_durability(baseline: &BaselineMetrics) -> TestCase {
    let critical = baseline.archetype.is_loss_critical();
    let pass_criteria = if critical {
        PassCriteria {
            min_availability: Some(0.999),
            max_error_rate: Some(0.001),
            max_downtime_secs: Some(RECOVERY_AT_SECS - CRASH_AT_SECS),
            max_data_loss_secs: Some(0),
            ..PassCriteria::default()
        }
    } else {
        PassCriteria {
            min_availability: Some(0.99),
            max_error_rate: Some(0.01),
            max_downtime_secs: Some(LENIENT_LOSS_WINDOW_SECS),
            max_data_loss_secs: Some(LENIENT_LOSS_WINDOW_SECS),
            ..PassCriteria::default()
        }
    };
    let policy = if critical {
        "zero data loss"
    } else {
        "a bounded loss window"
    };

    TestCase {
        name: DURABILITY_NAME.to_string(),
        category: TestCategory::Durability,
        requirement: RequirementTag::new("NFR-DUR-1"),
        description: format!(
            "Database crashes at {CRASH_AT_SECS}s and recovers at {RECOVERY_AT_SECS}s; a {} system \
             must come back with {policy}.",
            baseline.archetype
        ),
        traffic: TrafficShape {
            rps: baseline.base_rps,
            read_ratio: baseline.read_ratio,
            duration_secs: TEST_DURATION_SECS,
        },
        fault: Some(FaultInjection {
            kind: FaultKind::DatabaseCrash,
            at_secs: CRASH_AT_SECS,
            recovery_secs: Some(RECOVERY_AT_SECS),
            magnitude_ms: None,
        }),
        pass_criteria,
    }
}
