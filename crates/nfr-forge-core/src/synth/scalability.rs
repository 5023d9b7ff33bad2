// crates/nfr-forge-core/src/synth/scalability.rs
// ============================================================================
// Module: NFR Forge Scalability Generator
// Description: Traffic-multiplier load scenarios per domain archetype.
// Purpose: Emit peak-hour, viral, and seasonal load test cases.
// Dependencies: crate::core, crate::synth
// ============================================================================

//! ## Overview
//! Each archetype scales differently: a social feed's viral spike dwarfs an
//! e-commerce one, but commerce peaks harder seasonally. The generator
//! multiplies the baseline RPS by the injected table's row and loosens pass
//! criteria monotonically with shape severity: a stricter shape never gets a
//! looser threshold than a less severe one.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::BaselineMetrics;
use crate::core::MultiplierTable;
use crate::core::PassCriteria;
use crate::core::RequirementTag;
use crate::core::ScaleShape;
use crate::core::TestCase;
use crate::core::TestCategory;
use crate::core::TrafficShape;
use crate::synth::TEST_DURATION_SECS;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Read-ratio push applied during viral spikes.
///
/// Everyone watching, nobody posting: spikes skew read-heavy.
const VIRAL_READ_PUSH: f64 = 0.08;
/// Read-ratio ceiling during viral spikes.
const VIRAL_READ_CEILING: f64 = 0.98;

/// Name of the peak-hour test case.
pub const PEAK_HOUR_NAME: &str = "peak hour surge";
/// Name of the viral-spike test case.
pub const VIRAL_NAME: &str = "viral spike";
/// Name of the seasonal-surge test case.
pub const SEASONAL_NAME: &str = "seasonal surge";

/// Per-shape pass-criteria thresholds.
struct ScaleThresholds {
    /// Multiplier on the target P99 ceiling.
    latency_headroom: f64,
    /// Maximum tolerated error rate.
    max_error_rate: f64,
    /// Minimum required availability.
    min_availability: f64,
}

/// Thresholds loosen monotonically: peak, then seasonal, then viral.
const fn thresholds_for(shape: ScaleShape) -> ScaleThresholds {
    match shape {
        ScaleShape::PeakHour => ScaleThresholds {
            latency_headroom: 1.5,
            max_error_rate: 0.01,
            min_availability: 0.999,
        },
        ScaleShape::Seasonal => ScaleThresholds {
            latency_headroom: 2.0,
            max_error_rate: 0.02,
            min_availability: 0.99,
        },
        ScaleShape::Viral => ScaleThresholds {
            latency_headroom: 3.0,
            max_error_rate: 0.05,
            min_availability: 0.95,
        },
    }
}

// ============================================================================
// SECTION: Scalability Synthesis
// ============================================================================

/// Derives the three scalability test cases from the baseline and table.
///
/// `rps` is exactly `base_rps` times the archetype's factor for each shape.
#[must_use]
pub fn synthesize_scalability(baseline: &BaselineMetrics, table: &MultiplierTable) -> Vec<TestCase> {
    let row = table.row(baseline.archetype);
    vec![
        scale_case(baseline, ScaleShape::PeakHour, row.peak_hour),
        scale_case(baseline, ScaleShape::Viral, row.viral),
        scale_case(baseline, ScaleShape::Seasonal, row.seasonal),
    ]
}

/// Builds one scalability case for the given shape and factor.
fn scale_case(baseline: &BaselineMetrics, shape: ScaleShape, factor: f64) -> TestCase {
    let rps = baseline.base_rps * factor;
    let read_ratio = match shape {
        ScaleShape::Viral => (baseline.read_ratio + VIRAL_READ_PUSH).min(VIRAL_READ_CEILING),
        ScaleShape::PeakHour | ScaleShape::Seasonal => baseline.read_ratio,
    };
    let (name, tag) = match shape {
        ScaleShape::PeakHour => (PEAK_HOUR_NAME, "NFR-SCALE-1"),
        ScaleShape::Viral => (VIRAL_NAME, "NFR-SCALE-2"),
        ScaleShape::Seasonal => (SEASONAL_NAME, "NFR-SCALE-3"),
    };
    let thresholds = thresholds_for(shape);

    TestCase {
        name: name.to_string(),
        category: TestCategory::Scalability,
        requirement: RequirementTag::new(tag),
        description: format!(
            "Absorb the {} {shape} load of {rps} RPS ({factor}x baseline) without breaching thresholds.",
            baseline.archetype
        ),
        traffic: TrafficShape {
            rps,
            read_ratio,
            duration_secs: TEST_DURATION_SECS,
        },
        fault: None,
        pass_criteria: PassCriteria {
            max_p99_ms: Some(baseline.target_p99_ms * thresholds.latency_headroom),
            max_error_rate: Some(thresholds.max_error_rate),
            min_availability: Some(thresholds.min_availability),
            ..PassCriteria::default()
        },
    }
}
