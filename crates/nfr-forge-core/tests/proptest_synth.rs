// crates/nfr-forge-core/tests/proptest_synth.rs
// ============================================================================
// Module: Synthesis Property-Based Tests
// Description: Property tests for ladder monotonicity and parser stability.
// Purpose: Detect panics and invariant breaks across wide input ranges.
// ============================================================================

//! Property-based tests for synthesis invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use nfr_forge_core::BaselineDefaults;
use nfr_forge_core::BaselineMetrics;
use nfr_forge_core::ChallengeId;
use nfr_forge_core::DomainArchetype;
use nfr_forge_core::MultiplierTable;
use nfr_forge_core::classify;
use nfr_forge_core::extract;
use nfr_forge_core::synthesize_latency;
use nfr_forge_core::synthesize_scalability;
use proptest::prelude::*;

mod common;

/// Builds a baseline directly with the given numbers.
fn baseline(base_rps: f64, target_p99_ms: f64, archetype: DomainArchetype) -> BaselineMetrics {
    BaselineMetrics {
        challenge_id: ChallengeId::new("prop-challenge"),
        base_rps,
        read_ratio: 1.0,
        target_p99_ms,
        archetype,
    }
}

/// Strategy over every archetype.
fn archetype_strategy() -> impl Strategy<Value = DomainArchetype> {
    prop_oneof![
        Just(DomainArchetype::Social),
        Just(DomainArchetype::Ecommerce),
        Just(DomainArchetype::Streaming),
        Just(DomainArchetype::Search),
        Just(DomainArchetype::Messaging),
        Just(DomainArchetype::General),
    ]
}

proptest! {
    #[test]
    fn percentile_ladder_is_monotone(target in 0.001_f64 .. 1.0e9) {
        let cases = synthesize_latency(&baseline(100.0, target, DomainArchetype::General));
        let profile = &cases[0].pass_criteria;
        let ladder = [
            profile.max_p50_ms.unwrap(),
            profile.max_p90_ms.unwrap(),
            profile.max_p95_ms.unwrap(),
            profile.max_p99_ms.unwrap(),
            profile.max_p999_ms.unwrap(),
        ];
        for pair in ladder.windows(2) {
            prop_assert!(pair[0] <= pair[1], "ladder not monotone for target {}", target);
        }
        prop_assert_eq!(profile.max_p99_ms, Some(target));
    }

    #[test]
    fn scale_rps_is_exactly_base_times_factor(
        base_rps in 1.0_f64 .. 1.0e7,
        archetype in archetype_strategy(),
    ) {
        let table = MultiplierTable::default();
        let row = table.row(archetype);
        let cases = synthesize_scalability(&baseline(base_rps, 100.0, archetype), &table);
        prop_assert_eq!(cases[0].traffic.rps, base_rps * row.peak_hour);
        prop_assert_eq!(cases[1].traffic.rps, base_rps * row.viral);
        prop_assert_eq!(cases[2].traffic.rps, base_rps * row.seasonal);
    }

    #[test]
    fn extraction_never_panics_on_arbitrary_text(
        traffic in ".*",
        latency in ".*",
    ) {
        let spec = common::challenge("Fuzz", "fuzz", &traffic, &latency);
        let metrics =
            extract(&spec, &BaselineDefaults::default(), DomainArchetype::General);
        prop_assert!(metrics.base_rps > 0.0);
        prop_assert!(metrics.target_p99_ms > 0.0);
        prop_assert!((0.0 ..= 1.0).contains(&metrics.read_ratio));
    }

    #[test]
    fn classification_is_total_on_arbitrary_text(
        title in ".*",
        description in ".*",
    ) {
        let spec = common::challenge(&title, &description, "", "");
        let first = classify(&spec);
        let second = classify(&spec);
        prop_assert_eq!(first, second);
    }
}
