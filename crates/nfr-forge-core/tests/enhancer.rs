// crates/nfr-forge-core/tests/enhancer.rs
// ============================================================================
// Module: Enhancement Orchestrator Tests
// Description: Suite merging, idempotency, and stamp behavior.
// Purpose: Ensure enhancement is pure, complete, and applied exactly once.
// ============================================================================

//! Orchestrator tests covering merging, stamping, and the idempotency guard.

use std::collections::BTreeSet;

use nfr_forge_core::BaselineDefaults;
use nfr_forge_core::ChallengeSpec;
use nfr_forge_core::MultiplierTable;
use nfr_forge_core::PassCriteria;
use nfr_forge_core::RequirementTag;
use nfr_forge_core::TestCase;
use nfr_forge_core::TestCategory;
use nfr_forge_core::TrafficShape;
use nfr_forge_core::enhance;
use nfr_forge_core::try_enhance;

mod common;

type TestResult = Result<(), String>;

/// Enhances with the default table and fallbacks.
fn enhance_default(spec: &ChallengeSpec) -> ChallengeSpec {
    enhance(spec, &MultiplierTable::default(), &BaselineDefaults::default())
}

/// Collects test-case names into an ordered set.
fn names(spec: &ChallengeSpec) -> BTreeSet<String> {
    spec.test_cases.iter().map(|case| case.name.clone()).collect()
}

#[test]
fn enhancement_appends_the_full_suite() -> TestResult {
    let spec = common::social_feed();
    let enhanced = enhance_default(&spec);

    // 2 latency + 3 scalability + 2 reliability + 1 durability + 2 distribution.
    if enhanced.test_cases.len() != 10 {
        return Err(format!("expected 10 generated cases, got {}", enhanced.test_cases.len()));
    }
    if enhanced.hints.len() != 10 {
        return Err(format!("expected 10 hints, got {}", enhanced.hints.len()));
    }
    if enhanced.requirements.len() != 5 {
        return Err(format!(
            "expected one derived requirement per category, got {}",
            enhanced.requirements.len()
        ));
    }
    if enhanced.enhancement.is_none() {
        return Err("enhanced challenge must carry a stamp".to_string());
    }
    Ok(())
}

#[test]
fn generated_names_are_unique() -> TestResult {
    let enhanced = enhance_default(&common::social_feed());
    if names(&enhanced).len() != enhanced.test_cases.len() {
        return Err("generated test names must be unique".to_string());
    }
    Ok(())
}

#[test]
fn every_hint_matches_a_generated_case() -> TestResult {
    let enhanced = enhance_default(&common::social_feed());
    for hint in &enhanced.hints {
        if !enhanced.test_cases.iter().any(|case| hint.matches(&case.name)) {
            return Err(format!("hint {} matches no generated case", hint.trigger));
        }
    }
    Ok(())
}

#[test]
fn input_value_is_never_mutated() -> TestResult {
    let spec = common::social_feed();
    let before = spec.clone();
    let _enhanced = enhance_default(&spec);
    if spec != before {
        return Err("enhancement must not mutate its input".to_string());
    }
    Ok(())
}

#[test]
fn double_enhancement_is_a_no_op() -> TestResult {
    let once = enhance_default(&common::social_feed());
    let twice = enhance_default(&once);
    if names(&once) != names(&twice) {
        return Err("re-enhancement must not change the test-name set".to_string());
    }
    if once != twice {
        return Err("re-enhancement must return the challenge unchanged".to_string());
    }
    Ok(())
}

#[test]
fn legacy_scalability_cases_trip_the_guard() -> TestResult {
    // A challenge enhanced by older tooling carries scalability cases but no
    // stamp; it must still be treated as already enhanced.
    let mut spec = common::social_feed();
    spec.test_cases.push(TestCase {
        name: "legacy load test".to_string(),
        category: TestCategory::Scalability,
        requirement: RequirementTag::new("NFR-S1"),
        description: "legacy generated case".to_string(),
        traffic: TrafficShape {
            rps: 2000.0,
            read_ratio: 1.0,
            duration_secs: 60,
        },
        fault: None,
        pass_criteria: PassCriteria::default(),
    });

    let enhanced = enhance_default(&spec);
    if enhanced != spec {
        return Err("pre-existing scalability cases must suppress generation".to_string());
    }
    Ok(())
}

#[test]
fn functional_cases_do_not_trip_the_guard() -> TestResult {
    let mut spec = common::social_feed();
    spec.test_cases.push(TestCase {
        name: "author functional check".to_string(),
        category: TestCategory::Functional,
        requirement: RequirementTag::new("FR-1"),
        description: "author-written case".to_string(),
        traffic: TrafficShape {
            rps: 100.0,
            read_ratio: 1.0,
            duration_secs: 60,
        },
        fault: None,
        pass_criteria: PassCriteria::default(),
    });

    let enhanced = enhance_default(&spec);
    // The author case is kept and the generated suite lands on top.
    if enhanced.test_cases.len() != 11 {
        return Err(format!("expected 11 cases, got {}", enhanced.test_cases.len()));
    }
    Ok(())
}

#[test]
fn stamp_digest_is_stable_across_runs() -> TestResult {
    let spec = common::social_feed();
    let table = MultiplierTable::default();
    let defaults = BaselineDefaults::default();
    let first = try_enhance(&spec, &table, &defaults).map_err(|err| err.to_string())?;
    let second = try_enhance(&spec, &table, &defaults).map_err(|err| err.to_string())?;

    let digest_of = |enhanced: &ChallengeSpec| -> Result<String, String> {
        let stamp = enhanced.enhancement.as_ref().ok_or("missing stamp")?;
        let digest = stamp.suite_digest.as_ref().ok_or("missing digest")?;
        Ok(digest.as_str().to_string())
    };
    if digest_of(&first)? != digest_of(&second)? {
        return Err("same input must stamp the same digest".to_string());
    }
    Ok(())
}

#[test]
fn derived_requirements_quote_the_scale_figures() -> TestResult {
    let enhanced = enhance_default(&common::social_feed());
    let scale_line = enhanced
        .requirements
        .iter()
        .find(|line| line.starts_with("NFR-SCALE"))
        .ok_or("missing derived scale requirement")?;
    for figure in ["3000", "10000", "5000"] {
        if !scale_line.contains(figure) {
            return Err(format!("scale requirement should quote {figure} RPS"));
        }
    }
    Ok(())
}
