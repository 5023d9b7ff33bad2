// crates/nfr-forge-core/tests/extractor.rs
// ============================================================================
// Module: Metrics Extractor Tests
// Description: Free-text parsing behavior and default fallbacks.
// Purpose: Ensure extraction never fails and falls back exactly as specified.
// ============================================================================

//! Extraction tests for RPS figures, write detection, and p99 targets.

use nfr_forge_core::BaselineDefaults;
use nfr_forge_core::DomainArchetype;
use nfr_forge_core::extract;

mod common;

type TestResult = Result<(), String>;

/// Extracts from the given traffic and latency text with default fallbacks.
fn extract_from(traffic: &str, latency: &str) -> nfr_forge_core::BaselineMetrics {
    let spec = common::challenge("Generic", "generic system", traffic, latency);
    extract(&spec, &BaselineDefaults::default(), DomainArchetype::General)
}

#[test]
fn empty_fields_yield_exact_defaults() -> TestResult {
    let baseline = extract_from("", "");
    if baseline.base_rps != 100.0 {
        return Err(format!("expected default base_rps 100, got {}", baseline.base_rps));
    }
    if baseline.read_ratio != 1.0 {
        return Err(format!("expected default read_ratio 1.0, got {}", baseline.read_ratio));
    }
    if baseline.target_p99_ms != 100.0 {
        return Err(format!("expected default p99 100, got {}", baseline.target_p99_ms));
    }
    Ok(())
}

#[test]
fn rps_figure_is_parsed_case_insensitively() -> TestResult {
    for traffic in ["1000 RPS", "1000 rps", "1000Rps", "expect 1000 RPS sustained"] {
        let baseline = extract_from(traffic, "");
        if baseline.base_rps != 1000.0 {
            return Err(format!("{traffic} parsed to {}", baseline.base_rps));
        }
    }
    Ok(())
}

#[test]
fn k_suffix_multiplies_by_one_thousand() -> TestResult {
    let baseline = extract_from("250k RPS read-mostly", "");
    if baseline.base_rps != 250_000.0 {
        return Err(format!("expected 250000, got {}", baseline.base_rps));
    }
    Ok(())
}

#[test]
fn first_rps_figure_wins_over_later_ones() -> TestResult {
    let baseline = extract_from("100 RPS baseline, 1000 RPS peak", "");
    if baseline.base_rps != 100.0 {
        return Err(format!("expected first figure 100, got {}", baseline.base_rps));
    }
    Ok(())
}

#[test]
fn rps_token_without_figure_is_skipped() -> TestResult {
    let baseline = extract_from("RPS unknown, later 500 RPS", "");
    if baseline.base_rps != 500.0 {
        return Err(format!("expected 500, got {}", baseline.base_rps));
    }
    Ok(())
}

#[test]
fn write_mention_assumes_mixed_workload() -> TestResult {
    let baseline = extract_from("1000 RPS with heavy writes", "");
    if baseline.read_ratio != 0.9 {
        return Err(format!("expected 0.9, got {}", baseline.read_ratio));
    }
    Ok(())
}

#[test]
fn pure_read_workload_keeps_default_ratio() -> TestResult {
    let baseline = extract_from("1000 RPS read-only", "");
    if baseline.read_ratio != 1.0 {
        return Err(format!("expected 1.0, got {}", baseline.read_ratio));
    }
    Ok(())
}

#[test]
fn p99_figure_is_parsed_through_noise() -> TestResult {
    for latency in ["p99 < 200", "P99 under 200ms", "p99: 200"] {
        let baseline = extract_from("", latency);
        if baseline.target_p99_ms != 200.0 {
            return Err(format!("{latency} parsed to {}", baseline.target_p99_ms));
        }
    }
    Ok(())
}

#[test]
fn p999_token_is_not_mistaken_for_p99() -> TestResult {
    let baseline = extract_from("", "p999 < 400, p99 < 150");
    if baseline.target_p99_ms != 150.0 {
        return Err(format!("expected 150, got {}", baseline.target_p99_ms));
    }
    Ok(())
}

#[test]
fn malformed_text_falls_back_silently() -> TestResult {
    let baseline = extract_from("lots of traffic, trust us", "fast please");
    if baseline.base_rps != 100.0 || baseline.target_p99_ms != 100.0 {
        return Err(format!(
            "expected defaults, got rps {} p99 {}",
            baseline.base_rps, baseline.target_p99_ms
        ));
    }
    Ok(())
}

#[test]
fn archetype_passes_through_untouched() -> TestResult {
    let spec = common::challenge("Generic", "generic", "", "");
    let baseline =
        extract(&spec, &BaselineDefaults::default(), DomainArchetype::Streaming);
    if baseline.archetype != DomainArchetype::Streaming {
        return Err(format!("expected streaming, got {}", baseline.archetype));
    }
    Ok(())
}
