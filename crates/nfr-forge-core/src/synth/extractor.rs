// crates/nfr-forge-core/src/synth/extractor.rs
// ============================================================================
// Module: NFR Forge Metrics Extractor
// Description: Free-text requirement parsing into a numeric baseline.
// Purpose: Turn author prose into `BaselineMetrics` without ever failing.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Authors write traffic and latency requirements as prose ("1000 RPS,
//! mostly reads", "p99 < 200ms"). Extraction is a best-effort heuristic layer
//! over that prose, not a schema validator: any field that fails to parse
//! falls back to a default so malformed input never blocks synthesis.
//!
//! When a traffic string carries several RPS figures ("100 RPS baseline,
//! 1000 RPS peak"), the first parseable one wins.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::BaselineMetrics;
use crate::core::ChallengeSpec;
use crate::core::DomainArchetype;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Fallback values applied when extraction finds nothing usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineDefaults {
    /// Steady-state RPS assumed when the traffic field has no RPS figure.
    pub base_rps: f64,
    /// Read ratio assumed for workloads with no write mention.
    pub read_ratio: f64,
    /// Target P99 assumed when the latency field has no p99 figure.
    pub target_p99_ms: f64,
}

impl Default for BaselineDefaults {
    fn default() -> Self {
        Self {
            base_rps: 100.0,
            read_ratio: 1.0,
            target_p99_ms: 100.0,
        }
    }
}

/// Read ratio assumed for mixed workloads that mention writes.
const WRITE_MIX_READ_RATIO: f64 = 0.9;
/// Maximum digits accepted in a parsed figure; longer runs are author typos.
const MAX_FIGURE_DIGITS: usize = 12;

// ============================================================================
// SECTION: Extraction
// ============================================================================

/// Derives the numeric baseline from a challenge's free-text fields.
///
/// Never fails: unparseable fields fall back to `defaults`. The archetype is
/// classified separately and passed in, keeping extraction and classification
/// independent.
#[must_use]
pub fn extract(
    spec: &ChallengeSpec,
    defaults: &BaselineDefaults,
    archetype: DomainArchetype,
) -> BaselineMetrics {
    let traffic = &spec.requirement_fields.traffic;
    let latency = &spec.requirement_fields.latency;

    // A parsed zero is author noise, not a workload; fall back like a miss.
    let base_rps = parse_rps(traffic).filter(|rps| *rps > 0.0).unwrap_or(defaults.base_rps);
    let read_ratio = if mentions_writes(traffic) {
        WRITE_MIX_READ_RATIO
    } else {
        defaults.read_ratio
    };
    let target_p99_ms =
        parse_p99_ms(latency).filter(|p99| *p99 > 0.0).unwrap_or(defaults.target_p99_ms);

    BaselineMetrics {
        challenge_id: spec.id.clone(),
        base_rps,
        read_ratio,
        target_p99_ms,
        archetype,
    }
}

/// Returns true when the traffic prose mentions writes.
fn mentions_writes(traffic: &str) -> bool {
    traffic.to_ascii_lowercase().contains("write")
}

// ============================================================================
// SECTION: Text Scanning
// ============================================================================

/// Parses the first integer immediately preceding an `RPS` token.
///
/// Accepts a `k` suffix as a thousands multiplier ("250k RPS"). Occurrences
/// of the token with no preceding figure are skipped.
fn parse_rps(traffic: &str) -> Option<f64> {
    let lower = traffic.to_ascii_lowercase();
    let mut from = 0;
    while let Some(found) = lower[from ..].find("rps") {
        let token_start = from + found;
        if let Some(value) = figure_before(lower.as_bytes(), token_start) {
            return Some(value);
        }
        from = token_start + "rps".len();
    }
    None
}

/// Parses the first integer following a `p99` token.
///
/// A `p999` token is not a `p99` target and is skipped.
fn parse_p99_ms(latency: &str) -> Option<f64> {
    let lower = latency.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let mut from = 0;
    while let Some(found) = lower[from ..].find("p99") {
        let after = from + found + "p99".len();
        if bytes.get(after).copied().is_some_and(|byte| byte.is_ascii_digit()) {
            from = after + 1;
            continue;
        }
        return figure_after(bytes, after);
    }
    None
}

/// Reads the integer (with optional `k` suffix) ending just before `end`.
fn figure_before(bytes: &[u8], end: usize) -> Option<f64> {
    let mut idx = end;
    while idx > 0 && bytes[idx - 1].is_ascii_whitespace() {
        idx -= 1;
    }
    let mut multiplier = 1.0;
    if idx > 0 && bytes[idx - 1] == b'k' {
        multiplier = 1000.0;
        idx -= 1;
    }
    let digits_end = idx;
    while idx > 0 && bytes[idx - 1].is_ascii_digit() {
        idx -= 1;
    }
    parse_digit_run(bytes, idx, digits_end).map(|value| value * multiplier)
}

/// Reads the first integer at or after `start`.
fn figure_after(bytes: &[u8], start: usize) -> Option<f64> {
    let mut idx = start;
    while idx < bytes.len() && !bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    let digits_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    parse_digit_run(bytes, digits_start, idx)
}

/// Parses an ASCII digit run as a positive figure.
#[allow(clippy::cast_precision_loss, reason = "Figures are bounded well below 2^52.")]
fn parse_digit_run(bytes: &[u8], start: usize, end: usize) -> Option<f64> {
    if start == end || end - start > MAX_FIGURE_DIGITS {
        return None;
    }
    let digits = std::str::from_utf8(&bytes[start .. end]).ok()?;
    let value = digits.parse::<u64>().ok()?;
    Some(value as f64)
}
