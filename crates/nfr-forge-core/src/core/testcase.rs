// crates/nfr-forge-core/src/core/testcase.rs
// ============================================================================
// Module: NFR Forge Test Cases
// Description: Declarative test cases, traffic shapes, faults, and criteria.
// Purpose: Define the records scenario generators emit for downstream
//   harnesses.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! A test case is a declarative record: a traffic shape to drive, an optional
//! fault to inject, and the pass criteria a candidate architecture must meet.
//! The engine never executes any of this; it only specifies the suite for a
//! downstream load-test harness or grading system.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::RequirementTag;

// ============================================================================
// SECTION: Test Case
// ============================================================================

/// Declarative test case consumed by downstream harnesses.
///
/// # Invariants
/// - Names are unique within one enhanced challenge.
/// - Pass criteria express ceilings and floors, never measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Human-readable test name, also the remediation hint key.
    pub name: String,
    /// Scenario family the test belongs to.
    pub category: TestCategory,
    /// Requirement tag linking the test to a derived NFR statement.
    pub requirement: RequirementTag,
    /// Human-readable description of the scenario.
    pub description: String,
    /// Traffic shape driven during the test window.
    pub traffic: TrafficShape,
    /// Optional declarative fault injected during the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault: Option<FaultInjection>,
    /// Thresholds the candidate architecture must satisfy.
    pub pass_criteria: PassCriteria,
}

/// Scenario family of a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCategory {
    /// Percentile-ladder latency checks at baseline traffic.
    Latency,
    /// Traffic-multiplier load checks.
    Scalability,
    /// Fault-injection checks (degrade, don't die).
    Reliability,
    /// Data-loss and recovery checks.
    Durability,
    /// Traffic-skew checks (power law, hot partitions).
    Distribution,
    /// Author-written functional checks carried on the input challenge.
    Functional,
}

// ============================================================================
// SECTION: Traffic Shape
// ============================================================================

/// Traffic shape driven during a test window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrafficShape {
    /// Requests per second sustained for the window.
    pub rps: f64,
    /// Fraction of requests that are reads, in `0.0..=1.0`.
    pub read_ratio: f64,
    /// Window length in seconds.
    pub duration_secs: u64,
}

// ============================================================================
// SECTION: Fault Injection
// ============================================================================

/// Declarative fault descriptor for a downstream harness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaultInjection {
    /// Fault family to inject.
    pub kind: FaultKind,
    /// Offset into the test window when the fault triggers, in seconds.
    pub at_secs: u64,
    /// Offset when the faulted component recovers, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_secs: Option<u64>,
    /// Added latency magnitude in milliseconds, for gray failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude_ms: Option<f64>,
}

/// Fault families the engine can specify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// Full cache flush, modeling a cascading cold-cache stampede.
    CacheFlush,
    /// Fixed added latency on one dependency, modeling a gray failure.
    DependencyLatency,
    /// Database crash followed by recovery.
    DatabaseCrash,
}

// ============================================================================
// SECTION: Pass Criteria
// ============================================================================

/// Thresholds a candidate architecture must satisfy to pass a test.
///
/// All fields are optional; absent fields are not checked by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PassCriteria {
    /// Median latency ceiling in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_p50_ms: Option<f64>,
    /// P90 latency ceiling in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_p90_ms: Option<f64>,
    /// P95 latency ceiling in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_p95_ms: Option<f64>,
    /// P99 latency ceiling in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_p99_ms: Option<f64>,
    /// P99.9 latency ceiling in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_p999_ms: Option<f64>,
    /// Maximum tolerated error rate, in `0.0..=1.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_error_rate: Option<f64>,
    /// Minimum required availability, in `0.0..=1.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_availability: Option<f64>,
    /// Maximum tolerated downtime in seconds (RTO).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_downtime_secs: Option<u64>,
    /// Maximum tolerated data-loss window in seconds (RPO).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_data_loss_secs: Option<u64>,
}
