// crates/nfr-forge-core/src/synth/hints.rs
// ============================================================================
// Module: NFR Forge Hint Generator
// Description: Remediation guidance keyed to generated test names.
// Purpose: Tell authors and students what a failing scenario usually means.
// Dependencies: crate::core, crate::synth::{distribution, durability,
//   latency, reliability, scalability}
// ============================================================================

//! ## Overview
//! Every generated scenario family carries one remediation hint. Hints are
//! keyed by the generated test name, so a grading harness can surface the
//! matching diagnostic next to a failing case without understanding the
//! scenario semantics itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::RemediationHint;
use crate::core::TestCase;
use crate::synth::distribution::HOT_PARTITION_NAME;
use crate::synth::distribution::POWER_LAW_NAME;
use crate::synth::durability::DURABILITY_NAME;
use crate::synth::latency::STEADY_STATE_NAME;
use crate::synth::latency::TAIL_AMPLIFICATION_NAME;
use crate::synth::reliability::CASCADE_NAME;
use crate::synth::reliability::GRAY_FAILURE_NAME;
use crate::synth::scalability::PEAK_HOUR_NAME;
use crate::synth::scalability::SEASONAL_NAME;
use crate::synth::scalability::VIRAL_NAME;

// ============================================================================
// SECTION: Hint Catalog
// ============================================================================

/// Diagnostic message per generated scenario family.
const HINT_CATALOG: &[(&str, &str)] = &[
    (
        STEADY_STATE_NAME,
        "The percentile ladder is failing at baseline load. Look for synchronous work on the \
         request path: N+1 queries, missing indexes, or serialization done per request instead of \
         cached.",
    ),
    (
        TAIL_AMPLIFICATION_NAME,
        "Median latency is fine but the tail blows up. Usual suspects: lock contention, GC or \
         compaction pauses, connection-pool exhaustion, and retries amplifying slow requests.",
    ),
    (
        PEAK_HOUR_NAME,
        "Peak-hour load breaches thresholds. Add horizontal capacity behind a load balancer and \
         make sure caching absorbs the read share before requests reach the database.",
    ),
    (
        VIRAL_NAME,
        "The viral spike overwhelms the system. Spikes are read-heavy: serve hot content from a \
         CDN or cache tier, shed or queue non-critical writes, and autoscale on queue depth, not \
         CPU.",
    ),
    (
        SEASONAL_NAME,
        "Seasonal load is sustained, not a burst. Pre-provision capacity ahead of the season and \
         verify the database tier scales, since caches alone will not carry a sustained write \
         share.",
    ),
    (
        CASCADE_NAME,
        "A cache flush is cascading into the database. Use request coalescing for concurrent \
         misses, jittered TTLs so entries do not expire together, and a circuit breaker to \
         degrade instead of dying.",
    ),
    (
        GRAY_FAILURE_NAME,
        "A slow dependency is dragging the whole system down. Bound it with timeouts and bulkheads \
         so one bad dependency cannot hold every request thread hostage; hedge reads where safe.",
    ),
    (
        DURABILITY_NAME,
        "The database crash loses data or recovery is too slow. Check replication (synchronous \
         for zero-loss promises), write-ahead durability settings, and automated failover rather \
         than manual recovery.",
    ),
    (
        POWER_LAW_NAME,
        "Skewed access should make caching trivially effective; failing here implies a caching \
         defect. Verify the hot 20% of keys actually stays resident and the eviction policy is \
         not recycling them.",
    ),
    (
        HOT_PARTITION_NAME,
        "One partition absorbs disproportionate load. Revisit the partition key (add a random or \
         time-based suffix for hot entities) and cache hot-partition reads in front of the shard.",
    ),
];

// ============================================================================
// SECTION: Hint Synthesis
// ============================================================================

/// Derives one remediation hint per generated scenario family.
///
/// Families absent from `cases` produce no hint, so the output always matches
/// the suite it accompanies.
#[must_use]
pub fn synthesize_hints(cases: &[TestCase]) -> Vec<RemediationHint> {
    HINT_CATALOG
        .iter()
        .filter(|(trigger, _)| cases.iter().any(|case| case.name.contains(trigger)))
        .map(|(trigger, message)| RemediationHint::new(*trigger, *message))
        .collect()
}
