// crates/nfr-forge-config/src/examples.rs
// ============================================================================
// Module: NFR Forge Config Examples
// Description: Annotated example configuration document.
// Purpose: Give operators a copy-paste starting point that always validates.
// Dependencies: None
// ============================================================================

//! ## Overview
//! A single deterministic TOML document mirroring the built-in defaults.
//! The example is covered by a test that parses and validates it, so it can
//! never drift from the config model.

/// Returns an annotated example configuration document.
#[must_use]
pub const fn config_toml_example() -> &'static str {
    r#"# NFR Forge configuration.
#
# Every key is optional. Absent keys keep the engine built-ins, so an empty
# file is a valid configuration. Unknown keys are rejected.

[defaults]
# Fallback figures used when a challenge description carries no explicit
# traffic or latency numbers.
base_rps = 100.0
# Read share of the workload for descriptions without a write mention.
# Must lie in 0.0..=1.0.
read_ratio = 1.0
target_p99_ms = 100.0

# Traffic multipliers per domain archetype. Each factor scales the baseline
# RPS and must be a finite value >= 1.0. Override only the archetypes you
# need; the rest keep the built-in table.

[multipliers.social]
peak_hour = 3.0
viral = 10.0
seasonal = 5.0

[multipliers.ecommerce]
peak_hour = 2.5
viral = 8.0
seasonal = 6.0

[multipliers.streaming]
peak_hour = 4.0
viral = 12.0
seasonal = 2.0

[multipliers.search]
peak_hour = 2.0
viral = 6.0
seasonal = 4.0

[multipliers.messaging]
peak_hour = 3.0
viral = 8.0
seasonal = 2.0

[multipliers.general]
peak_hour = 2.0
viral = 5.0
seasonal = 3.0
"#
}
