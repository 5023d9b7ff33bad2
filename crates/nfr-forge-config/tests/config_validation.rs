//! Config parsing and validation tests for nfr-forge-config.
// crates/nfr-forge-config/tests/config_validation.rs
// =============================================================================
// Module: Config Validation Tests
// Description: Validate config parsing, fail-closed validation, and resolvers.
// Purpose: Ensure overrides are strict and built-ins survive partial configs.
// =============================================================================

use nfr_forge_config::ConfigError;
use nfr_forge_config::ForgeConfig;
use nfr_forge_core::DomainArchetype;
use nfr_forge_core::MultiplierTable;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<ForgeConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}

#[test]
fn empty_document_is_valid_and_keeps_built_ins() -> TestResult {
    let config = ForgeConfig::from_toml_str("").map_err(|err| err.to_string())?;
    let defaults = config.baseline_defaults();
    if defaults.base_rps != 100.0 || defaults.read_ratio != 1.0 || defaults.target_p99_ms != 100.0
    {
        return Err(format!(
            "built-in defaults changed: {} {} {}",
            defaults.base_rps, defaults.read_ratio, defaults.target_p99_ms
        ));
    }
    if config.multiplier_table() != MultiplierTable::default() {
        return Err("built-in multiplier table changed".to_string());
    }
    Ok(())
}

#[test]
fn defaults_overrides_flow_into_baseline_defaults() -> TestResult {
    let document = r"
[defaults]
base_rps = 250.0
read_ratio = 0.75
";
    let config = ForgeConfig::from_toml_str(document).map_err(|err| err.to_string())?;
    let defaults = config.baseline_defaults();
    if defaults.base_rps != 250.0 {
        return Err(format!("base_rps override lost: {}", defaults.base_rps));
    }
    if defaults.read_ratio != 0.75 {
        return Err(format!("read_ratio override lost: {}", defaults.read_ratio));
    }
    if defaults.target_p99_ms != 100.0 {
        return Err(format!("absent target_p99_ms changed: {}", defaults.target_p99_ms));
    }
    Ok(())
}

#[test]
fn partial_multiplier_override_keeps_other_rows() -> TestResult {
    let document = r"
[multipliers.social]
peak_hour = 4.0
viral = 20.0
seasonal = 6.0
";
    let config = ForgeConfig::from_toml_str(document).map_err(|err| err.to_string())?;
    let table = config.multiplier_table();
    let social = table.row(DomainArchetype::Social);
    if social.peak_hour != 4.0 || social.viral != 20.0 || social.seasonal != 6.0 {
        return Err("social override lost".to_string());
    }
    let built_in = MultiplierTable::default();
    if table.row(DomainArchetype::Search) != built_in.row(DomainArchetype::Search) {
        return Err("untouched search row changed".to_string());
    }
    Ok(())
}

#[test]
fn rejects_non_positive_base_rps() -> TestResult {
    assert_invalid(
        ForgeConfig::from_toml_str("[defaults]\nbase_rps = 0.0\n"),
        "defaults.base_rps",
    )
}

#[test]
fn rejects_read_ratio_above_one() -> TestResult {
    assert_invalid(
        ForgeConfig::from_toml_str("[defaults]\nread_ratio = 1.5\n"),
        "defaults.read_ratio",
    )
}

#[test]
fn rejects_non_positive_target_p99() -> TestResult {
    assert_invalid(
        ForgeConfig::from_toml_str("[defaults]\ntarget_p99_ms = -5.0\n"),
        "defaults.target_p99_ms",
    )
}

#[test]
fn rejects_multiplier_factor_below_one() -> TestResult {
    let document = r"
[multipliers.streaming]
peak_hour = 0.5
viral = 12.0
seasonal = 2.0
";
    assert_invalid(ForgeConfig::from_toml_str(document), "must be a finite value >= 1.0")
}

#[test]
fn rejects_unknown_top_level_key() -> TestResult {
    assert_invalid(ForgeConfig::from_toml_str("[generators]\nenabled = true\n"), "parse")
}

#[test]
fn rejects_unknown_defaults_key() -> TestResult {
    assert_invalid(ForgeConfig::from_toml_str("[defaults]\nbase_qps = 100.0\n"), "parse")
}

#[test]
fn rejects_unknown_archetype_row() -> TestResult {
    let document = r"
[multipliers.gaming]
peak_hour = 2.0
viral = 5.0
seasonal = 3.0
";
    assert_invalid(ForgeConfig::from_toml_str(document), "parse")
}

#[test]
fn rejects_incomplete_multiplier_row() -> TestResult {
    assert_invalid(
        ForgeConfig::from_toml_str("[multipliers.social]\npeak_hour = 3.0\n"),
        "parse",
    )
}
