// crates/nfr-forge-config/src/config.rs
// ============================================================================
// Module: NFR Forge Configuration
// Description: Configuration loading and validation for NFR Forge.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: nfr-forge-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with a strict size limit and
//! unknown keys rejected. Every override is validated against the engine's
//! invariants before use: multiplier factors never shrink traffic, fallback
//! figures stay positive, and read ratios stay inside the unit interval.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use nfr_forge_core::BaselineDefaults;
use nfr_forge_core::DomainArchetype;
use nfr_forge_core::MultiplierError;
use nfr_forge_core::MultiplierTable;
use nfr_forge_core::TrafficMultipliers;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Canonical NFR Forge configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForgeConfig {
    /// Extraction fallback overrides.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Multiplier-table overrides per archetype.
    #[serde(default)]
    pub multipliers: MultipliersConfig,
}

/// Extraction fallback overrides; absent fields keep the engine built-ins.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Fallback steady-state RPS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_rps: Option<f64>,
    /// Fallback read ratio for workloads without a write mention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_ratio: Option<f64>,
    /// Fallback P99 target in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_p99_ms: Option<f64>,
}

/// Per-archetype multiplier overrides; absent rows keep the built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MultipliersConfig {
    /// Social feeds and timelines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<TrafficMultipliers>,
    /// E-commerce, payments, and checkout flows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecommerce: Option<TrafficMultipliers>,
    /// Video and live streaming.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streaming: Option<TrafficMultipliers>,
    /// Search and indexing systems.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<TrafficMultipliers>,
    /// Messaging, chat, and real-time delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging: Option<TrafficMultipliers>,
    /// Fallback archetype.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general: Option<TrafficMultipliers>,
}

impl MultipliersConfig {
    /// Returns the override row for the given archetype, when present.
    #[must_use]
    const fn row(&self, archetype: DomainArchetype) -> Option<TrafficMultipliers> {
        match archetype {
            DomainArchetype::Social => self.social,
            DomainArchetype::Ecommerce => self.ecommerce,
            DomainArchetype::Streaming => self.streaming,
            DomainArchetype::Search => self.search,
            DomainArchetype::Messaging => self.messaging,
            DomainArchetype::General => self.general,
        }
    }
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl ForgeConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, exceeds the size
    /// limit, fails to parse, or violates a validation invariant.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let metadata = fs::metadata(path).map_err(|err| ConfigError::Io {
            path: path.display().to_string(),
            source: err,
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE as u64 {
            return Err(ConfigError::TooLarge {
                path: path.display().to_string(),
                limit: MAX_CONFIG_FILE_SIZE,
            });
        }
        let contents = fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.display().to_string(),
            source: err,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing fails or validation rejects a
    /// value.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every override against the engine invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base_rps) = self.defaults.base_rps
            && (!base_rps.is_finite() || base_rps <= 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "defaults.base_rps must be a positive finite number, got {base_rps}"
            )));
        }
        if let Some(read_ratio) = self.defaults.read_ratio
            && (!read_ratio.is_finite() || !(0.0..=1.0).contains(&read_ratio))
        {
            return Err(ConfigError::Invalid(format!(
                "defaults.read_ratio must lie in 0.0..=1.0, got {read_ratio}"
            )));
        }
        if let Some(target_p99_ms) = self.defaults.target_p99_ms
            && (!target_p99_ms.is_finite() || target_p99_ms <= 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "defaults.target_p99_ms must be a positive finite number, got {target_p99_ms}"
            )));
        }
        self.multiplier_table().validate().map_err(ConfigError::Multiplier)?;
        Ok(())
    }

    /// Resolves the effective multiplier table: overrides atop the built-ins.
    #[must_use]
    pub fn multiplier_table(&self) -> MultiplierTable {
        let built_in = MultiplierTable::default();
        MultiplierTable {
            social: self.multipliers.row(DomainArchetype::Social).unwrap_or(built_in.social),
            ecommerce: self
                .multipliers
                .row(DomainArchetype::Ecommerce)
                .unwrap_or(built_in.ecommerce),
            streaming: self
                .multipliers
                .row(DomainArchetype::Streaming)
                .unwrap_or(built_in.streaming),
            search: self.multipliers.row(DomainArchetype::Search).unwrap_or(built_in.search),
            messaging: self
                .multipliers
                .row(DomainArchetype::Messaging)
                .unwrap_or(built_in.messaging),
            general: self.multipliers.row(DomainArchetype::General).unwrap_or(built_in.general),
        }
    }

    /// Resolves the effective extraction fallbacks.
    #[must_use]
    pub fn baseline_defaults(&self) -> BaselineDefaults {
        let built_in = BaselineDefaults::default();
        BaselineDefaults {
            base_rps: self.defaults.base_rps.unwrap_or(built_in.base_rps),
            read_ratio: self.defaults.read_ratio.unwrap_or(built_in.read_ratio),
            target_p99_ms: self.defaults.target_p99_ms.unwrap_or(built_in.target_p99_ms),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file failed.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The config file exceeds the size limit.
    #[error("config {path} exceeds the {limit}-byte limit")]
    TooLarge {
        /// Path that exceeded the limit.
        path: String,
        /// Size limit in bytes.
        limit: usize,
    },
    /// TOML parsing failed.
    #[error("failed to parse config: {0}")]
    Parse(String),
    /// A defaults override violates an engine invariant.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// A multiplier override violates the table invariants.
    #[error("invalid config: {0}")]
    Multiplier(#[from] MultiplierError),
}
