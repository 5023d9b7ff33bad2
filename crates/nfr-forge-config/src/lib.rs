// crates/nfr-forge-config/src/lib.rs
// ============================================================================
// Module: NFR Forge Config Library
// Description: Canonical config model, validation, and example generation.
// Purpose: Single source of truth for nfr-forge.toml semantics.
// Dependencies: crate::{config, examples}
// ============================================================================

//! ## Overview
//! `nfr-forge-config` defines the canonical configuration model for NFR
//! Forge: extraction fallbacks and per-archetype multiplier-table overrides.
//! Parsing is strict and validation fails closed, so a deployment never runs
//! with a half-understood config file.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
