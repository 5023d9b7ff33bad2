// crates/nfr-forge-cli/src/lib.rs
// ============================================================================
// Module: NFR Forge CLI Library
// Description: Catalog IO shared between the binary and its tests.
// Purpose: Provide bounded, shape-preserving challenge catalog handling.
// Dependencies: nfr-forge-core, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The CLI operates on challenge catalogs: a JSON file holding either a
//! single challenge object or an array of them. This crate-level library
//! keeps the bounded read and shape-preserving render logic out of `main.rs`
//! so the integration tests can exercise it directly.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use catalog::Catalog;
pub use catalog::CatalogError;
pub use catalog::MAX_CATALOG_SPECS;
pub use catalog::MAX_INPUT_BYTES;
