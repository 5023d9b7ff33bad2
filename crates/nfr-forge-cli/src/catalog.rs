// crates/nfr-forge-cli/src/catalog.rs
// ============================================================================
// Module: NFR Forge Challenge Catalog
// Description: Bounded load/render of single- or multi-challenge JSON files.
// Purpose: Keep CLI inputs size-limited and output shape faithful to input.
// Dependencies: nfr-forge-core, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! A catalog file holds either one challenge object or an array of them. The
//! distinction is preserved through the pipeline: a single-object input
//! renders as a single object, an array input renders as an array, even an
//! array of one. Inputs are untrusted, so reads are size-capped before
//! parsing and array lengths are capped after.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use nfr_forge_core::ChallengeSpec;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a catalog JSON input in bytes.
pub const MAX_INPUT_BYTES: usize = 8 * 1024 * 1024;
/// Maximum number of challenges accepted in one catalog.
pub const MAX_CATALOG_SPECS: usize = 1024;

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// A challenge catalog, preserving the input's single/array shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Catalog {
    /// A single challenge object.
    Single(Box<ChallengeSpec>),
    /// An array of challenges.
    Many(Vec<ChallengeSpec>),
}

impl Catalog {
    /// Loads a catalog from disk with size and count limits enforced.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the file cannot be read, exceeds the
    /// byte limit, fails to parse, or holds too many challenges.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let metadata = fs::metadata(path).map_err(|err| CatalogError::Io {
            path: path.display().to_string(),
            source: err,
        })?;
        if metadata.len() > MAX_INPUT_BYTES as u64 {
            return Err(CatalogError::TooLarge {
                path: path.display().to_string(),
                limit: MAX_INPUT_BYTES,
            });
        }
        let bytes = fs::read(path).map_err(|err| CatalogError::Io {
            path: path.display().to_string(),
            source: err,
        })?;
        let catalog: Self = serde_json::from_slice(&bytes).map_err(|err| CatalogError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        if catalog.len() > MAX_CATALOG_SPECS {
            return Err(CatalogError::TooManySpecs {
                count: catalog.len(),
                limit: MAX_CATALOG_SPECS,
            });
        }
        Ok(catalog)
    }

    /// Returns the number of challenges in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(specs) => specs.len(),
        }
    }

    /// Returns true when the catalog holds no challenges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the challenges as a slice regardless of shape.
    #[must_use]
    pub fn specs(&self) -> &[ChallengeSpec] {
        match self {
            Self::Single(spec) => std::slice::from_ref(spec),
            Self::Many(specs) => specs,
        }
    }

    /// Applies a fallible transform to every challenge, preserving shape.
    ///
    /// # Errors
    ///
    /// Propagates the first error the transform returns.
    pub fn try_map<E>(
        &self,
        mut transform: impl FnMut(&ChallengeSpec) -> Result<ChallengeSpec, E>,
    ) -> Result<Self, E> {
        match self {
            Self::Single(spec) => Ok(Self::Single(Box::new(transform(spec)?))),
            Self::Many(specs) => {
                let mut transformed = Vec::with_capacity(specs.len());
                for spec in specs {
                    transformed.push(transform(spec)?);
                }
                Ok(Self::Many(transformed))
            }
        }
    }

    /// Renders the catalog as JSON, compact or pretty.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Serialize`] when rendering fails.
    pub fn to_json(&self, pretty: bool) -> Result<String, CatalogError> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        rendered.map_err(|err| CatalogError::Serialize(err.to_string()))
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Catalog IO and shape errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog file failed.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The catalog file exceeds the size limit.
    #[error("catalog {path} exceeds the {limit}-byte limit")]
    TooLarge {
        /// Path that exceeded the limit.
        path: String,
        /// Size limit in bytes.
        limit: usize,
    },
    /// JSON parsing failed.
    #[error("failed to parse catalog {path}: {message}")]
    Parse {
        /// Path that failed to parse.
        path: String,
        /// Parser diagnostic.
        message: String,
    },
    /// The catalog holds more challenges than the limit allows.
    #[error("catalog holds {count} challenges, limit is {limit}")]
    TooManySpecs {
        /// Number of challenges found.
        count: usize,
        /// Maximum number accepted.
        limit: usize,
    },
    /// Rendering the catalog as JSON failed.
    #[error("failed to render catalog: {0}")]
    Serialize(String),
}
