// crates/nfr-forge-core/src/core/multipliers.rs
// ============================================================================
// Module: NFR Forge Traffic Multipliers
// Description: Per-archetype traffic-shape multiplier table.
// Purpose: Provide static, versioned scale factors injected into generators.
// Dependencies: crate::core::baseline, serde, thiserror
// ============================================================================

//! ## Overview
//! The multiplier table maps each domain archetype to three named scale
//! factors applied to the baseline RPS: the daily peak hour, a viral spike,
//! and a seasonal high-water mark. The table is an immutable configuration
//! value injected into the scalability generator, not module state, so
//! deployments can swap it without touching generator logic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::baseline::DomainArchetype;

// ============================================================================
// SECTION: Scale Shapes
// ============================================================================

/// Named traffic shapes covered by the scalability generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleShape {
    /// Daily peak-hour load.
    PeakHour,
    /// Viral spike, the worst plausible burst.
    Viral,
    /// Seasonal high-water mark (holidays, launches).
    Seasonal,
}

impl ScaleShape {
    /// All shapes in increasing severity order of their pass criteria.
    pub const ALL: [Self; 3] = [Self::PeakHour, Self::Seasonal, Self::Viral];

    /// Returns a stable snake_case label for the shape.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PeakHour => "peak_hour",
            Self::Viral => "viral",
            Self::Seasonal => "seasonal",
        }
    }
}

impl std::fmt::Display for ScaleShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Multiplier Rows
// ============================================================================

/// Scale factors for one archetype, each applied to the baseline RPS.
///
/// # Invariants
/// - Every factor is at least 1.0; scaling never shrinks traffic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrafficMultipliers {
    /// Daily peak-hour factor.
    pub peak_hour: f64,
    /// Viral spike factor.
    pub viral: f64,
    /// Seasonal surge factor.
    pub seasonal: f64,
}

impl TrafficMultipliers {
    /// Returns the factor for the given shape.
    #[must_use]
    pub const fn factor(&self, shape: ScaleShape) -> f64 {
        match shape {
            ScaleShape::PeakHour => self.peak_hour,
            ScaleShape::Viral => self.viral,
            ScaleShape::Seasonal => self.seasonal,
        }
    }

    /// Validates the row invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MultiplierError::FactorBelowOne`] when any factor is below
    /// 1.0 or not finite.
    pub fn validate(&self, archetype: DomainArchetype) -> Result<(), MultiplierError> {
        for shape in ScaleShape::ALL {
            let factor = self.factor(shape);
            if !factor.is_finite() || factor < 1.0 {
                return Err(MultiplierError::FactorBelowOne {
                    archetype,
                    shape,
                    factor,
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Multiplier Table
// ============================================================================

/// Per-archetype traffic multiplier table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierTable {
    /// Social feeds and timelines.
    pub social: TrafficMultipliers,
    /// E-commerce, payments, and checkout flows.
    pub ecommerce: TrafficMultipliers,
    /// Video and live streaming.
    pub streaming: TrafficMultipliers,
    /// Search and indexing systems.
    pub search: TrafficMultipliers,
    /// Messaging, chat, and real-time delivery.
    pub messaging: TrafficMultipliers,
    /// Fallback archetype.
    pub general: TrafficMultipliers,
}

impl MultiplierTable {
    /// Returns the multiplier row for the given archetype.
    #[must_use]
    pub const fn row(&self, archetype: DomainArchetype) -> TrafficMultipliers {
        match archetype {
            DomainArchetype::Social => self.social,
            DomainArchetype::Ecommerce => self.ecommerce,
            DomainArchetype::Streaming => self.streaming,
            DomainArchetype::Search => self.search,
            DomainArchetype::Messaging => self.messaging,
            DomainArchetype::General => self.general,
        }
    }

    /// Validates every row of the table.
    ///
    /// # Errors
    ///
    /// Returns [`MultiplierError`] for the first invalid factor found.
    pub fn validate(&self) -> Result<(), MultiplierError> {
        for archetype in DomainArchetype::ALL {
            self.row(archetype).validate(archetype)?;
        }
        Ok(())
    }
}

impl Default for MultiplierTable {
    /// Built-in table.
    ///
    /// Streaming spikes hardest on viral events, ecommerce peaks seasonally,
    /// search is the flattest. Values are exact binary fractions or integers
    /// so multiplied RPS figures stay exact.
    fn default() -> Self {
        Self {
            social: TrafficMultipliers {
                peak_hour: 3.0,
                viral: 10.0,
                seasonal: 5.0,
            },
            ecommerce: TrafficMultipliers {
                peak_hour: 2.5,
                viral: 8.0,
                seasonal: 6.0,
            },
            streaming: TrafficMultipliers {
                peak_hour: 4.0,
                viral: 12.0,
                seasonal: 2.0,
            },
            search: TrafficMultipliers {
                peak_hour: 2.0,
                viral: 6.0,
                seasonal: 4.0,
            },
            messaging: TrafficMultipliers {
                peak_hour: 3.0,
                viral: 8.0,
                seasonal: 2.0,
            },
            general: TrafficMultipliers {
                peak_hour: 2.0,
                viral: 5.0,
                seasonal: 3.0,
            },
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Multiplier table validation errors.
#[derive(Debug, Error)]
pub enum MultiplierError {
    /// A scale factor shrinks traffic or is not a finite number.
    #[error("multiplier {factor} for {archetype}/{shape} must be a finite value >= 1.0")]
    FactorBelowOne {
        /// Archetype row containing the invalid factor.
        archetype: DomainArchetype,
        /// Shape column containing the invalid factor.
        shape: ScaleShape,
        /// The offending factor.
        factor: f64,
    },
}
