// crates/nfr-forge-core/src/synth/classifier.rs
// ============================================================================
// Module: NFR Forge Domain Classifier
// Description: Keyword-based archetype inference from challenge text.
// Purpose: Resolve every challenge to exactly one domain archetype.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Classification lower-cases the title and description and tests keyword
//! families in a fixed priority order; the first matching family wins. A
//! description may contain several families (a live-chat commerce app), so
//! the order is an explicit tie-break, not an accident. Classification is
//! total: anything unmatched is [`DomainArchetype::General`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ChallengeSpec;
use crate::core::DomainArchetype;

// ============================================================================
// SECTION: Keyword Families
// ============================================================================

/// Keyword families evaluated in priority order; first match wins.
const KEYWORD_FAMILIES: &[(DomainArchetype, &[&str])] = &[
    (DomainArchetype::Social, &["social", "feed", "timeline"]),
    (DomainArchetype::Ecommerce, &["e-commerce", "payment", "checkout"]),
    (DomainArchetype::Streaming, &["stream", "video", "live"]),
    (DomainArchetype::Search, &["search", "index"]),
    (DomainArchetype::Messaging, &["message", "chat", "real-time"]),
];

// ============================================================================
// SECTION: Classification
// ============================================================================

/// Infers the domain archetype from a challenge's title and description.
///
/// Deterministic and total; never signals an error.
#[must_use]
pub fn classify(spec: &ChallengeSpec) -> DomainArchetype {
    let haystack = format!("{} {}", spec.title, spec.description).to_ascii_lowercase();
    for (archetype, keywords) in KEYWORD_FAMILIES {
        if keywords.iter().any(|keyword| haystack.contains(keyword)) {
            return *archetype;
        }
    }
    DomainArchetype::General
}
