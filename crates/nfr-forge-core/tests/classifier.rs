// crates/nfr-forge-core/tests/classifier.rs
// ============================================================================
// Module: Domain Classifier Tests
// Description: Keyword matching, priority order, and fallback behavior.
// Purpose: Ensure classification is total, deterministic, and ordered.
// ============================================================================

//! Classification tests across every keyword family.

use nfr_forge_core::DomainArchetype;
use nfr_forge_core::classify;

mod common;

type TestResult = Result<(), String>;

/// Classifies a challenge built from the given title and description.
fn classify_text(title: &str, description: &str) -> DomainArchetype {
    classify(&common::challenge(title, description, "", ""))
}

/// Asserts the text classifies to the expected archetype.
fn assert_archetype(title: &str, description: &str, expected: DomainArchetype) -> TestResult {
    let got = classify_text(title, description);
    if got == expected {
        Ok(())
    } else {
        Err(format!("{title} / {description}: expected {expected}, got {got}"))
    }
}

#[test]
fn each_keyword_family_resolves() -> TestResult {
    assert_archetype("Feed", "a social timeline app", DomainArchetype::Social)?;
    assert_archetype("Store", "payment and checkout flows", DomainArchetype::Ecommerce)?;
    assert_archetype("Player", "live video delivery", DomainArchetype::Streaming)?;
    assert_archetype("Lookup", "full-text search over an index", DomainArchetype::Search)?;
    assert_archetype("Chat", "real-time message delivery", DomainArchetype::Messaging)?;
    Ok(())
}

#[test]
fn keywords_match_in_title_or_description() -> TestResult {
    assert_archetype("Social Network", "a system", DomainArchetype::Social)?;
    assert_archetype("A System", "with a social graph", DomainArchetype::Social)?;
    Ok(())
}

#[test]
fn matching_is_case_insensitive() -> TestResult {
    assert_archetype("SOCIAL FEED", "TIMELINE", DomainArchetype::Social)
}

#[test]
fn priority_order_breaks_ties() -> TestResult {
    // A live-chat commerce app matches ecommerce, streaming, and messaging
    // families; ecommerce sits earliest in priority order.
    assert_archetype("Live Chat Shop", "checkout with live chat support", DomainArchetype::Ecommerce)?;
    // Social outranks everything.
    assert_archetype("Video Feed", "social video streaming", DomainArchetype::Social)?;
    Ok(())
}

#[test]
fn unmatched_text_falls_back_to_general() -> TestResult {
    assert_archetype("URL Shortener", "compact links for sharing", DomainArchetype::General)
}

#[test]
fn classification_is_deterministic() -> TestResult {
    let spec = common::social_feed();
    let first = classify(&spec);
    for _ in 0 .. 10 {
        if classify(&spec) != first {
            return Err("classification changed across calls".to_string());
        }
    }
    Ok(())
}
