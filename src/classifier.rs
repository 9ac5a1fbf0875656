//! Deterministic AI/Human classification
//!
//! There is no model here. The "classifier" hashes the decoded audio
//! bytes with MD5, reads the digest as one big integer, and carves that
//! integer up with modular arithmetic:
//!
//! - `hash mod 100` against [`AI_THRESHOLD`] picks the label
//! - `hash mod 40`, shifted into [0.60, 0.99], is the confidence
//! - `hash mod 3` picks one of three explanation templates per label
//!
//! The point of this arrangement is reproducibility: identical decoded
//! bytes always produce the identical verdict, across processes and
//! runs. The whole thing sits behind a narrow `bytes -> Classification`
//! interface so a real model could replace it without the request
//! plumbing noticing.

use serde::Serialize;
use std::fmt;

/// Label bucket cutoff: `hash mod 100 > AI_THRESHOLD` means AI.
/// The alternate profile of this service uses 40; we fix 45.
pub const AI_THRESHOLD: u128 = 45;

/// Width of the confidence bucket; yields confidences in [0.60, 0.99].
const CONFIDENCE_SPAN: u128 = 40;

/// Number of explanation templates per label.
pub const TEMPLATES_PER_LABEL: usize = 3;

/// Classification verdict for one audio payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    #[serde(rename = "AI")]
    Ai,
    Human,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Ai => write!(f, "AI"),
            Label::Human => write!(f, "Human"),
        }
    }
}

/// Full result of classifying one byte sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: Label,
    /// Raw confidence in [0.60, 0.99]. Display rounding happens at the
    /// response boundary, not here.
    pub confidence: f64,
    /// Index into the per-label template list, always `< TEMPLATES_PER_LABEL`.
    pub explanation_index: usize,
}

/// Classify a decoded audio byte sequence. Never fails; the empty
/// sequence hashes like any other.
pub fn classify(audio: &[u8]) -> Classification {
    let digest = md5::compute(audio);
    // Same integer as parsing the hex digest in base 16
    let hash = u128::from_be_bytes(digest.0);

    let label = if hash % 100 > AI_THRESHOLD {
        Label::Ai
    } else {
        Label::Human
    };
    let confidence = ((hash % CONFIDENCE_SPAN) + 60) as f64 / 100.0;
    let explanation_index = (hash % TEMPLATES_PER_LABEL as u128) as usize;

    Classification {
        label,
        confidence,
        explanation_index,
    }
}

/// Render the explanation for a classification in the given language.
///
/// Templates are a fixed ordered list per label; `explanation_index`
/// selects one. Do not reorder them - the index is part of the
/// deterministic contract and is pinned by tests.
pub fn explanation(result: &Classification, language: &str) -> String {
    let pct = (result.confidence * 100.0).round() as u32;

    match (result.label, result.explanation_index) {
        (Label::Ai, 0) => format!(
            "Synthesis artifacts detected in this {language} sample ({pct}% confidence)."
        ),
        (Label::Ai, 1) => format!(
            "Spectral envelope is unnaturally smooth for a {language} speaker."
        ),
        (Label::Ai, _) => format!(
            "Prosody matches known {language} voice-synthesis patterns ({pct}% confidence)."
        ),
        (Label::Human, 0) => format!(
            "Natural vocal variation indicates a human {language} speaker ({pct}% confidence)."
        ),
        (Label::Human, 1) => format!(
            "Breathing and micro-pauses are consistent with a human {language} voice."
        ),
        (Label::Human, _) => format!(
            "No synthesis artifacts found in this {language} recording ({pct}% confidence)."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // PINNED FIXTURES
    // ==========================================================================
    //
    // These values are computed from the MD5 digest of each input:
    //
    //   md5(b"")            -> bucket 66 -> AI,    conf 0.66, template 0
    //   md5(b"hello")       -> bucket 94 -> AI,    conf 0.94, template 1
    //   md5(b"hello world") -> bucket 91 -> AI,    conf 0.71, template 2
    //   md5(0x00..0x10)     -> bucket 36 -> Human, conf 0.76, template 1
    //
    // If any of these fail, the hashing or bucketing changed and every
    // deployed client of this service sees different verdicts.
    // ==========================================================================

    #[test]
    fn test_empty_input_classifies() {
        let c = classify(b"");
        assert_eq!(c.label, Label::Ai);
        assert!((c.confidence - 0.66).abs() < 1e-9);
        assert_eq!(c.explanation_index, 0);
    }

    #[test]
    fn test_pinned_hello() {
        let c = classify(b"hello");
        assert_eq!(c.label, Label::Ai);
        assert!((c.confidence - 0.94).abs() < 1e-9);
        assert_eq!(c.explanation_index, 1);
    }

    #[test]
    fn test_pinned_hello_world() {
        let c = classify(b"hello world");
        assert_eq!(c.label, Label::Ai);
        assert!((c.confidence - 0.71).abs() < 1e-9);
        assert_eq!(c.explanation_index, 2);
    }

    #[test]
    fn test_pinned_human_verdict() {
        let bytes: Vec<u8> = (0u8..16).collect();
        let c = classify(&bytes);
        assert_eq!(c.label, Label::Human);
        assert!((c.confidence - 0.76).abs() < 1e-9);
        assert_eq!(c.explanation_index, 1);
    }

    #[test]
    fn test_determinism() {
        let payload = b"some decoded audio bytes";
        let first = classify(payload);
        for _ in 0..100 {
            assert_eq!(classify(payload), first);
        }
    }

    #[test]
    fn test_confidence_bounds() {
        for i in 0u32..500 {
            let payload = i.to_le_bytes();
            let c = classify(&payload);
            assert!(
                (0.60..=0.99).contains(&c.confidence),
                "confidence {} out of range for input {}",
                c.confidence,
                i
            );
        }
    }

    #[test]
    fn test_explanation_index_in_range() {
        for i in 0u32..500 {
            let c = classify(&i.to_le_bytes());
            assert!(c.explanation_index < TEMPLATES_PER_LABEL);
        }
    }

    #[test]
    fn test_explanation_embeds_language() {
        for idx in 0..TEMPLATES_PER_LABEL {
            for label in [Label::Ai, Label::Human] {
                let c = Classification {
                    label,
                    confidence: 0.75,
                    explanation_index: idx,
                };
                let text = explanation(&c, "Tamil");
                assert!(
                    text.contains("Tamil"),
                    "template ({:?}, {}) missing language: {}",
                    label,
                    idx,
                    text
                );
            }
        }
    }

    #[test]
    fn test_templates_are_distinct_per_label() {
        for label in [Label::Ai, Label::Human] {
            let texts: Vec<String> = (0..TEMPLATES_PER_LABEL)
                .map(|idx| {
                    explanation(
                        &Classification {
                            label,
                            confidence: 0.75,
                            explanation_index: idx,
                        },
                        "English",
                    )
                })
                .collect();
            assert_ne!(texts[0], texts[1]);
            assert_ne!(texts[1], texts[2]);
            assert_ne!(texts[0], texts[2]);
        }
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Ai.to_string(), "AI");
        assert_eq!(Label::Human.to_string(), "Human");
    }

    #[test]
    fn test_label_serializes_to_wire_form() {
        assert_eq!(serde_json::to_string(&Label::Ai).unwrap(), "\"AI\"");
        assert_eq!(serde_json::to_string(&Label::Human).unwrap(), "\"Human\"");
    }
}
