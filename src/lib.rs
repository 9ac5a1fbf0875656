//! Voxlot - label audio as AI-generated or human
//!
//! Voxlot is a minimal HTTP service that takes base64-encoded audio and
//! answers with an AI/Human label, a confidence score, and a one-line
//! explanation.
//!
//! # Overview
//!
//! There is no model behind the endpoint. The verdict is derived
//! deterministically from an MD5 hash of the decoded audio bytes:
//! identical audio always gets the identical answer, which makes the
//! service trivially reproducible, stateless, and fast. The decision
//! function is isolated behind `bytes -> Classification` so a genuine
//! classifier can replace it later without touching the HTTP plumbing.
//!
//! # Pipeline
//!
//! 1. **Auth**: `X-API-Key` header checked against a static allow-list.
//! 2. **Decode** ([`decode`]): first 10,000 characters of the payload,
//!    strict base64.
//! 3. **Classify** ([`classifier`]): hash → label bucket, confidence in
//!    [0.60, 0.99], explanation template index.
//! 4. **Language** ([`language`]): optional hint → display name, English
//!    fallback.
//!
//! # Quick Start
//!
//! ```
//! use voxlot::{classify, Label};
//!
//! let verdict = classify(b"decoded audio bytes");
//! match verdict.label {
//!     Label::Ai => println!("AI voice ({:.0}%)", verdict.confidence * 100.0),
//!     Label::Human => println!("Human voice ({:.0}%)", verdict.confidence * 100.0),
//! }
//! ```
//!
//! # HTTP surface
//!
//! | Route | Auth | Purpose |
//! |-------|------|---------|
//! | `POST /api/detect` | `X-API-Key` | Classify a payload |
//! | `GET /health`, `/healthz` | none | Liveness probe |
//! | `GET /` | none | Service identity |
//! | `GET /info` | none | Languages and schema shapes |

pub mod classifier;
pub mod config;
pub mod decode;
pub mod error;
pub mod handler;
pub mod language;
pub mod serve;

pub use classifier::{classify, Classification, Label};
pub use config::Config;
pub use error::DetectError;
pub use handler::{DetectRequest, DetectResponse, DetectService};

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // PUBLIC API TESTS
    // ==========================================================================
    //
    // These tests verify the public API surface is correct and documented.
    // ==========================================================================

    #[test]
    fn test_public_exports() {
        let _: Label = Label::Human;
        let verdict: Classification = classify(b"hello");
        let _: DetectError = DetectError::InvalidApiKey;
        assert_eq!(verdict.label, Label::Ai);
    }

    #[test]
    fn test_service_constructible_from_crate_root() {
        let service = DetectService::new(Config::new("k1,k2", "team"));
        assert_eq!(service.key_count(), 2);
        assert_eq!(service.team(), "team");
    }

    #[test]
    fn test_end_to_end_through_public_api() {
        let service = DetectService::new(Config::new("key", "team"));
        let request = DetectRequest {
            audio_base64: "aGVsbG8=".to_string(),
            language_hint: Some("te".to_string()),
        };

        let response = service.detect(Some("key"), &request).unwrap();
        assert_eq!(response.language_detected, "Telugu");
        assert!((0.60..=0.99).contains(&response.confidence));
    }
}
