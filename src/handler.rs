//! Request orchestration
//!
//! [`DetectService`] ties the pipeline together for one request:
//! authenticate, decode, classify, resolve the language, assemble the
//! response. It holds only immutable configuration, so one instance
//! serves any number of requests with no cross-request state.

use serde::{Deserialize, Serialize};

use crate::classifier::{self, Label};
use crate::config::Config;
use crate::decode;
use crate::error::DetectError;
use crate::language;

/// Reported model version.
pub const MODEL_VERSION: &str = "1.0";

/// Method tag in response metadata. Deliberately honest.
pub const DETECTION_METHOD: &str = "hash-bucket";

/// Body of `POST /api/detect`.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectRequest {
    pub audio_base64: String,
    #[serde(default)]
    pub language_hint: Option<String>,
}

/// Static metadata attached to every successful response.
#[derive(Debug, Clone, Serialize)]
pub struct ModelMetadata {
    pub version: &'static str,
    pub team: String,
    pub method: &'static str,
}

/// Successful response of `POST /api/detect`.
#[derive(Debug, Clone, Serialize)]
pub struct DetectResponse {
    pub classification: Label,
    pub confidence: f64,
    pub explanation: String,
    pub language_detected: &'static str,
    pub model_metadata: ModelMetadata,
}

/// Stateless per-request pipeline with injected configuration.
pub struct DetectService {
    config: Config,
}

impl DetectService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn team(&self) -> &str {
        &self.config.team
    }

    pub fn key_count(&self) -> usize {
        self.config.api_keys.len()
    }

    /// Handle one authenticated detect request.
    ///
    /// The credential is checked first; decoding is never attempted for
    /// an unauthorized caller.
    pub fn detect(
        &self,
        api_key: Option<&str>,
        request: &DetectRequest,
    ) -> Result<DetectResponse, DetectError> {
        match api_key {
            Some(key) if self.config.key_allowed(key) => {}
            _ => return Err(DetectError::InvalidApiKey),
        }

        self.classify_payload(request)
    }

    /// Run the pipeline without the auth gate. Used by `detect` after
    /// authentication and by the offline CLI.
    pub fn classify_payload(
        &self,
        request: &DetectRequest,
    ) -> Result<DetectResponse, DetectError> {
        let audio = decode::decode_audio(&request.audio_base64)?;
        let result = classifier::classify(&audio);
        let detected = language::resolve(request.language_hint.as_deref());
        let explanation = classifier::explanation(&result, detected);

        Ok(DetectResponse {
            classification: result.label,
            confidence: round3(result.confidence),
            explanation,
            language_detected: detected,
            model_metadata: ModelMetadata {
                version: MODEL_VERSION,
                team: self.config.team.clone(),
                method: DETECTION_METHOD,
            },
        })
    }
}

/// Display rounding for the confidence field. The bucketing math uses
/// the raw value; only the wire form is rounded.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
