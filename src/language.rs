//! Language hint resolution
//!
//! The service accepts an optional short language code with each request
//! and reports the matching display name back in the response. Anything
//! it does not recognize falls back to English - a missing, empty, or
//! unknown hint is never an error.

/// Supported language codes and their display names. Order is
/// insignificant; lookups are by code.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ta", "Tamil"),
    ("en", "English"),
    ("hi", "Hindi"),
    ("ml", "Malayalam"),
    ("te", "Telugu"),
];

/// Display name used when the hint is absent or unrecognized.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Resolve an optional language hint to a display name.
pub fn resolve(hint: Option<&str>) -> &'static str {
    let code = hint.unwrap_or("en");
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(DEFAULT_LANGUAGE)
}
