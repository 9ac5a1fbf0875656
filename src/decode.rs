//! Base64 audio payload decoding
//!
//! Clients send audio as a base64 string. Only the first
//! [`MAX_BASE64_CHARS`] characters are ever decoded; the rest of the
//! payload is ignored. The truncation length is part of the service's
//! compatibility profile - two requests that agree on their first
//! 10,000 characters are the same request as far as classification is
//! concerned - so it must not be changed casually.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Number of base64 characters decoded per request. The alternate
/// profile of this service truncates at 1,000; we match the 10,000
/// variant.
pub const MAX_BASE64_CHARS: usize = 10_000;

/// Decode the leading [`MAX_BASE64_CHARS`] characters of `audio_base64`
/// as standard (padded) base64.
///
/// Invalid characters and bad padding are rejected; the error is a
/// client-input problem, never a server fault.
pub fn decode_audio(audio_base64: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(truncate_chars(audio_base64, MAX_BASE64_CHARS))
}

/// Cut `s` at the `max`-th character boundary. Valid base64 is ASCII so
/// this normally equals a byte slice, but slicing by char keeps junk
/// input from splitting a multi-byte sequence and panicking.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
