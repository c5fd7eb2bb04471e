//! URL-safe, unpadded base64 used for every token segment.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;

use crate::error::{DecodeErrorKind, Result};

/// Encodes bytes as base64url without padding.
#[must_use]
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes a base64url segment, padded or not.
///
/// The segment is mapped back to the standard alphabet and re-padded to a
/// multiple of four before a strict decode. Aligned input gets no padding.
pub fn decode(segment: &str) -> Result<Vec<u8>> {
    let padding = (4 - segment.len() % 4) % 4;
    let mut standard = String::with_capacity(segment.len() + padding);
    standard.extend(segment.chars().map(|c| match c {
        '-' => '+',
        '_' => '/',
        other => other,
    }));
    standard.extend(std::iter::repeat('=').take(padding));

    STANDARD
        .decode(standard)
        .map_err(|_| DecodeErrorKind::InvalidEncoding.into())
}
