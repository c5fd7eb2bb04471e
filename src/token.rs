//! Token codec: builds signed tokens and splits them back into segments.
//!
//! A token is `base64url(JSON(header)) "." base64url(JSON(payload)) "."
//! base64url(signature)`. The signature covers the first two segments
//! exactly as they appear on the wire.

use serde_json::{Map, Value};
use tracing::warn;

use crate::algorithm::Algorithm;
use crate::base64url;
use crate::error::{DecodeErrorKind, JwtError, Result};
use crate::json::{decode_json, encode_json};
use crate::signer::sign;

/// Token header: `typ`, `alg`, and any caller fields, in insertion order.
pub type Header = Map<String, Value>;

/// Token payload (claims), in insertion order.
pub type Payload = Map<String, Value>;

const SEGMENT_SEPARATOR: char = '.';

/// Signs `payload` with HS256 and no extra header fields.
///
/// # Errors
///
/// Never fails for HS256; the `Result` matches [`encode_with`].
pub fn encode(payload: &Payload, key: &[u8]) -> Result<String> {
    encode_with(payload, key, Algorithm::HS256, &Header::new())
}

/// Encodes `payload` with an explicit algorithm and extra header fields.
///
/// Passing `None` as the algorithm produces an unsigned (`"none"`) token.
/// Header fields are merged after `typ` and `alg`. A `typ` field replaces
/// the default value; an `alg` field must name the signing algorithm.
///
/// # Errors
///
/// Returns [`JwtError::UnsupportedAlgorithm`](crate::JwtError::UnsupportedAlgorithm)
/// if signing is requested for a non-HMAC algorithm, or if `header_fields`
/// carries an `alg` that differs from `algorithm`.
pub fn encode_with(
    payload: &Payload,
    key: &[u8],
    algorithm: impl Into<Option<Algorithm>>,
    header_fields: &Header,
) -> Result<String> {
    let algorithm = algorithm.into().unwrap_or(Algorithm::None);

    let header_segment = encoded_header(algorithm, header_fields)?;
    let payload_segment = base64url::encode(encode_json(payload));
    let signing_input = format!("{header_segment}{SEGMENT_SEPARATOR}{payload_segment}");
    let signature_segment = encoded_signature(&signing_input, key, algorithm)?;

    Ok(format!("{signing_input}{SEGMENT_SEPARATOR}{signature_segment}"))
}

fn encoded_header(algorithm: Algorithm, header_fields: &Header) -> Result<String> {
    if let Some(alg) = header_fields.get("alg") {
        if alg.as_str() != Some(algorithm.as_str()) {
            let tag = alg.as_str().map_or_else(|| alg.to_string(), str::to_string);
            return Err(JwtError::unsupported_algorithm(tag));
        }
    }

    let mut header = Header::new();
    header.insert("typ".to_string(), Value::from("JWT"));
    header.insert("alg".to_string(), Value::from(algorithm.as_str()));
    for (name, value) in header_fields {
        header.insert(name.clone(), value.clone());
    }
    Ok(base64url::encode(encode_json(&header)))
}

fn encoded_signature(signing_input: &str, key: &[u8], algorithm: Algorithm) -> Result<String> {
    if algorithm == Algorithm::None {
        warn!("Encoding unsigned token with alg=none");
        return Ok(String::new());
    }
    let signature = sign(algorithm, signing_input.as_bytes(), key)?;
    Ok(base64url::encode(signature))
}

/// Splits a token into its raw segments.
///
/// With `verify` exactly three segments are required; without it two or
/// three are accepted. Empty segments are kept.
///
/// # Errors
///
/// Returns a segment count decode error for any other number of segments.
pub fn raw_segments(token: &str, verify: bool) -> Result<Vec<&str>> {
    let segments: Vec<&str> = token.split(SEGMENT_SEPARATOR).collect();
    let accepted = if verify {
        segments.len() == 3
    } else {
        matches!(segments.len(), 2 | 3)
    };
    if !accepted {
        return Err(DecodeErrorKind::SegmentCount.into());
    }
    Ok(segments)
}

/// A token split and decoded, before any verification.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSegments {
    /// Decoded header, `None` if the segment was JSON `null`.
    pub header: Option<Header>,
    /// Decoded payload, `None` if the segment was JSON `null`.
    pub payload: Option<Payload>,
    /// Raw signature bytes; only decoded when verifying.
    pub signature: Option<Vec<u8>>,
    /// Encoded header and payload segments joined by `.`.
    pub signing_input: String,
}

/// Splits a token and decodes its header, payload, and (when verifying)
/// signature.
///
/// # Errors
///
/// Propagates segment count and encoding errors as decode errors.
pub fn decoded_segments(token: &str, verify: bool) -> Result<DecodedSegments> {
    let segments = raw_segments(token, verify)?;
    let (header_segment, payload_segment) = (segments[0], segments[1]);

    let header = decode_json(&base64url::decode(header_segment)?)?;
    let payload = decode_json(&base64url::decode(payload_segment)?)?;
    let signature = match segments.get(2) {
        Some(crypto_segment) if verify => Some(base64url::decode(crypto_segment)?),
        _ => None,
    };

    Ok(DecodedSegments {
        header,
        payload,
        signature,
        signing_input: format!("{header_segment}{SEGMENT_SEPARATOR}{payload_segment}"),
    })
}
