//! Error taxonomy for token encoding and decoding.
//!
//! Every internal failure (base64, JSON, HMAC) is mapped at the nearest
//! boundary into one of three kinds carrying a fixed message, so callers
//! never see why a particular byte failed to decode.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, JwtError>;

/// Reason a token could not be decoded.
///
/// The `Display` text of each variant is fixed and safe to return to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// No token was supplied.
    NilToken,
    /// Token did not split into the accepted number of segments.
    SegmentCount,
    /// A segment was not valid base64url or JSON.
    InvalidEncoding,
    /// Header `alg` is not an HMAC algorithm.
    AlgorithmNotSupported,
    /// Signature did not match, or could not be computed.
    SignatureVerification,
    /// `exp` is present but not a number.
    InvalidExpiration,
}

impl DecodeErrorKind {
    /// Fixed, client-safe message for this reason.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NilToken => "Nil JSON web token",
            Self::SegmentCount => "Not enough or too many segments",
            Self::InvalidEncoding => "Invalid segment encoding",
            Self::AlgorithmNotSupported => "Algorithm not supported",
            Self::SignatureVerification => "Signature verification failed",
            Self::InvalidExpiration => "Invalid expiration claim",
        }
    }
}

impl std::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Errors produced by [`encode`](crate::encode) and [`decode`](crate::decode).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JwtError {
    /// Token is malformed, unsigned, tampered with, or uses an unsupported algorithm.
    #[error("{0}")]
    Decode(DecodeErrorKind),

    /// Token was valid but its `exp` claim has elapsed beyond the leeway.
    #[error("Signature has expired")]
    ExpiredSignature,

    /// Caller asked to sign with an algorithm outside HS256/HS384/HS512.
    #[error("Unsupported signing method")]
    UnsupportedAlgorithm(String),
}

/// Stable error codes for API responses and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// See [`JwtError::Decode`].
    Decode,
    /// See [`JwtError::ExpiredSignature`].
    ExpiredSignature,
    /// See [`JwtError::UnsupportedAlgorithm`].
    UnsupportedAlgorithm,
}

impl ErrorCode {
    /// Get the string representation of the error code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Decode => "JWT_DECODE_ERROR",
            Self::ExpiredSignature => "JWT_EXPIRED_SIGNATURE",
            Self::UnsupportedAlgorithm => "JWT_UNSUPPORTED_ALGORITHM",
        }
    }
}

impl JwtError {
    /// Create a decode error.
    #[must_use]
    pub const fn decode(kind: DecodeErrorKind) -> Self {
        JwtError::Decode(kind)
    }

    /// Create an unsupported algorithm error.
    #[must_use]
    pub fn unsupported_algorithm(tag: impl Into<String>) -> Self {
        JwtError::UnsupportedAlgorithm(tag.into())
    }

    /// Error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            JwtError::Decode(_) => ErrorCode::Decode,
            JwtError::ExpiredSignature => ErrorCode::ExpiredSignature,
            JwtError::UnsupportedAlgorithm(_) => ErrorCode::UnsupportedAlgorithm,
        }
    }

    /// Decode reason, if this is a decode error.
    #[must_use]
    pub const fn decode_kind(&self) -> Option<DecodeErrorKind> {
        match self {
            JwtError::Decode(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Whether the token was well-formed but stale.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        matches!(self, JwtError::ExpiredSignature)
    }
}

impl From<DecodeErrorKind> for JwtError {
    fn from(kind: DecodeErrorKind) -> Self {
        JwtError::Decode(kind)
    }
}
