//! Signing algorithm tags.

use std::fmt;
use std::str::FromStr;

use ring::hmac;

use crate::error::JwtError;

/// Token signing algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// HMAC with SHA-256
    #[default]
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,
    /// Unsigned token
    None,
}

impl Algorithm {
    /// Get algorithm name for the token header.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
            Self::None => "none",
        }
    }

    /// Whether this algorithm produces a signature.
    #[must_use]
    pub const fn is_hmac(&self) -> bool {
        !matches!(self, Self::None)
    }

    pub(crate) fn hmac_algorithm(self) -> Option<hmac::Algorithm> {
        match self {
            Self::HS256 => Some(hmac::HMAC_SHA256),
            Self::HS384 => Some(hmac::HMAC_SHA384),
            Self::HS512 => Some(hmac::HMAC_SHA512),
            Self::None => None,
        }
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    /// Parse an exact header tag. Unknown tags are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HS256" => Ok(Self::HS256),
            "HS384" => Ok(Self::HS384),
            "HS512" => Ok(Self::HS512),
            "none" => Ok(Self::None),
            other => Err(JwtError::unsupported_algorithm(other)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        for alg in [
            Algorithm::HS256,
            Algorithm::HS384,
            Algorithm::HS512,
            Algorithm::None,
        ] {
            assert_eq!(alg.as_str().parse::<Algorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_tags() {
        for tag in ["RS256", "hs256", "None", "", "ES256"] {
            assert_eq!(
                tag.parse::<Algorithm>().unwrap_err(),
                JwtError::UnsupportedAlgorithm(tag.to_string())
            );
        }
    }

    #[test]
    fn test_default_is_hs256() {
        assert_eq!(Algorithm::default(), Algorithm::HS256);
        assert!(Algorithm::HS512.is_hmac());
        assert!(!Algorithm::None.is_hmac());
    }
}
