//! Decode options.
//!
//! Options can be built in code, deserialized from a partial record, or
//! loaded from environment variables. Missing fields keep their defaults.

use serde::Deserialize;
use std::env;
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Leeway must not be negative
    #[error("Invalid leeway: must be zero or greater")]
    InvalidLeeway,

    /// Environment variable parse error
    #[error("Failed to parse environment variable {name}: {reason}")]
    ParseError {
        /// Variable name
        name: String,
        /// Parser message
        reason: String,
    },
}

/// Options controlling claim checks during decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Reject tokens whose `exp` claim has elapsed.
    pub verify_expiration: bool,
    /// Allowed clock skew in seconds when checking `exp`.
    pub leeway: i64,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            verify_expiration: true,
            leeway: 0,
        }
    }
}

impl DecodeOptions {
    /// Load options from `JWT_VERIFY_EXPIRATION` and `JWT_LEEWAY`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// leeway is negative.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let options = Self {
            verify_expiration: parse_env("JWT_VERIFY_EXPIRATION", defaults.verify_expiration)?,
            leeway: parse_env("JWT_LEEWAY", defaults.leeway)?,
        };

        options.validate()?;
        Ok(options)
    }

    /// Validates the options.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.leeway < 0 {
            return Err(ConfigError::InvalidLeeway);
        }
        Ok(())
    }

    /// Adjust the allowed leeway.
    #[must_use]
    pub const fn with_leeway(mut self, seconds: i64) -> Self {
        self.leeway = seconds;
        self
    }

    /// Enable or disable the `exp` check.
    #[must_use]
    pub const fn with_verify_expiration(mut self, verify: bool) -> Self {
        self.verify_expiration = verify;
        self
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::ParseError {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}
