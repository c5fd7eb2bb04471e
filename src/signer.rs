//! HMAC signing over the token signing input.

use ring::hmac;

use crate::algorithm::Algorithm;
use crate::error::{JwtError, Result};

/// Computes the HMAC of `message` under `key` for an HMAC algorithm.
///
/// # Errors
///
/// Returns [`JwtError::UnsupportedAlgorithm`] for [`Algorithm::None`].
pub fn sign(algorithm: Algorithm, message: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let hmac_algorithm = algorithm
        .hmac_algorithm()
        .ok_or_else(|| JwtError::unsupported_algorithm(algorithm.as_str()))?;

    let signing_key = hmac::Key::new(hmac_algorithm, key);
    let signature = hmac::sign(&signing_key, message);
    Ok(signature.as_ref().to_vec())
}
