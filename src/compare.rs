//! Constant-time byte comparison for signatures.

use subtle::ConstantTimeEq;

/// Compares two byte strings without exiting early on the first mismatch.
///
/// Empty inputs never match. Lengths are not secret, so a length mismatch
/// returns immediately.
#[must_use]
pub fn secure_compare(a: &[u8], b: &[u8]) -> bool {
    if a.is_empty() || b.is_empty() || a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_inputs() {
        assert!(secure_compare(b"signature", b"signature"));
    }

    #[test]
    fn test_mismatch_anywhere() {
        assert!(!secure_compare(b"signature", b"Signature"));
        assert!(!secure_compare(b"signature", b"signaturE"));
        assert!(!secure_compare(b"signature", b"sigmature"));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(!secure_compare(b"sig", b"signature"));
    }

    #[test]
    fn test_empty_never_matches() {
        assert!(!secure_compare(b"", b""));
        assert!(!secure_compare(b"", b"a"));
        assert!(!secure_compare(b"a", b""));
    }
}
