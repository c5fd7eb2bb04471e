//! Property-based tests for the `exp` check.
//!
//! Property 5: Expiration Boundary
//! Property 6: Expiration Options

use hmac_jwt::{encode, DecodeOptions, Decoder, FixedClock, JwtError, Payload};
use proptest::prelude::*;
use serde_json::Value;

/// Generate a plausible current time.
fn arb_now() -> impl Strategy<Value = i64> {
    1_000_000_000i64..4_000_000_000i64
}

fn payload_expiring_at(exp: i64) -> Payload {
    let mut payload = Payload::new();
    payload.insert("sub".to_string(), Value::from("user-123"));
    payload.insert("exp".to_string(), Value::from(exp));
    payload
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 5: Expiration Boundary
    ///
    /// A token expiring `age` seconds ago is accepted exactly when
    /// `exp > now - leeway`, i.e. when `age < leeway`.
    #[test]
    fn prop_expiration_boundary(
        now in arb_now(),
        age in -1000i64..1000,
        leeway in 0i64..1000,
    ) {
        let token = encode(&payload_expiring_at(now - age), b"secret").unwrap();
        let clock = FixedClock(now);

        let result = Decoder::new()
            .key(b"secret")
            .clock(&clock)
            .options(DecodeOptions::default().with_leeway(leeway))
            .decode(token.as_str());

        if age < leeway {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err(), JwtError::ExpiredSignature);
        }
    }

    /// Property 6: Expiration Options
    ///
    /// With the `exp` check disabled, any expiration decodes.
    #[test]
    fn prop_expiration_disabled(now in arb_now(), age in 0i64..1_000_000) {
        let token = encode(&payload_expiring_at(now - age), b"secret").unwrap();
        let clock = FixedClock(now);

        let data = Decoder::new()
            .key(b"secret")
            .clock(&clock)
            .options(DecodeOptions::default().with_verify_expiration(false))
            .decode(token.as_str())
            .unwrap();
        prop_assert_eq!(data.payload["exp"].as_i64(), Some(now - age));
    }
}

#[test]
fn test_expired_one_second_ago() {
    let now = chrono::Utc::now().timestamp();
    let token = encode(&payload_expiring_at(now - 1), b"secret").unwrap();

    let err = Decoder::new().key(b"secret").decode(token.as_str()).unwrap_err();
    assert!(err.is_expired());
    assert_eq!(err.to_string(), "Signature has expired");
}

#[test]
fn test_leeway_covers_recent_expiry() {
    let clock = FixedClock(1_700_000_000);
    let token = encode(&payload_expiring_at(1_700_000_000 - 1), b"secret").unwrap();

    let data = Decoder::new()
        .key(b"secret")
        .clock(&clock)
        .options(DecodeOptions::default().with_leeway(2))
        .decode(token.as_str())
        .unwrap();
    assert_eq!(data.payload["sub"], "user-123");
}

#[test]
fn test_options_from_partial_record() {
    let options: DecodeOptions = serde_json::from_str(r#"{"leeway": 2}"#).unwrap();
    assert!(options.verify_expiration);
    assert_eq!(options.leeway, 2);
}
