//! Property-based tests for session tokens

use std::time::Duration;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use proptest::prelude::*;
use ticketdesk::backend::auth::{SessionKeys, TokenError};
use uuid::Uuid;

const HOUR: Duration = Duration::from_secs(60 * 60);

/// HS256 signatures are 32 bytes
const SIGNATURE_BITS: usize = 256;

fn keys() -> SessionKeys {
    SessionKeys::new(b"property-secret", HOUR)
}

/// Flip one bit of the decoded signature and re-encode it
fn flip_signature_bit(token: &str, bit: usize) -> String {
    let (unsigned, signature) = token.rsplit_once('.').expect("signed token");
    let mut bytes = URL_SAFE_NO_PAD.decode(signature).expect("base64url signature");
    bytes[bit / 8] ^= 1 << (bit % 8);
    format!("{}.{}", unsigned, URL_SAFE_NO_PAD.encode(&bytes))
}

#[test]
fn test_every_signature_bit_flip_is_rejected() {
    let keys = keys();
    let token = keys.issue(Uuid::new_v4(), "a@x.com").unwrap();

    for bit in 0..SIGNATURE_BITS {
        let tampered = flip_signature_bit(&token, bit);
        assert!(
            matches!(keys.verify(&tampered), Err(TokenError::Invalid(_))),
            "bit {bit}"
        );
    }
}

proptest! {
    #[test]
    fn test_issue_verify_round_trip(email in ".*", id in any::<u128>()) {
        let keys = keys();
        let user_id = Uuid::from_u128(id);

        let token = keys.issue(user_id, &email).unwrap();
        let claims = keys.verify(&token).unwrap();

        prop_assert_eq!(claims.user_id().unwrap(), user_id);
        prop_assert_eq!(claims.exp - claims.iat, HOUR.as_secs());
        prop_assert_eq!(claims.email, email);
    }

    #[test]
    fn test_signature_bit_flip_is_rejected(email in ".*", bit in 0..SIGNATURE_BITS) {
        let keys = keys();
        let token = keys.issue(Uuid::new_v4(), &email).unwrap();

        let tampered = flip_signature_bit(&token, bit);
        prop_assert!(matches!(keys.verify(&tampered), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_arbitrary_input_is_rejected(token in ".*") {
        prop_assert!(keys().verify(&token).is_err());
    }
}
