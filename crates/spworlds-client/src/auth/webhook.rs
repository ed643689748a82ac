/*
[INPUT]:  Raw webhook body, X-Body-Hash header value, card token
[OUTPUT]: Signature verdict and decoded payment callback
[POS]:    Auth layer - verification of provider-initiated callbacks
[UPDATE]: When the provider changes its callback signing scheme
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{Result, SpError};
use crate::types::PaymentWebhook;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying base64(HMAC-SHA256(token, body)) on payment callbacks
pub const BODY_HASH_HEADER: &str = "X-Body-Hash";

/// Check a callback body against its `X-Body-Hash` header
///
/// Comparison is constant-time. A header that is not valid base64 never verifies.
pub fn verify_webhook(body: &[u8], body_hash: &str, token: &str) -> bool {
    let Ok(expected) = BASE64.decode(body_hash.trim()) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(token.as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

/// Compute the hash the provider would send for `body`
pub fn sign_webhook_body(body: &[u8], token: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(token.as_bytes())
        .map_err(|e| SpError::Configuration(format!("Invalid webhook key: {e}")))?;
    mac.update(body);
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// Decode a payment callback body
pub fn parse_webhook(body: &[u8]) -> Result<PaymentWebhook> {
    serde_json::from_slice(body).map_err(|e| SpError::decoding("payment webhook", &e))
}

/// Verify then decode; an unsigned or tampered body is rejected as `Authentication`
pub fn verify_and_parse_webhook(body: &[u8], body_hash: &str, token: &str) -> Result<PaymentWebhook> {
    if !verify_webhook(body, body_hash, token) {
        return Err(SpError::Authentication);
    }
    parse_webhook(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &[u8] = br#"{"payer":"Steve","amount":42,"data":"order-17"}"#;

    #[test]
    fn test_signed_body_verifies() {
        let hash = sign_webhook_body(BODY, "card-token").unwrap();
        assert!(verify_webhook(BODY, &hash, "card-token"));
    }

    #[test]
    fn test_wrong_token_or_body_fails() {
        let hash = sign_webhook_body(BODY, "card-token").unwrap();
        assert!(!verify_webhook(BODY, &hash, "other-token"));
        assert!(!verify_webhook(b"{}", &hash, "card-token"));
        assert!(!verify_webhook(BODY, "not base64 !!", "card-token"));
    }

    #[test]
    fn test_verify_and_parse() {
        let hash = sign_webhook_body(BODY, "card-token").unwrap();
        let payload = verify_and_parse_webhook(BODY, &hash, "card-token").unwrap();
        assert_eq!(payload.payer, "Steve");
        assert_eq!(payload.amount, 42);
        assert_eq!(payload.data, "order-17");

        let err = verify_and_parse_webhook(BODY, &hash, "wrong").unwrap_err();
        assert!(matches!(err, SpError::Authentication));
    }

    #[test]
    fn test_parse_missing_field_is_decoding_error() {
        let err = parse_webhook(br#"{"payer":"Steve"}"#).unwrap_err();
        match err {
            SpError::Decoding { reason, .. } => assert!(reason.contains("amount")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
