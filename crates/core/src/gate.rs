//! Admin gate code and gate cookie tokens.
//!
//! The gate is a shared numeric code that unlocks the login page for a few
//! minutes. It is independent of authentication: a gate token never grants a
//! session, it only lets the holder attempt a login.
//!
//! Token format: `<expiry-unix-seconds>.<hex HMAC-SHA256(secret, "gate:<expiry>")>`.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::CoreError;

type HmacSha256 = Hmac<Sha256>;

/// Default lifetime of a gate cookie in minutes.
pub const DEFAULT_GATE_TTL_MINUTES: i64 = 15;

/// Maximum accepted length of a submitted gate code.
const MAX_CODE_LEN: usize = 32;

/// Validate the shape of a submitted gate code (non-empty, digits only).
pub fn validate_code_format(code: &str) -> Result<(), CoreError> {
    if code.is_empty() || code.len() > MAX_CODE_LEN || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::Validation(
            "Access code must be a number".to_string(),
        ));
    }
    Ok(())
}

/// Constant-time comparison of a submitted code against the configured one.
///
/// Both values are run through an HMAC keyed with `secret` and compared with
/// `verify_slice`, so timing does not leak the length of the common prefix.
pub fn code_matches(secret: &str, expected: &str, provided: &str) -> bool {
    let expected_tag = tag(secret, expected.as_bytes());
    let mut mac = new_mac(secret);
    mac.update(provided.as_bytes());
    mac.verify_slice(&expected_tag).is_ok()
}

/// Issue a gate token valid until `now + ttl_minutes`.
pub fn issue_token(secret: &str, now: i64, ttl_minutes: i64) -> String {
    let expiry = now + ttl_minutes * 60;
    let signature = tag(secret, payload(expiry).as_bytes());
    format!("{expiry}.{}", hex::encode(signature))
}

/// Returns `true` if `token` was issued with `secret` and has not expired.
pub fn verify_token(secret: &str, token: &str, now: i64) -> bool {
    let Some((expiry, signature)) = token.split_once('.') else {
        return false;
    };
    let Ok(expiry) = expiry.parse::<i64>() else {
        return false;
    };
    if expiry <= now {
        return false;
    }
    let Ok(signature) = hex::decode(signature) else {
        return false;
    };
    let mut mac = new_mac(secret);
    mac.update(payload(expiry).as_bytes());
    mac.verify_slice(&signature).is_ok()
}

fn payload(expiry: i64) -> String {
    format!("gate:{expiry}")
}

fn new_mac(secret: &str) -> HmacSha256 {
    HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length")
}

fn tag(secret: &str, data: &[u8]) -> Vec<u8> {
    let mut mac = new_mac(secret);
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "gate-test-secret";

    #[test]
    fn code_format_requires_digits() {
        assert!(validate_code_format("4821").is_ok());
        assert!(validate_code_format("").is_err());
        assert!(validate_code_format("48a1").is_err());
        assert!(validate_code_format(" 4821").is_err());
    }

    #[test]
    fn code_matches_only_exact_code() {
        assert!(code_matches(SECRET, "4821", "4821"));
        assert!(!code_matches(SECRET, "4821", "4822"));
        assert!(!code_matches(SECRET, "4821", "48210"));
    }

    #[test]
    fn issued_token_verifies_before_expiry() {
        let token = issue_token(SECRET, 1_000, 15);
        assert!(verify_token(SECRET, &token, 1_000));
        assert!(verify_token(SECRET, &token, 1_000 + 15 * 60 - 1));
    }

    #[test]
    fn expired_token_fails() {
        let token = issue_token(SECRET, 1_000, 15);
        assert!(!verify_token(SECRET, &token, 1_000 + 15 * 60));
    }

    #[test]
    fn token_from_other_secret_fails() {
        let token = issue_token("another-secret", 1_000, 15);
        assert!(!verify_token(SECRET, &token, 1_000));
    }

    #[test]
    fn extended_expiry_fails() {
        let token = issue_token(SECRET, 1_000, 15);
        let (_, signature) = token.split_once('.').unwrap();
        let forged = format!("{}.{signature}", 1_000 + 3_600 * 24);
        assert!(!verify_token(SECRET, &forged, 1_000));
    }

    #[test]
    fn malformed_tokens_fail() {
        assert!(!verify_token(SECRET, "", 0));
        assert!(!verify_token(SECRET, "true", 0));
        assert!(!verify_token(SECRET, "abc.def", 0));
        assert!(!verify_token(SECRET, "99999999999.zz", 0));
    }
}
