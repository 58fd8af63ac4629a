//! Session token representation and cookie wire form.
//!
//! # Responsibilities
//! - Define the token the authentication subsystem issues
//! - Encode/decode the base64(JSON) value carried in the session cookie
//!
//! # Design Decisions
//! - Claims are an ordered list of (type, value) pairs; order is preserved
//!   through renewal
//! - Tokens are replaced, never mutated in place
//! - A cookie value that fails to decode is reported to the caller, which
//!   treats it as "no session event" rather than an error response

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One principal claim, e.g. `("name-identifier", "dev@local.test")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl Claim {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// Authenticated session token. Issued by the authentication subsystem on
/// login; replaced by the continuity manager while still valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionToken {
    /// Ordered principal claims.
    pub claims: Vec<Claim>,

    pub issued_at: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,

    /// True for "remember me" sessions that outlive the browser session.
    pub is_persistent: bool,

    /// Opaque context supplied by the authentication subsystem.
    pub context: String,
}

/// Errors decoding the cookie wire form.
#[derive(Debug, thiserror::Error)]
pub enum TokenDecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid token payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl SessionToken {
    /// Serialize into the cookie value: URL-safe base64 over JSON.
    pub fn encode(&self) -> String {
        // Serialization of a plain struct with string/timestamp fields
        // cannot fail.
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    /// Parse a cookie value produced by `encode`.
    pub fn decode(value: &str) -> Result<Self, TokenDecodeError> {
        let bytes = URL_SAFE_NO_PAD.decode(value.as_bytes())?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token() -> SessionToken {
        let now = Utc::now();
        SessionToken {
            claims: vec![
                Claim::new("name-identifier", "dev@local.test"),
                Claim::new("identity-provider", "DEV"),
            ],
            issued_at: now,
            valid_to: now + Duration::minutes(60),
            is_persistent: true,
            context: "ctx-1".to_string(),
        }
    }

    #[test]
    fn test_cookie_codec_preserves_claim_order() {
        let original = token();
        let decoded = SessionToken::decode(&original.encode()).unwrap();
        assert_eq!(decoded, original);
        assert_eq!(decoded.claims[0].kind, "name-identifier");
        assert_eq!(decoded.claims[1].kind, "identity-provider");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(SessionToken::decode("not!valid!base64!").is_err());
        let not_json = URL_SAFE_NO_PAD.encode(b"plain text");
        assert!(SessionToken::decode(&not_json).is_err());
    }
}
