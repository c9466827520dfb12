use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::AppError;

/// Claims carried by an access token.
///
/// The subject is the username of the account the token was issued for.
/// Timestamps are unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Decode failures, split into the two kinds callers react to differently.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Unparseable token or bad signature.
    #[error("malformed token: {0}")]
    Malformed(#[source] jsonwebtoken::errors::Error),

    /// Parses and verifies, but `exp` is in the past.
    #[error("token expired")]
    Expired,
}

/// HS512 access-token codec over a process-wide symmetric secret.
///
/// - Stateless: issue/decode are pure apart from reading the clock.
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: u64,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenCodec")
            .field("validation", &self.validation)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl TokenCodec {
    pub fn new(secret: &str, ttl_seconds: u64, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.leeway = leeway_seconds;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_seconds,
        }
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Issue a signed token for `subject` with the configured lifetime.
    pub fn issue(&self, subject: &str) -> Result<String, AppError> {
        self.issue_valid_for(subject, Duration::seconds(self.ttl_seconds as i64))
    }

    /// Issue a signed token for `subject` with an explicit validity window.
    ///
    /// `iat` is now, `exp` is now + validity. No side effects beyond reading
    /// the clock.
    pub fn issue_valid_for(&self, subject: &str, validity: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + validity).timestamp(),
        };

        let header = Header::new(Algorithm::HS512);
        jsonwebtoken::encode(&header, &claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "failed to sign access token");
            AppError::Internal
        })
    }

    /// Verify signature and structural well-formedness, then return the claims.
    ///
    /// `jsonwebtoken::Validation` checks the signature and `exp` in one pass;
    /// an expired-but-otherwise-valid token surfaces as `DecodeError::Expired`,
    /// everything else as `DecodeError::Malformed`.
    pub fn decode(&self, token: &str) -> Result<Claims, DecodeError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DecodeError::Expired,
                _ => DecodeError::Malformed(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new("test-secret-please-rotate", 18_000, 0)
    }

    #[test]
    fn round_trips_subject_immediately_after_issuance() {
        let codec = codec();
        let token = codec.issue("alice").unwrap();

        let claims = codec.decode(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 18_000);
    }

    #[test]
    fn decode_reports_expired_for_past_exp() {
        let codec = codec();
        let token = codec
            .issue_valid_for("alice", Duration::seconds(-10))
            .unwrap();

        assert!(matches!(codec.decode(&token), Err(DecodeError::Expired)));
    }

    #[test]
    fn decode_rejects_foreign_secret_as_malformed() {
        let token = codec().issue("alice").unwrap();
        let other = TokenCodec::new("a-different-secret", 18_000, 0);

        assert!(matches!(
            other.decode(&token),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn decode_rejects_garbage_as_malformed() {
        assert!(matches!(
            codec().decode("garbage"),
            Err(DecodeError::Malformed(_))
        ));
    }
}
