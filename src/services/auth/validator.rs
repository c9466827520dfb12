use crate::services::auth::principal::Principal;
use crate::services::auth::token_codec::TokenCodec;

/// Checks a token against the principal it is being presented for.
///
/// Pure: no mutation, no I/O. Fails closed on any decode error.
#[derive(Debug, Clone)]
pub struct TokenValidator {
    codec: TokenCodec,
}

impl TokenValidator {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// True iff the token decodes (signature ok, not expired) and its subject
    /// matches the principal's identity.
    pub fn validate(&self, token: &str, principal: &Principal) -> bool {
        match self.codec.decode(token) {
            Ok(claims) => claims.sub == principal.identity,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::services::auth::principal::ROLE_USER;

    fn codec() -> TokenCodec {
        TokenCodec::new("validator-test-secret", 18_000, 0)
    }

    #[test]
    fn accepts_matching_subject() {
        let codec = codec();
        let token = codec.issue("alice").unwrap();
        let validator = TokenValidator::new(codec);

        assert!(validator.validate(&token, &Principal::new("alice", [ROLE_USER])));
    }

    #[test]
    fn rejects_subject_mismatch_even_when_not_expired() {
        let codec = codec();
        let token = codec.issue("alice").unwrap();
        let validator = TokenValidator::new(codec);

        assert!(!validator.validate(&token, &Principal::new("bob", [ROLE_USER])));
    }

    #[test]
    fn rejects_expired_token_for_matching_subject() {
        let codec = codec();
        let token = codec
            .issue_valid_for("alice", Duration::seconds(-5))
            .unwrap();
        let validator = TokenValidator::new(codec);

        assert!(!validator.validate(&token, &Principal::new("alice", [ROLE_USER])));
    }

    #[test]
    fn rejects_garbage_token() {
        let validator = TokenValidator::new(codec());

        assert!(!validator.validate("garbage", &Principal::new("alice", [ROLE_USER])));
    }
}
