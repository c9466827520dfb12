/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 */

use std::net::SocketAddr;

use crate::error::AppError;
use crate::services::auth::principal::Principal;

/// Context attached to an authenticated request.
///
/// - `principal` is the validated identity and its authorities
/// - `origin` is the peer address when the server was started with
///   connect-info (absent in tests)
///
/// Request-scoped: created per request by the authentication stage, set at
/// most once, dropped with the request.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub principal: Principal,
    pub origin: Option<SocketAddr>,
}

impl AuthCtx {
    pub fn new(principal: Principal, origin: Option<SocketAddr>) -> Self {
        Self { principal, origin }
    }

    /// Capability check for protected operations; called at the start of
    /// each handler that needs more than authentication.
    pub fn require_authority(&self, authority: &str) -> Result<(), AppError> {
        if self.principal.has_authority(authority) {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::principal::{Principal, ROLE_ADMIN, ROLE_USER};

    #[test]
    fn require_authority_enforces_membership() {
        let ctx = AuthCtx::new(Principal::new("alice", [ROLE_USER]), None);

        assert!(ctx.require_authority(ROLE_USER).is_ok());
        assert!(matches!(
            ctx.require_authority(ROLE_ADMIN),
            Err(AppError::Forbidden)
        ));
    }
}
