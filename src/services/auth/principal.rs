use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::repos::{error::RepoError, user_repo};

pub const ROLE_USER: &str = "USER";
pub const ROLE_ADMIN: &str = "ADMIN";

/// The authenticated identity and its granted authorities.
///
/// Owned by the user store; the auth pipeline only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub identity: String,
    pub authorities: HashSet<String>,
}

impl Principal {
    pub fn new<I, S>(identity: impl Into<String>, authorities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identity: identity.into(),
            authorities: authorities.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.contains(authority)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PrincipalStoreError {
    #[error("principal lookup failed: {0}")]
    Lookup(#[from] RepoError),
}

/// Resolve a token subject to a stored principal.
///
/// `Ok(None)` means the identity has no matching principal; backend failures
/// surface as `Err` and callers must not authenticate on them.
#[async_trait]
pub trait PrincipalStore: Send + Sync {
    async fn load_by_identity(
        &self,
        identity: &str,
    ) -> Result<Option<Principal>, PrincipalStoreError>;
}

/// Postgres-backed store over the `users` table.
#[derive(Clone)]
pub struct PgPrincipalStore {
    db: PgPool,
}

impl PgPrincipalStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PrincipalStore for PgPrincipalStore {
    async fn load_by_identity(
        &self,
        identity: &str,
    ) -> Result<Option<Principal>, PrincipalStoreError> {
        let row = user_repo::get_by_username(&self.db, identity).await?;

        Ok(row.map(|u| Principal::new(u.username, u.roles)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_carries_identity_and_authorities() {
        let p = Principal::new("alice", [ROLE_USER]);

        assert_eq!(p.identity, "alice");
        assert!(p.has_authority(ROLE_USER));
        assert!(!p.has_authority(ROLE_ADMIN));
    }
}
