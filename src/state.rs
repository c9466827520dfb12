/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use sqlx::PgPool;

use crate::services::auth::{
    policy::AccessPolicy, principal::PrincipalStore, token_codec::TokenCodec,
    validator::TokenValidator,
};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub tokens: TokenCodec,
    pub validator: TokenValidator,
    pub principals: Arc<dyn PrincipalStore>,
    pub policy: Arc<AccessPolicy>,
}

impl AppState {
    pub fn new(
        db: PgPool,
        tokens: TokenCodec,
        validator: TokenValidator,
        principals: Arc<dyn PrincipalStore>,
        policy: Arc<AccessPolicy>,
    ) -> Self {
        Self {
            db,
            tokens,
            validator,
            principals,
            policy,
        }
    }
}
