/*
 * Responsibility
 * - /users/me handler
 * - AuthCtx の identity から自分のプロフィールを返す
 */
use axum::Json;
use axum::extract::State;

use crate::api::v1::dto::users::UserResponse;
use crate::api::v1::extractors::{AuthCtx, AuthCtxExtractor};
use crate::error::AppError;
use crate::repos::user_repo::{self, UserRow};
use crate::state::AppState;

/// Resolve the authenticated context to the stored user row.
///
/// A token can outlive its account; a missing row means the credentials no
/// longer map to anyone, so it is treated as unauthorized.
pub(crate) async fn current_user(state: &AppState, ctx: &AuthCtx) -> Result<UserRow, AppError> {
    user_repo::get_by_username(&state.db, &ctx.principal.identity)
        .await?
        .ok_or(AppError::Unauthorized)
}

pub async fn me(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<UserResponse>, AppError> {
    let row = current_user(&state, &ctx).await?;

    Ok(Json(UserResponse {
        id: row.id,
        username: row.username,
        roles: row.roles,
    }))
}
