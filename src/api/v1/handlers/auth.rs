/*
 * Responsibility
 * - /auth/register, /auth/login handler
 * - 認証成功でアクセストークンを発行して返す
 * - ここは公開ルート (AccessPolicy 側で Public 指定)
 */
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::api::v1::dto::auth::{LoginRequest, RegisterRequest, TokenResponse};
use crate::error::AppError;
use crate::repos::user_repo;
use crate::services::auth::{password, principal::ROLE_USER};
use crate::state::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    let password_hash = password::hash_password(&req.password).await?;

    // Duplicate username surfaces as RepoError::Conflict -> 409
    let row = user_repo::create(
        &state.db,
        req.username.trim(),
        &password_hash,
        &[ROLE_USER.to_string()],
    )
    .await?;

    let access_token = state.tokens.issue(&row.username)?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: state.tokens.ttl_seconds(),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    // Same error for unknown user and bad password, to avoid user enumeration
    let row = user_repo::get_by_username(&state.db, req.username.trim())
        .await?
        .ok_or(AppError::Unauthorized)?;

    let ok = password::verify_password(&req.password, &row.password_hash).await?;
    if !ok {
        return Err(AppError::Unauthorized);
    }

    let access_token = state.tokens.issue(&row.username)?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.ttl_seconds(),
    }))
}
