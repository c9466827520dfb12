/*
 * Responsibility
 * - /categories 系 CRUD handler
 * - 変更系は ADMIN 権限を handler 先頭で明示チェック
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::v1::dto::categories::{
    CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::api::v1::extractors::AuthCtxExtractor;
use crate::error::AppError;
use crate::repos::category_repo;
use crate::services::auth::principal::ROLE_ADMIN;
use crate::state::AppState;

fn row_to_response(row: category_repo::CategoryRow) -> CategoryResponse {
    CategoryResponse {
        id: row.id,
        name: row.name,
        description: row.description,
    }
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let rows = category_repo::list(&state.db).await?;

    Ok(Json(rows.into_iter().map(row_to_response).collect()))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> Result<Json<CategoryResponse>, AppError> {
    let row = category_repo::get(&state.db, category_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(row_to_response(row)))
}

pub async fn create_category(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), AppError> {
    ctx.require_authority(ROLE_ADMIN)?;
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    let row = category_repo::create(&state.db, req.name.trim(), req.description.as_deref()).await?;

    Ok((StatusCode::CREATED, Json(row_to_response(row))))
}

pub async fn update_category(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(category_id): Path<i64>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    ctx.require_authority(ROLE_ADMIN)?;
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    let description: Option<Option<&str>> = req.description.as_ref().map(|d| d.as_deref());

    let row = category_repo::update(&state.db, category_id, req.name.as_deref(), description)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(row_to_response(row)))
}

pub async fn delete_category(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(category_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    ctx.require_authority(ROLE_ADMIN)?;

    let deleted = category_repo::delete(&state.db, category_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
