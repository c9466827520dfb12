/*
 * Responsibility
 * - /products 系 CRUD handler
 * - 参照は認証のみ、変更系は ADMIN 権限を handler 先頭で明示チェック
 */
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::v1::dto::products::{
    CreateProductRequest, ProductListQuery, ProductResponse, UpdateProductRequest,
};
use crate::api::v1::extractors::AuthCtxExtractor;
use crate::error::AppError;
use crate::repos::{category_repo, product_repo};
use crate::services::auth::principal::ROLE_ADMIN;
use crate::state::AppState;

fn row_to_response(row: product_repo::ProductRow) -> ProductResponse {
    ProductResponse {
        id: row.id,
        name: row.name,
        description: row.description,
        price: row.price,
        image_url: row.image_url,
        category_id: row.category_id,
    }
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let rows = product_repo::list(&state.db, query.category_id, 100, 0).await?;

    Ok(Json(rows.into_iter().map(row_to_response).collect()))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<ProductResponse>, AppError> {
    let row = product_repo::get(&state.db, product_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(row_to_response(row)))
}

pub async fn create_product(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    ctx.require_authority(ROLE_ADMIN)?;
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    if let Some(category_id) = req.category_id {
        category_repo::get(&state.db, category_id)
            .await?
            .ok_or_else(|| AppError::InvalidRequest("unknown category_id".to_string()))?;
    }

    let row = product_repo::create(
        &state.db,
        req.name.trim(),
        req.description.as_deref(),
        req.price,
        req.image_url.as_deref(),
        req.category_id,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row_to_response(row))))
}

pub async fn update_product(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(product_id): Path<i64>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    ctx.require_authority(ROLE_ADMIN)?;
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    // Tri-state fields pass through as Option<Option<_>>
    let description: Option<Option<&str>> = req.description.as_ref().map(|d| d.as_deref());
    let image_url: Option<Option<&str>> = req.image_url.as_ref().map(|u| u.as_deref());

    let row = product_repo::update(
        &state.db,
        product_id,
        req.name.as_deref(),
        description,
        req.price,
        image_url,
        req.category_id,
    )
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(Json(row_to_response(row)))
}

pub async fn delete_product(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(product_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    ctx.require_authority(ROLE_ADMIN)?;

    let deleted = product_repo::delete(&state.db, product_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
