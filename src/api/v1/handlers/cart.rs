/*
 * Responsibility
 * - /cart 系 handler
 * - 常に認証済みユーザー自身のカートだけを操作する
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::v1::dto::cart::{AddCartItemRequest, CartItemResponse, UpdateCartItemRequest};
use crate::api::v1::extractors::AuthCtxExtractor;
use crate::api::v1::handlers::users::current_user;
use crate::error::AppError;
use crate::repos::{cart_repo, product_repo};
use crate::state::AppState;

fn line_to_response(line: cart_repo::CartLine) -> CartItemResponse {
    let line_total = line.unit_price * i64::from(line.quantity);

    CartItemResponse {
        id: line.id,
        product_id: line.product_id,
        product_name: line.product_name,
        quantity: line.quantity,
        unit_price: line.unit_price,
        line_total,
    }
}

pub async fn list_cart(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<Vec<CartItemResponse>>, AppError> {
    let user = current_user(&state, &ctx).await?;

    let lines = cart_repo::list_for_user(&state.db, user.id).await?;

    Ok(Json(lines.into_iter().map(line_to_response).collect()))
}

pub async fn add_cart_item(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Json(req): Json<AddCartItemRequest>,
) -> Result<(StatusCode, Json<CartItemResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    let user = current_user(&state, &ctx).await?;

    let product = product_repo::get(&state.db, req.product_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let item = cart_repo::upsert(&state.db, user.id, product.id, req.quantity).await?;

    Ok((
        StatusCode::CREATED,
        Json(CartItemResponse {
            id: item.id,
            product_id: product.id,
            product_name: product.name,
            quantity: item.quantity,
            unit_price: product.price,
            line_total: product.price * i64::from(item.quantity),
        }),
    ))
}

pub async fn update_cart_item(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(item_id): Path<i64>,
    Json(req): Json<UpdateCartItemRequest>,
) -> Result<Json<CartItemResponse>, AppError> {
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    let user = current_user(&state, &ctx).await?;

    let item = cart_repo::update_quantity(&state.db, user.id, item_id, req.quantity)
        .await?
        .ok_or(AppError::NotFound)?;

    let product = product_repo::get(&state.db, item.product_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(CartItemResponse {
        id: item.id,
        product_id: product.id,
        product_name: product.name,
        quantity: item.quantity,
        unit_price: product.price,
        line_total: product.price * i64::from(item.quantity),
    }))
}

pub async fn remove_cart_item(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(item_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let user = current_user(&state, &ctx).await?;

    let removed = cart_repo::remove(&state.db, user.id, item_id).await?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

pub async fn clear_cart(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<StatusCode, AppError> {
    let user = current_user(&state, &ctx).await?;

    cart_repo::clear(&state.db, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
