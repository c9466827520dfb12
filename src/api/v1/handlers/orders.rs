/*
 * Responsibility
 * - /orders 系 handler
 * - checkout はカートから注文を起こしてカートを空にする
 * - 取得は本人か ADMIN、ステータス変更は ADMIN のみ
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::v1::dto::orders::{
    CheckoutRequest, OrderItemResponse, OrderResponse, UpdateOrderStatusRequest,
};
use crate::api::v1::extractors::AuthCtxExtractor;
use crate::api::v1::handlers::users::current_user;
use crate::error::AppError;
use crate::repos::{cart_repo, order_repo};
use crate::services::auth::principal::ROLE_ADMIN;
use crate::state::AppState;

fn to_response(order: order_repo::OrderRow, items: Vec<order_repo::OrderItemRow>) -> OrderResponse {
    OrderResponse {
        id: order.id,
        total: order.total,
        address: order.address,
        status: order.status,
        created_at: order.created_at,
        items: items
            .into_iter()
            .map(|item| OrderItemResponse {
                product_id: item.product_id,
                quantity: item.quantity,
                unit_price: item.unit_price,
            })
            .collect(),
    }
}

pub async fn checkout(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Json(req): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    let user = current_user(&state, &ctx).await?;

    let lines = cart_repo::list_for_user(&state.db, user.id).await?;
    if lines.is_empty() {
        return Err(AppError::InvalidRequest("cart is empty".to_string()));
    }

    let order = order_repo::create_from_cart(&state.db, user.id, req.address.trim(), &lines).await?;

    let items = lines
        .into_iter()
        .map(|line| order_repo::OrderItemRow {
            product_id: line.product_id,
            quantity: line.quantity,
            unit_price: line.unit_price,
        })
        .collect();

    Ok((StatusCode::CREATED, Json(to_response(order, items))))
}

pub async fn list_orders(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let user = current_user(&state, &ctx).await?;

    let orders = order_repo::list_for_user(&state.db, user.id).await?;

    let mut res = Vec::with_capacity(orders.len());
    for order in orders {
        let items = order_repo::items(&state.db, order.id).await?;
        res.push(to_response(order, items));
    }

    Ok(Json(res))
}

pub async fn get_order(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(order_id): Path<i64>,
) -> Result<Json<OrderResponse>, AppError> {
    let user = current_user(&state, &ctx).await?;

    let order = order_repo::get(&state.db, order_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if order.user_id != user.id && !ctx.principal.has_authority(ROLE_ADMIN) {
        return Err(AppError::Forbidden);
    }

    let items = order_repo::items(&state.db, order.id).await?;

    Ok(Json(to_response(order, items)))
}

pub async fn update_order_status(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(order_id): Path<i64>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    ctx.require_authority(ROLE_ADMIN)?;
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    let order = order_repo::update_status(&state.db, order_id, req.status)
        .await?
        .ok_or(AppError::NotFound)?;

    let items = order_repo::items(&state.db, order.id).await?;

    Ok(Json(to_response(order, items)))
}
