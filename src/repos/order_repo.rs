/*
 * Responsibility
 * - orders / order_items テーブル向け SQLx 操作
 * - checkout はトランザクション（order + items + カート削除を原子的に）
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::cart_repo::CartLine;
use crate::repos::error::RepoError;

// Order status codes, matching the numeric status column.
pub const STATUS_PLACED: i64 = 0;
pub const STATUS_PAID: i64 = 1;
pub const STATUS_SHIPPED: i64 = 2;
pub const STATUS_CANCELLED: i64 = 3;

#[derive(Debug, Clone, FromRow)]
pub struct OrderRow {
    pub id: i64,
    pub user_id: Uuid,
    pub total: i64,
    pub address: String,
    pub status: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct OrderItemRow {
    pub product_id: i64,
    pub quantity: i32,
    // Price captured at checkout time, independent of later product edits
    pub unit_price: i64,
}

/// Create an order from the user's cart lines and empty the cart, atomically.
pub async fn create_from_cart(
    db: &PgPool,
    user_id: Uuid,
    address: &str,
    lines: &[CartLine],
) -> Result<OrderRow, RepoError> {
    let total: i64 = lines
        .iter()
        .map(|line| line.unit_price * i64::from(line.quantity))
        .sum();

    let mut tx = db.begin().await?;

    let order = sqlx::query_as::<_, OrderRow>(
        r#"
        INSERT INTO orders (user_id, total, address, status)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, total, address, status, created_at
        "#,
    )
    .bind(user_id)
    .bind(total)
    .bind(address)
    .bind(STATUS_PLACED)
    .fetch_one(&mut *tx)
    .await?;

    for line in lines {
        sqlx::query(
            r#"
            INSERT INTO order_items (order_id, product_id, quantity, unit_price)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(order.id)
        .bind(line.product_id)
        .bind(line.quantity)
        .bind(line.unit_price)
        .execute(&mut *tx)
        .await?;
    }

    sqlx::query(
        r#"
        DELETE FROM cart_items
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(order)
}

pub async fn list_for_user(db: &PgPool, user_id: Uuid) -> Result<Vec<OrderRow>, RepoError> {
    let rows = sqlx::query_as::<_, OrderRow>(
        r#"
        SELECT id, user_id, total, address, status, created_at
        FROM orders
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, order_id: i64) -> Result<Option<OrderRow>, RepoError> {
    let row = sqlx::query_as::<_, OrderRow>(
        r#"
        SELECT id, user_id, total, address, status, created_at
        FROM orders
        WHERE id = $1
        "#,
    )
    .bind(order_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn items(db: &PgPool, order_id: i64) -> Result<Vec<OrderItemRow>, RepoError> {
    let rows = sqlx::query_as::<_, OrderItemRow>(
        r#"
        SELECT product_id, quantity, unit_price
        FROM order_items
        WHERE order_id = $1
        ORDER BY product_id
        "#,
    )
    .bind(order_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn update_status(
    db: &PgPool,
    order_id: i64,
    status: i64,
) -> Result<Option<OrderRow>, RepoError> {
    let row = sqlx::query_as::<_, OrderRow>(
        r#"
        UPDATE orders
        SET status = $2
        WHERE id = $1
        RETURNING id, user_id, total, address, status, created_at
        "#,
    )
    .bind(order_id)
    .bind(status)
    .fetch_optional(db)
    .await?;

    Ok(row)
}
