/*
 * Responsibility
 * - cart_items テーブル向け SQLx 操作
 * - カートは user_id スコープ。他人の行は見えない・触れない
 */
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct CartItemRow {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i32,
}

/// Cart item joined with the product it refers to.
#[derive(Debug, Clone, FromRow)]
pub struct CartLine {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: i64,
}

pub async fn list_for_user(db: &PgPool, user_id: Uuid) -> Result<Vec<CartLine>, RepoError> {
    let rows = sqlx::query_as::<_, CartLine>(
        r#"
        SELECT
            c.id,
            c.product_id,
            p.name AS product_name,
            c.quantity,
            p.price AS unit_price
        FROM cart_items c
        JOIN products p ON p.id = c.product_id
        WHERE c.user_id = $1
        ORDER BY c.id
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

/// Insert a cart item, merging quantity when the product is already there.
pub async fn upsert(
    db: &PgPool,
    user_id: Uuid,
    product_id: i64,
    quantity: i32,
) -> Result<CartItemRow, RepoError> {
    let row = sqlx::query_as::<_, CartItemRow>(
        r#"
        INSERT INTO cart_items (user_id, product_id, quantity)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, product_id)
        DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity
        RETURNING id, product_id, quantity
        "#,
    )
    .bind(user_id)
    .bind(product_id)
    .bind(quantity)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn update_quantity(
    db: &PgPool,
    user_id: Uuid,
    item_id: i64,
    quantity: i32,
) -> Result<Option<CartItemRow>, RepoError> {
    let row = sqlx::query_as::<_, CartItemRow>(
        r#"
        UPDATE cart_items
        SET quantity = $3
        WHERE id = $1 AND user_id = $2
        RETURNING id, product_id, quantity
        "#,
    )
    .bind(item_id)
    .bind(user_id)
    .bind(quantity)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn remove(db: &PgPool, user_id: Uuid, item_id: i64) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM cart_items
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(item_id)
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn clear(db: &PgPool, user_id: Uuid) -> Result<u64, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM cart_items
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}
