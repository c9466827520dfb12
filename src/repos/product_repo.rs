/*
 * Responsibility
 * - products テーブル向け SQLx 操作
 * - category_id の FK (SET NULL) 前提で削除挙動を意識
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    // Minor currency units, like the rest of the money columns
    pub price: i64,
    pub image_url: Option<String>,
    pub category_id: Option<i64>,
}

pub async fn list(
    db: &PgPool,
    category_id: Option<i64>,
    limit: i64,
    offset: i64,
) -> Result<Vec<ProductRow>, RepoError> {
    let rows = sqlx::query_as::<_, ProductRow>(
        r#"
        SELECT id, name, description, price, image_url, category_id
        FROM products
        WHERE $1::bigint IS NULL OR category_id = $1
        ORDER BY id DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(category_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, product_id: i64) -> Result<Option<ProductRow>, RepoError> {
    let row = sqlx::query_as::<_, ProductRow>(
        r#"
        SELECT id, name, description, price, image_url, category_id
        FROM products
        WHERE id = $1
        "#,
    )
    .bind(product_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn create(
    db: &PgPool,
    name: &str,
    description: Option<&str>,
    price: i64,
    image_url: Option<&str>,
    category_id: Option<i64>,
) -> Result<ProductRow, RepoError> {
    let row = sqlx::query_as::<_, ProductRow>(
        r#"
        INSERT INTO products (name, description, price, image_url, category_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, description, price, image_url, category_id
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(price)
    .bind(image_url)
    .bind(category_id)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    product_id: i64,
    name: Option<&str>,
    description: Option<Option<&str>>,
    price: Option<i64>,
    image_url: Option<Option<&str>>,
    category_id: Option<Option<i64>>,
) -> Result<Option<ProductRow>, RepoError> {
    // Nullable columns use the tri-state convention:
    // Some(Some(v)) -> set to v, Some(None) -> set NULL, None -> keep
    let row = sqlx::query_as::<_, ProductRow>(
        r#"
        UPDATE products
        SET
            name = COALESCE($2, name),
            description = CASE WHEN $3 = false THEN description ELSE $4 END,
            price = COALESCE($5, price),
            image_url = CASE WHEN $6 = false THEN image_url ELSE $7 END,
            category_id = CASE WHEN $8 = false THEN category_id ELSE $9 END
        WHERE id = $1
        RETURNING id, name, description, price, image_url, category_id
        "#,
    )
    .bind(product_id)
    .bind(name)
    .bind(description.is_some())
    .bind(description.flatten())
    .bind(price)
    .bind(image_url.is_some())
    .bind(image_url.flatten())
    .bind(category_id.is_some())
    .bind(category_id.flatten())
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, product_id: i64) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM products
        WHERE id = $1
        "#,
    )
    .bind(product_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
