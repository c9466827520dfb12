/*
 * Responsibility
 * - categories テーブル向け SQLx 操作
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

pub async fn list(db: &PgPool) -> Result<Vec<CategoryRow>, RepoError> {
    let rows = sqlx::query_as::<_, CategoryRow>(
        r#"
        SELECT id, name, description
        FROM categories
        ORDER BY name
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, category_id: i64) -> Result<Option<CategoryRow>, RepoError> {
    let row = sqlx::query_as::<_, CategoryRow>(
        r#"
        SELECT id, name, description
        FROM categories
        WHERE id = $1
        "#,
    )
    .bind(category_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn create(
    db: &PgPool,
    name: &str,
    description: Option<&str>,
) -> Result<CategoryRow, RepoError> {
    let row = sqlx::query_as::<_, CategoryRow>(
        r#"
        INSERT INTO categories (name, description)
        VALUES ($1, $2)
        RETURNING id, name, description
        "#,
    )
    .bind(name)
    .bind(description)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    category_id: i64,
    name: Option<&str>,
    description: Option<Option<&str>>,
) -> Result<Option<CategoryRow>, RepoError> {
    // description: Some(Some(v)) -> set to v
    // description: Some(None)    -> set to NULL
    // description: None          -> do not update
    let row = sqlx::query_as::<_, CategoryRow>(
        r#"
        UPDATE categories
        SET
            name = COALESCE($2, name),
            description = CASE
                WHEN $3 = false THEN description
                ELSE $4
            END
        WHERE id = $1
        RETURNING id, name, description
        "#,
    )
    .bind(category_id)
    .bind(name)
    .bind(description.is_some())
    .bind(description.flatten())
    .fetch_optional(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn delete(db: &PgPool, category_id: i64) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM categories
        WHERE id = $1
        "#,
    )
    .bind(category_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
