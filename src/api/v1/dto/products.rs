/*
 * Responsibility
 * - Products の request/response DTO
 * - validation (形式チェック) 用の validate() を持たせる
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub image_url: Option<String>,
    pub category_id: Option<i64>,
}

impl CreateProductRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if self.name.len() > 255 {
            return Err("name must be <= 255 chars");
        }
        if self.price < 0 {
            return Err("price must not be negative");
        }
        if let Some(url) = &self.image_url
            && url.len() > 512
        {
            return Err("image_url must be <= 512 chars");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    // Tri-state:
    // - None: field missing (do not update)
    // - Some(None): null (set NULL)
    // - Some(Some(v)): set value
    pub description: Option<Option<String>>,
    pub price: Option<i64>,
    pub image_url: Option<Option<String>>,
    pub category_id: Option<Option<i64>>,
}

impl UpdateProductRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err("name cannot be empty");
        }
        if let Some(price) = self.price
            && price < 0
        {
            return Err("price must not be negative");
        }
        if let Some(Some(url)) = &self.image_url
            && url.len() > 512
        {
            return Err("image_url must be <= 512 chars");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    pub category_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub image_url: Option<String>,
    pub category_id: Option<i64>,
}
