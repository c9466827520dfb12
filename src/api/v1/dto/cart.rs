/*
 * Responsibility
 * - Cart の request/response DTO
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AddCartItemRequest {
    pub product_id: i64,
    pub quantity: i32,
}

impl AddCartItemRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.quantity < 1 {
            return Err("quantity must be >= 1");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}

impl UpdateCartItemRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.quantity < 1 {
            return Err("quantity must be >= 1");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct CartItemResponse {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: i64,
    pub line_total: i64,
}
