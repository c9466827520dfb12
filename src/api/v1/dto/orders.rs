/*
 * Responsibility
 * - Orders の request/response DTO
 * - address は 255 文字まで
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repos::order_repo;

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub address: String,
}

impl CheckoutRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.address.trim().is_empty() {
            return Err("address is required");
        }
        if self.address.len() > 255 {
            return Err("address must be <= 255 chars");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: i64,
}

impl UpdateOrderStatusRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        match self.status {
            order_repo::STATUS_PLACED
            | order_repo::STATUS_PAID
            | order_repo::STATUS_SHIPPED
            | order_repo::STATUS_CANCELLED => Ok(()),
            _ => Err("unknown order status"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderItemResponse {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: i64,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub total: i64,
    pub address: String,
    pub status: i64,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemResponse>,
}
