//! Order entity model and DTOs.

use allagro_core::status::{OrderCategory, OrderStatus};
use allagro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An order row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub client_id: Option<DbId>,
    pub product_name: String,
    #[sqlx(try_from = "String")]
    pub category: OrderCategory,
    pub quantity: i32,
    pub total_amount: f64,
    #[sqlx(try_from = "String")]
    pub status: OrderStatus,
    pub created_at: Timestamp,
}

/// An order row joined with the referenced client's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderWithClient {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub order: Order,
    pub client_name: Option<String>,
}

/// DTO for creating a new order. Status always starts at `pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub client_id: Option<DbId>,
    pub product_name: String,
    pub category: OrderCategory,
    /// Must be at least 1 (`ck_orders_quantity`).
    pub quantity: i32,
    /// Defaults to 0 if omitted.
    pub total_amount: Option<f64>,
}
