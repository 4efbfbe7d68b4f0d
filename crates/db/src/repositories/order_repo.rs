//! Repository for the `orders` table.

use allagro_core::status::OrderStatus;
use allagro_core::types::DbId;
use sqlx::PgPool;

use crate::models::order::{CreateOrder, Order, OrderWithClient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, client_id, product_name, category, quantity, total_amount, status, created_at";

/// Same columns qualified for the client join, plus the client's name.
const JOINED_COLUMNS: &str =
    "o.id, o.client_id, o.product_name, o.category, o.quantity, o.total_amount, \
     o.status, o.created_at, c.name AS client_name";

/// Provides CRUD operations for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new order, returning the created row.
    ///
    /// Status always starts at `pending` (table default); a missing
    /// amount is stored as 0.
    pub async fn create(pool: &PgPool, input: &CreateOrder) -> Result<Order, sqlx::Error> {
        let query = format!(
            "INSERT INTO orders (client_id, product_name, category, quantity, total_amount)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(input.client_id)
            .bind(&input.product_name)
            .bind(input.category.as_str())
            .bind(input.quantity)
            .bind(input.total_amount)
            .fetch_one(pool)
            .await
    }

    /// Find an order by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all orders with their client's name, most recent first.
    pub async fn list_with_clients(pool: &PgPool) -> Result<Vec<OrderWithClient>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM orders o
             LEFT JOIN clients c ON c.id = o.client_id
             ORDER BY o.created_at DESC"
        );
        sqlx::query_as::<_, OrderWithClient>(&query)
            .fetch_all(pool)
            .await
    }

    /// The `limit` most recent orders with their client's name.
    pub async fn recent_with_clients(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<OrderWithClient>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM orders o
             LEFT JOIN clients c ON c.id = o.client_id
             ORDER BY o.created_at DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, OrderWithClient>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Set an order's status. No side effect beyond the status field.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: OrderStatus,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET status = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Total number of orders.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(pool)
            .await
    }
}
