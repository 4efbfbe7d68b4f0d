//! Repository for the `clients` table.

use allagro_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, ClientRef, CreateClient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, phone, region, created_at";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (name, phone, region)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.region)
            .fetch_one(pool)
            .await
    }

    /// Find a client by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all clients, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY created_at DESC");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// List id + name pairs ordered by name, for form dropdowns.
    pub async fn list_refs(pool: &PgPool) -> Result<Vec<ClientRef>, sqlx::Error> {
        sqlx::query_as::<_, ClientRef>("SELECT id, name FROM clients ORDER BY name ASC")
            .fetch_all(pool)
            .await
    }

    /// Total number of clients.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(pool)
            .await
    }
}
