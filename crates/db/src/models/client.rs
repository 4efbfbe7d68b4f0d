//! Client entity model and DTOs.

use allagro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub phone: Option<String>,
    pub region: Option<String>,
    pub created_at: Timestamp,
}

/// Minimal id + name pair for form dropdowns.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientRef {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClient {
    pub name: String,
    pub phone: Option<String>,
    pub region: Option<String>,
}
