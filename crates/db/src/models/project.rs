//! Project entity model and DTOs.

use allagro_core::status::{ProjectPriority, ProjectStatus};
use allagro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// Invariant (enforced by `ck_projects_completed_at`): `completed_at`
/// is non-null exactly when `status` is `completed`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub client_id: Option<DbId>,
    pub culture_type: String,
    pub description: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    #[sqlx(try_from = "String")]
    pub priority: ProjectPriority,
    pub surface_area: Option<f64>,
    pub created_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

/// A project row joined with the referenced client's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectWithClient {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub project: Project,
    pub client_name: Option<String>,
}

/// DTO for creating a new project. Status always starts at `planned`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub client_id: Option<DbId>,
    pub culture_type: String,
    pub description: Option<String>,
    /// Defaults to medium if omitted.
    pub priority: Option<ProjectPriority>,
    pub surface_area: Option<f64>,
}
