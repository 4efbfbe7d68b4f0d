//! Repository for the `projects` table.

use allagro_core::status::ProjectStatus;
use allagro_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectWithClient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, client_id, culture_type, description, status, priority, surface_area, \
     created_at, completed_at";

/// Same columns qualified for the client join, plus the client's name.
const JOINED_COLUMNS: &str =
    "p.id, p.client_id, p.culture_type, p.description, p.status, p.priority, \
     p.surface_area, p.created_at, p.completed_at, c.name AS client_name";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// Status always starts at `planned` (table default); priority
    /// defaults to `medium` if omitted.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (client_id, culture_type, description, priority, surface_area)
             VALUES ($1, $2, $3, COALESCE($4, 'medium'), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.client_id)
            .bind(&input.culture_type)
            .bind(&input.description)
            .bind(input.priority.map(|p| p.as_str()))
            .bind(input.surface_area)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects with their client's name, most recent first.
    pub async fn list_with_clients(pool: &PgPool) -> Result<Vec<ProjectWithClient>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM projects p
             LEFT JOIN clients c ON c.id = p.client_id
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, ProjectWithClient>(&query)
            .fetch_all(pool)
            .await
    }

    /// The `limit` most recent projects with their client's name.
    pub async fn recent_with_clients(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<ProjectWithClient>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM projects p
             LEFT JOIN clients c ON c.id = p.client_id
             ORDER BY p.created_at DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, ProjectWithClient>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Set a project's status together with its `completed_at` side
    /// effect, in one statement so a failed write changes nothing.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ProjectStatus,
        completed_at: Option<Timestamp>,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET status = $2, completed_at = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(completed_at)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of projects.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await
    }
}
