//! Handlers for the `/projects` resource.

use allagro_core::error::CoreError;
use allagro_core::filter::ProjectFilter;
use allagro_core::lifecycle;
use allagro_core::stats::{project_stats, ProjectStats};
use allagro_core::status::ProjectStatus;
use allagro_core::types::DbId;
use allagro_db::models::project::{CreateProject, Project, ProjectWithClient};
use allagro_db::repositories::ProjectRepo;
use allagro_events::{ChangeAction, EntityKind, StaleEvent};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query params for `GET /api/v1/projects`.
///
/// Facets accept the literal `all` (the UI's default selection) as a
/// synonym for an absent parameter.
#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    pub query: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// Request body for `PUT /api/v1/projects/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectStatus {
    pub status: ProjectStatus,
}

/// Parse a facet parameter. Absent, blank, or `all` means "no constraint";
/// anything else must be a valid facet value.
fn facet<T>(value: Option<&str>) -> AppResult<Option<T>>
where
    T: std::str::FromStr<Err = CoreError>,
{
    match value {
        None | Some("") | Some("all") => Ok(None),
        Some(v) => v.parse::<T>().map(Some).map_err(AppError::Core),
    }
}

/// POST /api/v1/projects
pub async fn create(
    _principal: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    if input.culture_type.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Culture type is required".into(),
        )));
    }
    if input.surface_area.is_some_and(|area| area <= 0.0) {
        return Err(AppError::Core(CoreError::Validation(
            "Surface area must be positive".into(),
        )));
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;
    state.event_bus.publish(StaleEvent::new(
        EntityKind::Project,
        ChangeAction::Created,
        project.id,
    ));
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
///
/// The whole list is fetched with client names and filtered in memory,
/// mirroring the projects screen, which refilters its full snapshot on
/// every keystroke or facet change.
pub async fn list(
    _principal: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListProjectsQuery>,
) -> AppResult<Json<Vec<ProjectWithClient>>> {
    let filter = ProjectFilter {
        query: params.query,
        status: facet(params.status.as_deref())?,
        priority: facet(params.priority.as_deref())?,
    };

    let mut projects = ProjectRepo::list_with_clients(&state.pool).await?;
    projects.retain(|row| {
        filter.matches(
            &row.project.culture_type,
            row.client_name.as_deref(),
            row.project.status,
            row.project.priority,
        )
    });
    Ok(Json(projects))
}

/// GET /api/v1/projects/stats
///
/// Derived counters over the full project list, recomputed per request.
pub async fn stats(
    _principal: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ProjectStats>>> {
    let projects = ProjectRepo::list_with_clients(&state.pool).await?;
    let stats = project_stats(projects.iter().map(|row| &row.project.status));
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    _principal: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}/status
///
/// Transitions are unconditional. Completing stamps `completed_at`;
/// leaving `completed` clears it. The new status is only reported after
/// the store confirms the write.
pub async fn update_status(
    _principal: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProjectStatus>,
) -> AppResult<Json<Project>> {
    let completed_at = lifecycle::completed_at_after(input.status, chrono::Utc::now());
    let project = ProjectRepo::update_status(&state.pool, id, input.status, completed_at)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    state.event_bus.publish(StaleEvent::new(
        EntityKind::Project,
        ChangeAction::Updated,
        project.id,
    ));
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Hard delete, no undo beyond the client-side confirmation step.
pub async fn delete(
    _principal: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        state.event_bus.publish(StaleEvent::new(
            EntityKind::Project,
            ChangeAction::Deleted,
            id,
        ));
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
