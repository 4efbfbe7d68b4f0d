//! Route definitions for the `/projects` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /             -> list (?query, ?status, ?priority)
/// POST   /             -> create
/// GET    /stats        -> derived metrics
/// GET    /{id}         -> get_by_id
/// PUT    /{id}/status  -> update_status
/// DELETE /{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/stats", get(project::stats))
        .route(
            "/{id}",
            get(project::get_by_id).delete(project::delete),
        )
        .route("/{id}/status", put(project::update_status))
}
