//! Route definitions for the `/orders` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::order;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET  /             -> list
/// POST /             -> create
/// GET  /stats        -> derived metrics
/// GET  /{id}         -> get_by_id
/// PUT  /{id}/status  -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(order::list).post(order::create))
        .route("/stats", get(order::stats))
        .route("/{id}", get(order::get_by_id))
        .route("/{id}/status", put(order::update_status))
}
