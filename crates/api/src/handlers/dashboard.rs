//! Handlers for the landing dashboard.

use allagro_db::models::order::OrderWithClient;
use allagro_db::models::project::ProjectWithClient;
use allagro_db::repositories::{ClientRepo, OrderRepo, ProjectRepo};
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Number of recent rows shown per entity on the dashboard.
const RECENT_LIMIT: i64 = 5;

/// Aggregated dashboard payload: entity counts plus the most recent
/// projects and orders with their client names.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub clients_total: i64,
    pub projects_total: i64,
    pub orders_total: i64,
    pub recent_projects: Vec<ProjectWithClient>,
    pub recent_orders: Vec<OrderWithClient>,
}

/// GET /api/v1/dashboard/summary
pub async fn summary(
    _principal: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let clients_total = ClientRepo::count(&state.pool).await?;
    let projects_total = ProjectRepo::count(&state.pool).await?;
    let orders_total = OrderRepo::count(&state.pool).await?;
    let recent_projects = ProjectRepo::recent_with_clients(&state.pool, RECENT_LIMIT).await?;
    let recent_orders = OrderRepo::recent_with_clients(&state.pool, RECENT_LIMIT).await?;

    Ok(Json(DataResponse {
        data: DashboardSummary {
            clients_total,
            projects_total,
            orders_total,
            recent_projects,
            recent_orders,
        },
    }))
}
