//! Handlers for the `/orders` resource.

use allagro_core::error::CoreError;
use allagro_core::stats::{order_stats, OrderStats};
use allagro_core::status::OrderStatus;
use allagro_core::types::DbId;
use allagro_db::models::order::{CreateOrder, Order, OrderWithClient};
use allagro_db::repositories::OrderRepo;
use allagro_events::{ChangeAction, EntityKind, StaleEvent};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /api/v1/orders/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatus {
    pub status: OrderStatus,
}

/// POST /api/v1/orders
pub async fn create(
    _principal: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateOrder>,
) -> AppResult<(StatusCode, Json<Order>)> {
    if input.product_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Product name is required".into(),
        )));
    }
    if input.quantity < 1 {
        return Err(AppError::Core(CoreError::Validation(
            "Quantity must be at least 1".into(),
        )));
    }
    if input.total_amount.is_some_and(|amount| amount < 0.0) {
        return Err(AppError::Core(CoreError::Validation(
            "Total amount must not be negative".into(),
        )));
    }

    let order = OrderRepo::create(&state.pool, &input).await?;
    state.event_bus.publish(StaleEvent::new(
        EntityKind::Order,
        ChangeAction::Created,
        order.id,
    ));
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/v1/orders
pub async fn list(
    _principal: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<OrderWithClient>>> {
    let orders = OrderRepo::list_with_clients(&state.pool).await?;
    Ok(Json(orders))
}

/// GET /api/v1/orders/stats
///
/// Derived counters over the full order list, recomputed per request.
pub async fn stats(
    _principal: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<OrderStats>>> {
    let orders = OrderRepo::list_with_clients(&state.pool).await?;
    let stats = order_stats(
        orders
            .iter()
            .map(|row| (&row.order.status, row.order.total_amount)),
    );
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/orders/{id}
pub async fn get_by_id(
    _principal: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Order>> {
    let order = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Order", id }))?;
    Ok(Json(order))
}

/// PUT /api/v1/orders/{id}/status
///
/// Transitions are unconditional and carry no side effect beyond the
/// status field.
pub async fn update_status(
    _principal: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrderStatus>,
) -> AppResult<Json<Order>> {
    let order = OrderRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Order", id }))?;

    state.event_bus.publish(StaleEvent::new(
        EntityKind::Order,
        ChangeAction::Updated,
        order.id,
    ));
    Ok(Json(order))
}
