//! Handlers for the `/clients` resource.

use allagro_core::error::CoreError;
use allagro_db::models::client::{Client, ClientRef, CreateClient};
use allagro_db::repositories::ClientRepo;
use allagro_events::{ChangeAction, EntityKind, StaleEvent};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/clients
pub async fn create(
    _principal: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Client name is required".into(),
        )));
    }

    let client = ClientRepo::create(&state.pool, &input).await?;
    state.event_bus.publish(StaleEvent::new(
        EntityKind::Client,
        ChangeAction::Created,
        client.id,
    ));
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/v1/clients
pub async fn list(
    _principal: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}

/// GET /api/v1/clients/refs
///
/// Id + name pairs for the client dropdowns on the project and order
/// forms.
pub async fn list_refs(
    _principal: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ClientRef>>> {
    Ok(Json(ClientRepo::list_refs(&state.pool).await?))
}
