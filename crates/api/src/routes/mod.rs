pub mod auth;
pub mod client;
pub mod dashboard;
pub mod health;
pub mod order;
pub mod project;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                  login (public)
/// /auth/me                     current profile (requires auth)
///
/// /clients                     list, create
/// /clients/refs                id+name pairs for form dropdowns
///
/// /projects                    list (?query, ?status, ?priority), create
/// /projects/stats              derived project metrics
/// /projects/{id}               get
/// /projects/{id}/status        update status (PUT)
/// /projects/{id}               delete
///
/// /orders                      list, create
/// /orders/stats                derived order metrics
/// /orders/{id}                 get
/// /orders/{id}/status          update status (PUT)
///
/// /dashboard/summary           counts + recent projects and orders
///
/// /events/ws                   WebSocket stream of staleness events
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/clients", client::router())
        .nest("/projects", project::router())
        .nest("/orders", order::router())
        .nest("/dashboard", dashboard::router())
        .route("/events/ws", get(ws::ws_handler))
}
