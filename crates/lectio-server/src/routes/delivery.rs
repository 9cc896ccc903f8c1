//! Delivery Routes - On-Demand Trigger

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use uuid::Uuid;

use crate::models::DeliveryResponse;
use crate::routes::error_response;
use crate::AppState;

/// Trigger today's delivery for a user.
///
/// Resolves (or reuses) the reading, attempts audio synthesis and
/// dispatch, and reports what happened. Dispatch failures show up as
/// `dispatched: false`, never as an error status.
#[utoipa::path(
    post,
    path = "/users/{id}/deliver",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Reading resolved, dispatch attempted", body = DeliveryResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Delivery"
)]
pub async fn trigger_delivery(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeliveryResponse>, (StatusCode, String)> {
    let outcome = state
        .delivery_service
        .deliver_to(id)
        .await
        .map_err(error_response)?;

    Ok(Json(DeliveryResponse::from(outcome)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/users/:id/deliver", post(trigger_delivery))
}
