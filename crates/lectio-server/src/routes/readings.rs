//! Reading Routes - Completion Confirmation

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use uuid::Uuid;

use crate::models::ConfirmResponse;
use crate::routes::error_response;
use crate::AppState;

/// Confirm that a reading was completed.
///
/// Idempotent: confirming the same reading again succeeds with the same
/// response.
#[utoipa::path(
    post,
    path = "/readings/{id}/confirm",
    params(
        ("id" = Uuid, Path, description = "Reading ID")
    ),
    responses(
        (status = 200, description = "Reading marked as completed", body = ConfirmResponse),
        (status = 404, description = "Reading not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Readings"
)]
pub async fn confirm_reading(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConfirmResponse>, (StatusCode, String)> {
    let reading = state
        .reading_service
        .confirm(id)
        .await
        .map_err(error_response)?;

    Ok(Json(ConfirmResponse {
        reading_id: reading.id,
        message: "Leitura marcada como concluída".to_string(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/readings/:id/confirm", post(confirm_reading))
}
