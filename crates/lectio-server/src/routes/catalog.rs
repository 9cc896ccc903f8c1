//! Catalog Routes - Available Versions and Plans

use axum::{extract::State, routing::get, Json, Router};

use crate::models::{PlanResponse, VersionResponse};
use crate::AppState;

/// List available Bible versions
#[utoipa::path(
    get,
    path = "/catalog/versions",
    responses(
        (status = 200, description = "Available Bible versions", body = Vec<VersionResponse>)
    ),
    tag = "Catalog"
)]
pub async fn list_versions(State(state): State<AppState>) -> Json<Vec<VersionResponse>> {
    Json(
        state
            .catalog
            .versions()
            .into_iter()
            .map(VersionResponse::from)
            .collect(),
    )
}

/// List available reading plans
#[utoipa::path(
    get,
    path = "/catalog/plans",
    responses(
        (status = 200, description = "Available reading plans", body = Vec<PlanResponse>)
    ),
    tag = "Catalog"
)]
pub async fn list_plans(State(state): State<AppState>) -> Json<Vec<PlanResponse>> {
    Json(
        state
            .catalog
            .plans()
            .into_iter()
            .map(PlanResponse::from)
            .collect(),
    )
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog/versions", get(list_versions))
        .route("/catalog/plans", get(list_plans))
}
