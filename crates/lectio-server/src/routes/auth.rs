//! Auth Routes - Session Tokens

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::models::{LoginRequest, LoginResponse};
use crate::routes::error_response;
use crate::AppState;

/// Log in with phone and password
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, String)> {
    let user = state
        .user_service
        .authenticate(&payload.phone, &payload.password)
        .await
        .map_err(error_response)?;

    let token = state.auth.issue_token(user.id).map_err(error_response)?;

    Ok(Json(LoginResponse {
        token,
        user_id: user.id,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}
