//! User Routes - Registration, Profiles and Preferences
//!
//! HTTP handlers that delegate to UserService for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    routing::post,
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::application::{PreferencesUpdate, Registration};
use crate::auth::AuthUser;
use crate::models::{
    CreateUserRequest, ReadingHistoryResponse, UpdateUserRequest, UserResponse,
};
use crate::routes::error_response;
use crate::AppState;

/// Routes that operate on the caller's own account require the token
/// subject to match the path id.
fn ensure_self(auth: &AuthUser, id: Uuid) -> Result<(), (StatusCode, String)> {
    if auth.0 != id {
        return Err((
            StatusCode::FORBIDDEN,
            "token does not match user".to_string(),
        ));
    }
    Ok(())
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Invalid preference code or time"),
        (status = 409, description = "Phone or email already registered"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), (StatusCode, String)> {
    let user = state
        .user_service
        .register(Registration {
            name: payload.name,
            phone: payload.phone,
            email: payload.email,
            password: payload.password,
            version: payload.version,
            plan: payload.plan,
            reading_order: payload.reading_order,
            delivery_time: payload.delivery_time,
        })
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Get a user profile
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 403, description = "Token does not match user"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, (StatusCode, String)> {
    ensure_self(&auth, id)?;

    let user = state.user_service.get(id).await.map_err(error_response)?;

    Ok(Json(UserResponse::from(user)))
}

/// Update a user's preferences
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid preference code or time"),
        (status = 403, description = "Token does not match user"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, (StatusCode, String)> {
    ensure_self(&auth, id)?;

    let user = state
        .user_service
        .update_preferences(
            id,
            PreferencesUpdate {
                name: payload.name,
                email: payload.email,
                version: payload.version,
                plan: payload.plan,
                reading_order: payload.reading_order,
                delivery_time: payload.delivery_time,
            },
        )
        .await
        .map_err(error_response)?;

    Ok(Json(UserResponse::from(user)))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All registered users", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, (StatusCode, String)> {
    let users = state.user_service.list().await.map_err(error_response)?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Look up a user by phone number
#[utoipa::path(
    get,
    path = "/users/by-phone/{phone}",
    params(
        ("phone" = String, Path, description = "Phone number in international format")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn get_user_by_phone(
    State(state): State<AppState>,
    Path(phone): Path<String>,
) -> Result<Json<UserResponse>, (StatusCode, String)> {
    let user = state
        .user_service
        .get_by_phone(&phone)
        .await
        .map_err(error_response)?;

    Ok(Json(UserResponse::from(user)))
}

/// Get a user's reading history
#[utoipa::path(
    get,
    path = "/users/{id}/readings",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Reading history, newest first", body = ReadingHistoryResponse),
        (status = 403, description = "Token does not match user"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn reading_history(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReadingHistoryResponse>, (StatusCode, String)> {
    ensure_self(&auth, id)?;

    let readings = state
        .reading_service
        .history(id)
        .await
        .map_err(error_response)?;

    Ok(Json(ReadingHistoryResponse::from_readings(readings)))
}

/// Routes reachable without a session
pub fn public_router() -> Router<AppState> {
    Router::new().route("/register", post(register))
}

/// Routes behind the session middleware
pub fn protected_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/by-phone/:phone", get(get_user_by_phone))
        .route("/users/:id", get(get_user).put(update_user))
        .route("/users/:id/readings", get(reading_history))
}
