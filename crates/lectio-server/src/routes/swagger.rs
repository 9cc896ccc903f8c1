//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    ConfirmResponse,
    CreateUserRequest,
    DeliveryResponse,
    // Auth models
    LoginRequest,
    LoginResponse,
    PlanResponse,
    ReadingHistoryResponse,
    // Reading models
    ReadingResponse,
    UpdateUserRequest,
    // User models
    UserResponse,
    // Catalog models
    VersionResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth endpoints
        super::auth::login,
        // User endpoints
        super::users::register,
        super::users::list_users,
        super::users::get_user,
        super::users::update_user,
        super::users::get_user_by_phone,
        super::users::reading_history,
        // Delivery endpoints
        super::delivery::trigger_delivery,
        // Reading endpoints
        super::readings::confirm_reading,
        // Catalog endpoints
        super::catalog::list_versions,
        super::catalog::list_plans,
    ),
    info(
        title = "Lectio API",
        version = "0.2.0",
        description = "Daily scripture reading delivery over WhatsApp.\n\nSchedules one reading per user per day, with per-translation verse texts and audio artifacts.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Auth", description = "Session tokens for registered users"),
        (name = "Users", description = "Registration, profiles and preferences"),
        (name = "Delivery", description = "On-demand delivery of today's reading"),
        (name = "Readings", description = "Completion confirmation"),
        (name = "Catalog", description = "Available Bible versions and reading plans"),
    ),
    components(
        schemas(
            // Auth
            LoginRequest,
            LoginResponse,
            // User
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            // Reading
            ReadingResponse,
            ReadingHistoryResponse,
            DeliveryResponse,
            ConfirmResponse,
            // Catalog
            VersionResponse,
            PlanResponse,
        )
    ),
)]
pub struct ApiDoc;
