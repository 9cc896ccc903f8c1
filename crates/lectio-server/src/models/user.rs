//! User API Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use lectio::User;

/// Request to register a new user
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    /// Phone number in international format, e.g. "+5511999999999"
    pub phone: String,
    pub email: Option<String>,
    /// Plain-text password, hashed before storage
    pub password: Option<String>,
    /// Bible version code (ARC, NVI, ACF); defaults to ARC
    pub version: Option<String>,
    /// Reading plan code (cronologico, livros); defaults to cronologico
    pub plan: Option<String>,
    /// Reading order (normal, alternado); defaults to normal
    pub reading_order: Option<String>,
    /// Preferred delivery time as "HH:MM"; defaults to 08:00
    pub delivery_time: Option<String>,
}

/// Request to update a user's preferences
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub version: Option<String>,
    pub plan: Option<String>,
    pub reading_order: Option<String>,
    pub delivery_time: Option<String>,
}

/// User response
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub version: String,
    pub plan: String,
    pub reading_order: String,
    pub delivery_time: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            phone: user.phone,
            email: user.email,
            version: user.version.to_string(),
            plan: user.plan.to_string(),
            reading_order: user.reading_order.to_string(),
            delivery_time: user.delivery_time.to_string(),
            created_at: user.created_at,
        }
    }
}
