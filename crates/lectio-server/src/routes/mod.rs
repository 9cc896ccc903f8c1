//! Lectio API Routes
//!
//! - /auth/login - Session tokens
//! - /register - Registration
//! - /users - Profiles and preferences
//! - /users/:id/deliver - On-demand delivery trigger
//! - /users/:id/readings - Reading history
//! - /readings/:id/confirm - Completion confirmation
//! - /catalog/* - Available versions and plans

pub mod auth;
pub mod catalog;
pub mod delivery;
pub mod readings;
pub mod swagger;
pub mod users;

use axum::http::StatusCode;
use lectio::DomainError;

/// Map a domain error onto the HTTP surface
pub(crate) fn error_response(e: DomainError) -> (StatusCode, String) {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping_covers_the_taxonomy() {
        let (status, _) = error_response(DomainError::not_found_str("User", "x"));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = error_response(DomainError::Validation("bad".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(DomainError::Conflict("dup".into()));
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = error_response(DomainError::Unauthorized("no".into()));
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = error_response(DomainError::Repository("down".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _) = error_response(DomainError::ExternalService("down".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
