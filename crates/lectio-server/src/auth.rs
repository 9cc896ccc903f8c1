//! Session Authentication
//!
//! Argon2 password hashing plus HS256 session tokens. The middleware
//! validates the Bearer token and attaches the authenticated user id as
//! a request extension; handlers that guard per-user resources compare
//! it with the path id.

use std::collections::HashSet;

use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
};
use jwt_simple::algorithms::MACLike;
use jwt_simple::prelude::{
    Claims, Duration as TokenDuration, HS256Key, NoCustomClaims, VerificationOptions,
};
use uuid::Uuid;

use lectio::DomainError;

use crate::AppState;

const TOKEN_ISSUER: &str = "lectio";
const TOKEN_TTL_DAYS: u64 = 7;

/// Authenticated user id attached by the session middleware
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

/// Issues and verifies session tokens
#[derive(Clone)]
pub struct SessionAuth {
    key: HS256Key,
}

impl SessionAuth {
    pub fn new(secret: &str) -> Self {
        Self {
            key: HS256Key::from_bytes(secret.as_bytes()),
        }
    }

    /// Issue a 7-day session token with the user id as subject
    pub fn issue_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        let claims = Claims::create(TokenDuration::from_days(TOKEN_TTL_DAYS))
            .with_issuer(TOKEN_ISSUER)
            .with_subject(user_id.to_string());

        self.key
            .authenticate(claims)
            .map_err(|e| DomainError::Unauthorized(format!("Failed to issue token: {}", e)))
    }

    /// Verify a token and return the user id it was issued for
    pub fn verify_token(&self, token: &str) -> Result<Uuid, DomainError> {
        let mut options = VerificationOptions::default();
        let mut issuers = HashSet::new();
        issuers.insert(TOKEN_ISSUER.to_string());
        options.allowed_issuers = Some(issuers);

        let claims = self
            .key
            .verify_token::<NoCustomClaims>(token, Some(options))
            .map_err(|_| DomainError::Unauthorized("Invalid session token".to_string()))?;

        let subject = claims
            .subject
            .ok_or_else(|| DomainError::Unauthorized("Session token missing subject".to_string()))?;

        Uuid::parse_str(&subject)
            .map_err(|_| DomainError::Unauthorized("Invalid session subject".to_string()))
    }
}

/// Hash a password for storage (argon2 PHC string)
pub fn hash_password(password: &str) -> Result<String, DomainError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DomainError::Validation(format!("Failed to hash password: {}", e)))
}

/// Verify a password against a stored hash
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(hash) = PasswordHash::new(password_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok()
}

/// Require a valid Bearer session token
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let Some(token) = token else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    match state.auth.verify_token(token) {
        Ok(user_id) => {
            request.extensions_mut().insert(AuthUser(user_id));
            Ok(next.run(request).await)
        }
        Err(e) => {
            tracing::debug!(error = %e, "session token rejected");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_round_trip() {
        let auth = SessionAuth::new("test-secret-key");
        let user_id = Uuid::new_v4();

        let token = auth.issue_token(user_id).unwrap();
        assert_eq!(auth.verify_token(&token).unwrap(), user_id);
    }

    #[test]
    fn test_wrong_key_rejects_token() {
        let auth = SessionAuth::new("test-secret-key");
        let other = SessionAuth::new("another-secret");
        let token = auth.issue_token(Uuid::new_v4()).unwrap();

        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let auth = SessionAuth::new("test-secret-key");
        assert!(auth.verify_token("not-a-token").is_err());
    }

    #[test]
    fn test_password_hash_round_trip() {
        let hash = hash_password("segredo123").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("segredo123", &hash));
        assert!(!verify_password("errado", &hash));
    }

    #[test]
    fn test_verify_against_malformed_hash() {
        assert!(!verify_password("qualquer", "not-a-phc-string"));
    }
}
