//! User Application Service (Use Case)
//!
//! Orchestrates registration, preference updates and credential checks.

use std::sync::Arc;
use uuid::Uuid;

use lectio::{DomainError, User, UserRepository};

use crate::auth;

/// Input for user registration.
///
/// Preference fields are optional codes; absent fields fall back to the
/// catalog defaults (ARC, cronologico, normal, 08:00).
#[derive(Debug, Default)]
pub struct Registration {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub version: Option<String>,
    pub plan: Option<String>,
    pub reading_order: Option<String>,
    pub delivery_time: Option<String>,
}

/// Input for preference updates; absent fields keep current values
#[derive(Debug, Default)]
pub struct PreferencesUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub version: Option<String>,
    pub plan: Option<String>,
    pub reading_order: Option<String>,
    pub delivery_time: Option<String>,
}

/// Application service for user operations
pub struct UserService<U: UserRepository> {
    repo: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(repo: Arc<U>) -> Self {
        Self { repo }
    }

    /// Register a new user.
    ///
    /// Preference codes are validated up front. Unknown codes are
    /// rejected, never silently replaced with a default.
    pub async fn register(&self, registration: Registration) -> Result<User, DomainError> {
        let name = registration.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::Validation("name must not be empty".to_string()));
        }
        let phone = registration.phone.trim().to_string();
        if phone.is_empty() {
            return Err(DomainError::Validation(
                "phone must not be empty".to_string(),
            ));
        }

        let version = parse_or_default(registration.version.as_deref())?;
        let plan = parse_or_default(registration.plan.as_deref())?;
        let reading_order = parse_or_default(registration.reading_order.as_deref())?;
        let delivery_time = parse_or_default(registration.delivery_time.as_deref())?;

        if self.repo.find_by_phone(&phone).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "phone {} is already registered",
                phone
            )));
        }
        if let Some(email) = &registration.email {
            if self.repo.find_by_email(email).await?.is_some() {
                return Err(DomainError::Conflict(format!(
                    "email {} is already registered",
                    email
                )));
            }
        }

        let password_hash = registration
            .password
            .as_deref()
            .map(auth::hash_password)
            .transpose()?;

        let user = User::new(
            name,
            phone,
            registration.email,
            password_hash,
            version,
            plan,
            reading_order,
            delivery_time,
        );
        let saved = self.repo.save(&user).await?;

        tracing::info!("Registered user: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Update a user's preferences
    pub async fn update_preferences(
        &self,
        id: Uuid,
        update: PreferencesUpdate,
    ) -> Result<User, DomainError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))?;

        let version = match update.version.as_deref() {
            Some(code) => code.parse().map_err(DomainError::Validation)?,
            None => current.version,
        };
        let plan = match update.plan.as_deref() {
            Some(code) => code.parse().map_err(DomainError::Validation)?,
            None => current.plan,
        };
        let reading_order = match update.reading_order.as_deref() {
            Some(code) => code.parse().map_err(DomainError::Validation)?,
            None => current.reading_order,
        };
        let delivery_time = match update.delivery_time.as_deref() {
            Some(time) => time.parse().map_err(DomainError::Validation)?,
            None => current.delivery_time,
        };

        let updated = User {
            id: current.id,
            name: update.name.unwrap_or(current.name),
            phone: current.phone,
            email: update.email.or(current.email),
            password_hash: current.password_hash,
            version,
            plan,
            reading_order,
            delivery_time,
            created_at: current.created_at,
        };

        self.repo.update(&updated).await
    }

    /// Get a user by ID
    pub async fn get(&self, id: Uuid) -> Result<User, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    /// Get a user by phone number
    pub async fn get_by_phone(&self, phone: &str) -> Result<User, DomainError> {
        self.repo
            .find_by_phone(phone)
            .await?
            .ok_or_else(|| DomainError::not_found_str("User", phone))
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repo.find_all().await
    }

    /// Check login credentials.
    ///
    /// Unknown phones, missing passwords and wrong passwords all produce
    /// the same error.
    pub async fn authenticate(&self, phone: &str, password: &str) -> Result<User, DomainError> {
        let invalid = || DomainError::Unauthorized("invalid credentials".to_string());

        let user = self.repo.find_by_phone(phone).await?.ok_or_else(invalid)?;
        let hash = user.password_hash.as_deref().ok_or_else(invalid)?;
        if !auth::verify_password(password, hash) {
            return Err(invalid());
        }

        Ok(user)
    }
}

fn parse_or_default<T>(code: Option<&str>) -> Result<T, DomainError>
where
    T: Default + std::str::FromStr<Err = String>,
{
    match code {
        Some(code) => code.parse().map_err(DomainError::Validation),
        None => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fakes::{sample_user, InMemoryUsers};
    use lectio::{BibleVersion, ReadingPlan};

    fn service() -> UserService<InMemoryUsers> {
        UserService::new(Arc::new(InMemoryUsers::default()))
    }

    fn registration(name: &str, phone: &str) -> Registration {
        Registration {
            name: name.to_string(),
            phone: phone.to_string(),
            ..Registration::default()
        }
    }

    #[tokio::test]
    async fn test_register_applies_catalog_defaults() {
        let service = service();

        let user = service
            .register(registration("Maria", "+5511999990000"))
            .await
            .unwrap();

        assert_eq!(user.version, BibleVersion::Arc);
        assert_eq!(user.plan, ReadingPlan::Cronologico);
        assert_eq!(user.delivery_time.to_string(), "08:00");
        assert!(user.password_hash.is_none());
    }

    #[tokio::test]
    async fn test_register_rejects_unknown_version_code() {
        let service = service();

        let mut reg = registration("Maria", "+5511999990000");
        reg.version = Some("KJV".to_string());

        let err = service.register(reg).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_phone() {
        let service = service();
        service
            .register(registration("Maria", "+5511999990000"))
            .await
            .unwrap();

        let err = service
            .register(registration("Outra", "+5511999990000"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let service = service();

        let mut reg = registration("Maria", "+5511999990000");
        reg.password = Some("segredo123".to_string());

        let user = service.register(reg).await.unwrap();
        let hash = user.password_hash.unwrap();
        assert!(hash.starts_with("$argon2"));
        assert_ne!(hash, "segredo123");
    }

    #[tokio::test]
    async fn test_authenticate_accepts_correct_password_only() {
        let service = service();

        let mut reg = registration("Maria", "+5511999990000");
        reg.password = Some("segredo123".to_string());
        service.register(reg).await.unwrap();

        let user = service
            .authenticate("+5511999990000", "segredo123")
            .await
            .unwrap();
        assert_eq!(user.name, "Maria");

        let err = service
            .authenticate("+5511999990000", "errada")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));

        let err = service
            .authenticate("+5500000000000", "segredo123")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_update_preferences_keeps_unset_fields() {
        let repo = Arc::new(InMemoryUsers::with(vec![sample_user(
            "Maria",
            "+5511999990000",
        )]));
        let id = repo.rows.lock().unwrap()[0].id;
        let service = UserService::new(repo);

        let update = PreferencesUpdate {
            delivery_time: Some("21:30".to_string()),
            ..PreferencesUpdate::default()
        };
        let updated = service.update_preferences(id, update).await.unwrap();

        assert_eq!(updated.delivery_time.to_string(), "21:30");
        assert_eq!(updated.name, "Maria");
        assert_eq!(updated.version, BibleVersion::Arc);
    }

    #[tokio::test]
    async fn test_update_preferences_rejects_malformed_time() {
        let repo = Arc::new(InMemoryUsers::with(vec![sample_user(
            "Maria",
            "+5511999990000",
        )]));
        let id = repo.rows.lock().unwrap()[0].id;
        let service = UserService::new(repo);

        let update = PreferencesUpdate {
            delivery_time: Some("25:99".to_string()),
            ..PreferencesUpdate::default()
        };
        let err = service.update_preferences(id, update).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }
}
