//! Reading Application Service (Use Case)
//!
//! Confirmation and history over issued readings.

use std::sync::Arc;
use uuid::Uuid;

use lectio::{DomainError, Reading, ReadingRepository};

/// Application service for reading operations
pub struct ReadingService<R: ReadingRepository> {
    repo: Arc<R>,
}

impl<R: ReadingRepository> ReadingService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Mark a reading as completed.
    ///
    /// Confirming an already-completed reading succeeds again with the
    /// same result. Unknown ids are a NotFound error.
    pub async fn confirm(&self, reading_id: Uuid) -> Result<Reading, DomainError> {
        let confirmed = self
            .repo
            .mark_completed(reading_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Reading", reading_id))?;

        tracing::info!("Reading confirmed: {} ({})", confirmed.reference, confirmed.id);

        Ok(confirmed)
    }

    /// A user's readings, newest first
    pub async fn history(&self, user_id: Uuid) -> Result<Vec<Reading>, DomainError> {
        self.repo.find_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fakes::InMemoryReadings;
    use chrono::NaiveDate;

    fn pending(user_id: Uuid) -> Reading {
        Reading::new(
            user_id,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            "João 3:16".to_string(),
            "corpo".to_string(),
        )
    }

    #[tokio::test]
    async fn test_confirm_marks_reading_completed() {
        let repo = Arc::new(InMemoryReadings::default());
        let reading = pending(Uuid::new_v4());
        let id = reading.id;
        repo.insert(reading);

        let service = ReadingService::new(repo);
        let confirmed = service.confirm(id).await.unwrap();

        assert!(confirmed.completed);
    }

    #[tokio::test]
    async fn test_confirm_is_idempotent() {
        let repo = Arc::new(InMemoryReadings::default());
        let reading = pending(Uuid::new_v4());
        let id = reading.id;
        repo.insert(reading);

        let service = ReadingService::new(repo);
        service.confirm(id).await.unwrap();
        let again = service.confirm(id).await.unwrap();

        assert!(again.completed);
        assert_eq!(again.id, id);
    }

    #[tokio::test]
    async fn test_confirm_unknown_reading_is_not_found() {
        let service = ReadingService::new(Arc::new(InMemoryReadings::default()));

        let err = service.confirm(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_history_is_newest_first_and_scoped_to_user() {
        let repo = Arc::new(InMemoryReadings::default());
        let user_id = Uuid::new_v4();

        let mut older = pending(user_id);
        older.created_at -= chrono::Duration::hours(3);
        let newer = pending(user_id);
        let other = pending(Uuid::new_v4());

        let newer_id = newer.id;
        repo.insert(older);
        repo.insert(newer);
        repo.insert(other);

        let service = ReadingService::new(repo);
        let history = service.history(user_id).await.unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, newer_id);
    }
}
