//! PostgreSQL implementation of ReadingRepository

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use lectio::{DomainError, Reading, ReadingRepository, ResolvedReading};

/// PostgreSQL implementation of ReadingRepository
pub struct PgReadingRepository {
    pool: PgPool,
}

impl PgReadingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ReadingRow {
    id: Uuid,
    user_id: Uuid,
    assigned_on: chrono::NaiveDate,
    reference: String,
    body: String,
    completed: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ReadingRow> for Reading {
    fn from(row: ReadingRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            assigned_on: row.assigned_on,
            reference: row.reference,
            body: row.body,
            completed: row.completed,
            created_at: row.created_at,
        }
    }
}

/// Advisory lock key for a user, taken from the first 8 bytes of the id.
///
/// Collisions between distinct users are harmless: the lock only widens
/// the critical section, it never admits two resolutions for one user.
fn advisory_key(user_id: Uuid) -> i64 {
    let b = user_id.as_bytes();
    i64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
}

#[async_trait]
impl ReadingRepository for PgReadingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reading>, DomainError> {
        let row = sqlx::query_as::<_, ReadingRow>(
            r#"
            SELECT id, user_id, assigned_on, reference, body, completed, created_at
            FROM readings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Reading::from))
    }

    async fn find_or_create_pending(
        &self,
        candidate: Reading,
        window: Duration,
    ) -> Result<ResolvedReading, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        // Serialize concurrent resolutions for the same user. The lock is
        // transaction-scoped and released on commit or rollback.
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(advisory_key(candidate.user_id))
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        let cutoff = Utc::now() - window;
        let existing = sqlx::query_as::<_, ReadingRow>(
            r#"
            SELECT id, user_id, assigned_on, reference, body, completed, created_at
            FROM readings
            WHERE user_id = $1 AND completed = FALSE AND created_at >= $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(candidate.user_id)
        .bind(cutoff)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        if let Some(row) = existing {
            tx.commit()
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;
            return Ok(ResolvedReading {
                reading: row.into(),
                reused: true,
            });
        }

        let row = sqlx::query_as::<_, ReadingRow>(
            r#"
            INSERT INTO readings (id, user_id, assigned_on, reference, body, completed)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            RETURNING id, user_id, assigned_on, reference, body, completed, created_at
            "#,
        )
        .bind(candidate.id)
        .bind(candidate.user_id)
        .bind(candidate.assigned_on)
        .bind(&candidate.reference)
        .bind(&candidate.body)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(ResolvedReading {
            reading: row.into(),
            reused: false,
        })
    }

    async fn mark_completed(&self, id: Uuid) -> Result<Option<Reading>, DomainError> {
        let row = sqlx::query_as::<_, ReadingRow>(
            r#"
            UPDATE readings
            SET completed = TRUE
            WHERE id = $1
            RETURNING id, user_id, assigned_on, reference, body, completed, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Reading::from))
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Reading>, DomainError> {
        let rows = sqlx::query_as::<_, ReadingRow>(
            r#"
            SELECT id, user_id, assigned_on, reference, body, completed, created_at
            FROM readings
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Reading::from).collect())
    }
}
