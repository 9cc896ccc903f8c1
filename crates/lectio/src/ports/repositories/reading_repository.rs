//! Reading Repository Port
//!
//! Abstract interface for Reading persistence operations.

use async_trait::async_trait;
use chrono::Duration;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Reading};

/// Result of the reuse-or-create resolution
#[derive(Debug, Clone)]
pub struct ResolvedReading {
    pub reading: Reading,
    /// True when an existing pending reading was reused
    pub reused: bool,
}

/// Repository interface for Reading entities
#[async_trait]
pub trait ReadingRepository: Send + Sync {
    /// Find a reading by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reading>, DomainError>;

    /// Reuse the newest pending reading created inside the window, or
    /// insert `candidate` when none exists.
    ///
    /// The window boundary is inclusive: a reading created exactly at
    /// `now - window` is still reused. Implementations must make the
    /// check-then-insert atomic per user so that concurrent invocations
    /// resolve to a single row.
    async fn find_or_create_pending(
        &self,
        candidate: Reading,
        window: Duration,
    ) -> Result<ResolvedReading, DomainError>;

    /// Mark a reading completed; returns the updated reading, or None
    /// when the id is unknown. Confirming twice is allowed.
    async fn mark_completed(&self, id: Uuid) -> Result<Option<Reading>, DomainError>;

    /// All readings for a user, newest first
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Reading>, DomainError>;
}
