//! Reading - One Issued Daily Reading

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A daily reading issued to a user.
///
/// Stays pending (`completed = false`) until the user confirms it.
/// `created_at` anchors the dedup window: a pending reading created
/// inside the window is reused instead of issuing a duplicate.
/// Rows are kept for history and never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Calendar day the reading was issued for
    pub assigned_on: NaiveDate,
    /// Passage reference, e.g. `Gênesis 1:1-31`
    pub reference: String,
    /// Resolved message body (verse text or reading instruction)
    pub body: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Reading {
    /// Create a new pending Reading with generated ID and timestamp
    pub fn new(user_id: Uuid, assigned_on: NaiveDate, reference: String, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            assigned_on,
            reference,
            body,
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Whether this reading can stand in for a new one at `now`.
    ///
    /// Pending and created at most `window` ago. The edge is inclusive:
    /// a reading created exactly `now - window` still qualifies.
    pub fn is_reusable(&self, now: DateTime<Utc>, window: Duration) -> bool {
        !self.completed && self.created_at >= now - window
    }
}
