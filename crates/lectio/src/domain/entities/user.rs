//! User - Registered Subscriber
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{BibleVersion, DeliveryTime, ReadingOrder, ReadingPlan};

/// A subscriber with per-user delivery configuration.
///
/// The phone number is the delivery address on the messaging channel and
/// is unique across users. Users are never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,
    pub version: BibleVersion,
    pub plan: ReadingPlan,
    pub reading_order: ReadingOrder,
    pub delivery_time: DeliveryTime,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with generated ID and timestamp
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        phone: String,
        email: Option<String>,
        password_hash: Option<String>,
        version: BibleVersion,
        plan: ReadingPlan,
        reading_order: ReadingOrder,
        delivery_time: DeliveryTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            phone,
            email,
            password_hash,
            version,
            plan,
            reading_order,
            delivery_time,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_gets_id_and_timestamp() {
        let user = User::new(
            "Maria".to_string(),
            "+5511999990000".to_string(),
            None,
            None,
            BibleVersion::Arc,
            ReadingPlan::Cronologico,
            ReadingOrder::Normal,
            DeliveryTime::default(),
        );

        assert!(!user.id.is_nil());
        assert_eq!(user.delivery_time.to_string(), "08:00");
        assert_eq!(user.version, BibleVersion::Arc);
    }
}
