//! Reading API Models

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use lectio::Reading;

/// A delivered reading
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadingResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assigned_on: NaiveDate,
    /// Passage reference, e.g. "João 3:16"
    pub reference: String,
    pub body: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Reading> for ReadingResponse {
    fn from(reading: Reading) -> Self {
        Self {
            id: reading.id,
            user_id: reading.user_id,
            assigned_on: reading.assigned_on,
            reference: reading.reference,
            body: reading.body,
            completed: reading.completed,
            created_at: reading.created_at,
        }
    }
}

/// Result of an on-demand delivery
#[derive(Debug, Serialize, ToSchema)]
pub struct DeliveryResponse {
    pub reading_id: Uuid,
    pub reference: String,
    pub text: String,
    /// True when a pending reading was reused instead of created
    pub reused: bool,
    /// True when the outbound message was handed to the relay
    pub dispatched: bool,
}

impl From<crate::application::DeliveryOutcome> for DeliveryResponse {
    fn from(outcome: crate::application::DeliveryOutcome) -> Self {
        Self {
            reading_id: outcome.reading_id,
            reference: outcome.reference,
            text: outcome.text,
            reused: outcome.reused,
            dispatched: outcome.dispatched,
        }
    }
}

/// Confirmation result
#[derive(Debug, Serialize, ToSchema)]
pub struct ConfirmResponse {
    pub reading_id: Uuid,
    pub message: String,
}

/// A user's reading history with completion stats
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadingHistoryResponse {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub readings: Vec<ReadingResponse>,
}

impl ReadingHistoryResponse {
    pub fn from_readings(readings: Vec<Reading>) -> Self {
        let total = readings.len();
        let completed = readings.iter().filter(|r| r.completed).count();
        Self {
            total,
            completed,
            pending: total - completed,
            readings: readings.into_iter().map(ReadingResponse::from).collect(),
        }
    }
}
