//! Delivery Application Service (Use Case)
//!
//! Resolves today's reading for a user and dispatches it over the
//! messaging channel.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

use lectio::{
    DomainError, MessageRelay, OutboundMessage, Reading, ReadingCatalog, ReadingRepository,
    SpeechSynthesizer, User, UserRepository,
};

/// Delivery configuration
#[derive(Debug, Clone)]
pub struct DeliveryConfig {
    /// How far back a pending reading still stands in for today's
    pub pending_window: Duration,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            pending_window: Duration::days(2),
        }
    }
}

/// Outcome of a single delivery
#[derive(Debug, Clone)]
pub struct DeliveryOutcome {
    pub reading_id: Uuid,
    pub reference: String,
    pub text: String,
    pub reused: bool,
    pub dispatched: bool,
}

/// Application service for resolving and dispatching daily readings
pub struct DeliveryService<U: UserRepository, R: ReadingRepository> {
    users: Arc<U>,
    readings: Arc<R>,
    speech: Arc<dyn SpeechSynthesizer>,
    relay: Arc<dyn MessageRelay>,
    catalog: ReadingCatalog,
    config: DeliveryConfig,
}

impl<U: UserRepository, R: ReadingRepository> DeliveryService<U, R> {
    pub fn new(
        users: Arc<U>,
        readings: Arc<R>,
        speech: Arc<dyn SpeechSynthesizer>,
        relay: Arc<dyn MessageRelay>,
        config: DeliveryConfig,
    ) -> Self {
        Self {
            users,
            readings,
            speech,
            relay,
            catalog: ReadingCatalog::new(),
            config,
        }
    }

    /// Deliver today's reading to a user by id
    pub async fn deliver_to(&self, user_id: Uuid) -> Result<DeliveryOutcome, DomainError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", user_id))?;

        self.deliver(&user).await
    }

    /// Deliver today's reading to a user.
    ///
    /// The reading row is the source of truth: once resolved it is never
    /// rolled back. Audio synthesis and dispatch run afterwards as
    /// best-effort steps; their failures are logged and reflected in the
    /// outcome, not returned as errors.
    pub async fn deliver(&self, user: &User) -> Result<DeliveryOutcome, DomainError> {
        self.deliver_on(user, Utc::now().date_naive()).await
    }

    async fn deliver_on(
        &self,
        user: &User,
        today: NaiveDate,
    ) -> Result<DeliveryOutcome, DomainError> {
        let daily = self
            .catalog
            .reading_for_day(user.plan, user.version, today.ordinal() as i64);

        if daily.plan_completed {
            tracing::info!("Plan completed for user {}, sending final message", user.id);
        }

        let candidate = Reading::new(user.id, today, daily.reference(), daily.body);
        let resolved = self
            .readings
            .find_or_create_pending(candidate, self.config.pending_window)
            .await?;
        let reading = resolved.reading;

        if resolved.reused {
            tracing::info!("Reusing pending reading {} for user {}", reading.id, user.id);
        } else {
            tracing::info!(
                "Created reading {} for user {}: {}",
                reading.id,
                user.id,
                reading.reference
            );
        }

        let audio = match self
            .speech
            .synthesize(&reading.body, &format!("audio_{}_{}", user.id, reading.id))
            .await
        {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Audio synthesis failed for reading {}: {}", reading.id, e);
                None
            }
        };

        let message = OutboundMessage {
            phone: user.phone.clone(),
            body: format!(
                "Olá {}, seu versículo de hoje é:\n{}",
                user.name, reading.body
            ),
            audio,
        };

        let dispatched = match self.relay.send(&message).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Dispatch failed for reading {}: {}", reading.id, e);
                false
            }
        };

        Ok(DeliveryOutcome {
            reading_id: reading.id,
            reference: reading.reference,
            text: reading.body,
            reused: resolved.reused,
            dispatched,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fakes::{
        sample_user, InMemoryReadings, InMemoryUsers, RecordingRelay, StubSpeech,
    };
    use std::path::PathBuf;
    use std::sync::atomic::Ordering;

    struct Harness {
        users: Arc<InMemoryUsers>,
        readings: Arc<InMemoryReadings>,
        speech: Arc<StubSpeech>,
        relay: Arc<RecordingRelay>,
        service: DeliveryService<InMemoryUsers, InMemoryReadings>,
    }

    fn harness(speech: StubSpeech, relay: RecordingRelay) -> Harness {
        let users = Arc::new(InMemoryUsers::default());
        let readings = Arc::new(InMemoryReadings::default());
        let speech = Arc::new(speech);
        let relay = Arc::new(relay);
        let service = DeliveryService::new(
            users.clone(),
            readings.clone(),
            speech.clone(),
            relay.clone(),
            DeliveryConfig::default(),
        );
        Harness {
            users,
            readings,
            speech,
            relay,
            service,
        }
    }

    // 2025 is not a leap year, so the ordinal equals the plan day.
    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_yo_opt(2025, n).unwrap()
    }

    #[tokio::test]
    async fn test_first_day_sends_reading_instruction() {
        let h = harness(StubSpeech::ok(), RecordingRelay::default());
        let user = sample_user("Maria", "+5511999990000");

        let outcome = h.service.deliver_on(&user, day(1)).await.unwrap();

        assert_eq!(outcome.reference, "Gênesis 1:1-31");
        assert!(!outcome.reused);
        assert!(outcome.dispatched);
        assert!(outcome.text.contains("Leitura de hoje: Gênesis 1:1-31"));
        assert!(outcome.text.contains("Almeida Revista e Corrigida"));
        assert_eq!(h.speech.calls.load(Ordering::SeqCst), 1);

        let sent = h.relay.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].body.starts_with("Olá Maria, seu versículo de hoje é:\n"));
        let expected = PathBuf::from(format!(
            "audios/audio_{}_{}.mp3",
            user.id, outcome.reading_id
        ));
        assert_eq!(sent[0].audio.as_ref(), Some(&expected));
    }

    #[tokio::test]
    async fn test_pending_reading_is_reused_not_duplicated() {
        let h = harness(StubSpeech::ok(), RecordingRelay::default());
        let user = sample_user("Maria", "+5511999990000");

        let first = h.service.deliver_on(&user, day(1)).await.unwrap();
        let second = h.service.deliver_on(&user, day(2)).await.unwrap();

        assert!(!first.reused);
        assert!(second.reused);
        assert_eq!(second.reading_id, first.reading_id);
        assert_eq!(second.reference, first.reference);
        assert_eq!(h.readings.len(), 1);
        // both attempts still message the user
        assert_eq!(h.relay.sent().len(), 2);
    }

    #[tokio::test]
    async fn test_confirmed_reading_does_not_block_the_next_one() {
        let h = harness(StubSpeech::ok(), RecordingRelay::default());
        let user = sample_user("Maria", "+5511999990000");

        let first = h.service.deliver_on(&user, day(1)).await.unwrap();
        use lectio::ReadingRepository as _;
        h.readings.mark_completed(first.reading_id).await.unwrap();

        let second = h.service.deliver_on(&user, day(2)).await.unwrap();

        assert!(!second.reused);
        assert_ne!(second.reading_id, first.reading_id);
        assert_eq!(second.reference, "Gênesis 2:1-25");
        assert_eq!(h.readings.len(), 2);
    }

    #[tokio::test]
    async fn test_stale_pending_reading_is_not_reused() {
        let h = harness(StubSpeech::ok(), RecordingRelay::default());
        let user = sample_user("Maria", "+5511999990000");

        let mut stale = Reading::new(
            user.id,
            day(1),
            "Gênesis 1:1-31".to_string(),
            "corpo".to_string(),
        );
        stale.created_at = Utc::now() - Duration::days(2) - Duration::seconds(1);
        let stale_id = stale.id;
        h.readings.insert(stale);

        let outcome = h.service.deliver_on(&user, day(3)).await.unwrap();

        assert!(!outcome.reused);
        assert_ne!(outcome.reading_id, stale_id);
        assert_eq!(h.readings.len(), 2);
    }

    #[tokio::test]
    async fn test_tts_failure_still_dispatches_text_message() {
        let h = harness(StubSpeech::failing(), RecordingRelay::default());
        let user = sample_user("Maria", "+5511999990000");

        let outcome = h.service.deliver_on(&user, day(1)).await.unwrap();

        assert!(outcome.dispatched);
        assert_eq!(h.readings.len(), 1);
        let sent = h.relay.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].audio.is_none());
    }

    #[tokio::test]
    async fn test_dispatch_failure_keeps_the_reading() {
        let h = harness(StubSpeech::ok(), RecordingRelay::failing());
        let user = sample_user("Maria", "+5511999990000");

        let outcome = h.service.deliver_on(&user, day(1)).await.unwrap();

        assert!(!outcome.dispatched);
        assert_eq!(h.readings.len(), 1);
    }

    #[tokio::test]
    async fn test_unmapped_day_sends_completion_message() {
        let h = harness(StubSpeech::ok(), RecordingRelay::default());
        let user = sample_user("Maria", "+5511999990000");

        let outcome = h.service.deliver_on(&user, day(26)).await.unwrap();

        assert!(outcome.text.starts_with("Parabéns!"));
        assert!(outcome.dispatched);
    }

    #[tokio::test]
    async fn test_leap_day_366_wraps_to_day_one() {
        let h = harness(StubSpeech::ok(), RecordingRelay::default());
        let user = sample_user("Maria", "+5511999990000");

        let outcome = h
            .service
            .deliver_on(&user, NaiveDate::from_yo_opt(2024, 366).unwrap())
            .await
            .unwrap();

        assert_eq!(outcome.reference, "Gênesis 1:1-31");
    }

    #[tokio::test]
    async fn test_deliver_to_unknown_user_is_not_found() {
        let h = harness(StubSpeech::ok(), RecordingRelay::default());

        let err = h.service.deliver_to(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_deliver_to_resolves_the_user() {
        let h = harness(StubSpeech::ok(), RecordingRelay::default());
        let user = sample_user("Maria", "+5511999990000");
        h.users.rows.lock().unwrap().push(user.clone());

        let outcome = h.service.deliver_to(user.id).await.unwrap();

        assert!(!outcome.reference.is_empty());
        assert_eq!(h.relay.sent()[0].phone, "+5511999990000");
    }
}
