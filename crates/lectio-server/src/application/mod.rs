//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod delivery_service;
mod reading_service;
mod scheduler;
mod user_service;

pub use delivery_service::{DeliveryConfig, DeliveryOutcome, DeliveryService};
pub use reading_service::ReadingService;
pub use scheduler::{DeliveryScheduler, SchedulerConfig, SweepSummary};
pub use user_service::{PreferencesUpdate, Registration, UserService};

/// In-memory port implementations shared by the service tests.
#[cfg(test)]
pub(crate) mod fakes {
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use uuid::Uuid;

    use lectio::{
        BibleVersion, DeliveryTime, DomainError, MessageRelay, OutboundMessage, Reading,
        ReadingOrder, ReadingPlan, ReadingRepository, ResolvedReading, SpeechSynthesizer, User,
        UserRepository,
    };

    pub fn sample_user(name: &str, phone: &str) -> User {
        User::new(
            name.to_string(),
            phone.to_string(),
            None,
            None,
            BibleVersion::default(),
            ReadingPlan::default(),
            ReadingOrder::default(),
            DeliveryTime::default(),
        )
    }

    #[derive(Default)]
    pub struct InMemoryUsers {
        pub rows: Mutex<Vec<User>>,
    }

    impl InMemoryUsers {
        pub fn with(users: Vec<User>) -> Self {
            Self {
                rows: Mutex::new(users),
            }
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUsers {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
            Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
        }

        async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.phone == phone)
                .cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email.as_deref() == Some(email))
                .cloned())
        }

        async fn find_all(&self) -> Result<Vec<User>, DomainError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn save(&self, user: &User) -> Result<User, DomainError> {
            self.rows.lock().unwrap().push(user.clone());
            Ok(user.clone())
        }

        async fn update(&self, user: &User) -> Result<User, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows
                .iter_mut()
                .find(|u| u.id == user.id)
                .ok_or_else(|| DomainError::not_found("User", user.id))?;
            *slot = user.clone();
            Ok(user.clone())
        }
    }

    /// Applies the same reuse rule as the SQL adapter.
    #[derive(Default)]
    pub struct InMemoryReadings {
        pub rows: Mutex<Vec<Reading>>,
        pub fail_for: Mutex<Option<Uuid>>,
    }

    impl InMemoryReadings {
        pub fn insert(&self, reading: Reading) {
            self.rows.lock().unwrap().push(reading);
        }

        pub fn fail_for(&self, user_id: Uuid) {
            *self.fail_for.lock().unwrap() = Some(user_id);
        }

        pub fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ReadingRepository for InMemoryReadings {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Reading>, DomainError> {
            Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
        }

        async fn find_or_create_pending(
            &self,
            candidate: Reading,
            window: Duration,
        ) -> Result<ResolvedReading, DomainError> {
            if *self.fail_for.lock().unwrap() == Some(candidate.user_id) {
                return Err(DomainError::Repository("storage down".to_string()));
            }

            let now = Utc::now();
            let mut rows = self.rows.lock().unwrap();
            let existing = rows
                .iter()
                .filter(|r| r.user_id == candidate.user_id && r.is_reusable(now, window))
                .max_by_key(|r| r.created_at)
                .cloned();

            match existing {
                Some(reading) => Ok(ResolvedReading {
                    reading,
                    reused: true,
                }),
                None => {
                    rows.push(candidate.clone());
                    Ok(ResolvedReading {
                        reading: candidate,
                        reused: false,
                    })
                }
            }
        }

        async fn mark_completed(&self, id: Uuid) -> Result<Option<Reading>, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.iter_mut().find(|r| r.id == id).map(|r| {
                r.completed = true;
                r.clone()
            }))
        }

        async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Reading>, DomainError> {
            let mut rows: Vec<Reading> = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.user_id == user_id)
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(rows)
        }
    }

    pub struct StubSpeech {
        fail: bool,
        pub calls: AtomicUsize,
    }

    impl StubSpeech {
        pub fn ok() -> Self {
            Self {
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SpeechSynthesizer for StubSpeech {
        async fn synthesize(&self, _text: &str, file_stem: &str) -> Result<PathBuf, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DomainError::ExternalService("tts down".to_string()));
            }
            Ok(PathBuf::from(format!("audios/{file_stem}.mp3")))
        }
    }

    #[derive(Default)]
    pub struct RecordingRelay {
        fail: bool,
        pub sent: Mutex<Vec<OutboundMessage>>,
    }

    impl RecordingRelay {
        pub fn failing() -> Self {
            Self {
                fail: true,
                sent: Mutex::new(Vec::new()),
            }
        }

        pub fn sent(&self) -> Vec<OutboundMessage> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessageRelay for RecordingRelay {
        async fn send(&self, message: &OutboundMessage) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::ExternalService("sender down".to_string()));
            }
            self.sent.lock().unwrap().push(message.clone());
            Ok(())
        }
    }
}
