//! Delivery Scheduler
//!
//! Sweeps all users at a fixed interval and delivers to those whose
//! preferred time matches the current wall-clock minute.

use chrono::{NaiveTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

use lectio::{ReadingRepository, UserRepository};

use crate::application::DeliveryService;

/// Scheduler configuration
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Interval between sweeps
    pub interval: Duration,
    /// Enable/disable scheduler
    pub enabled: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60), // 1 minute
            enabled: true,
        }
    }
}

/// Result of one sweep
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepSummary {
    pub due: usize,
    pub delivered: usize,
    pub failed: usize,
}

/// Minute-resolution delivery scheduler
pub struct DeliveryScheduler<U: UserRepository, R: ReadingRepository> {
    users: Arc<U>,
    delivery: Arc<DeliveryService<U, R>>,
    config: SchedulerConfig,
}

impl<U, R> DeliveryScheduler<U, R>
where
    U: UserRepository + 'static,
    R: ReadingRepository + 'static,
{
    /// Creates a new scheduler
    pub fn new(
        users: Arc<U>,
        delivery: Arc<DeliveryService<U, R>>,
        config: Option<SchedulerConfig>,
    ) -> Self {
        Self {
            users,
            delivery,
            config: config.unwrap_or_default(),
        }
    }

    /// Start the scheduler (runs in background)
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }

    /// Run the scheduler loop
    async fn run(self) {
        if !self.config.enabled {
            tracing::info!("📅 Delivery scheduler disabled");
            return;
        }

        tracing::info!(
            "📅 Delivery scheduler started (interval: {:?})",
            self.config.interval
        );

        let mut ticker = interval(self.config.interval);
        // Late ticks evaluate at the time they actually run; minutes that
        // pass while the loop is stalled are not backfilled.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // Skip the first immediate tick
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let now = Utc::now().time();
            let summary = self.sweep(now).await;

            if summary.due > 0 {
                tracing::info!(
                    "🔄 Sweep at {}: {} due, {} delivered, {} failed",
                    now.format("%H:%M"),
                    summary.due,
                    summary.delivered,
                    summary.failed
                );
            }
        }
    }

    /// Deliver to every user whose preferred minute matches `now`.
    ///
    /// Failures are counted per user and never interrupt the sweep.
    pub async fn sweep(&self, now: NaiveTime) -> SweepSummary {
        let users = match self.users.find_all().await {
            Ok(users) => users,
            Err(e) => {
                tracing::error!("Sweep aborted, could not list users: {}", e);
                return SweepSummary::default();
            }
        };

        let mut summary = SweepSummary::default();

        for user in users.iter().filter(|u| u.delivery_time.matches(now)) {
            summary.due += 1;
            match self.delivery.deliver(user).await {
                Ok(outcome) => {
                    summary.delivered += 1;
                    tracing::info!(
                        "  ✅ {}: {} ({})",
                        user.name,
                        outcome.reference,
                        if outcome.reused { "reused" } else { "new" }
                    );
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!("  ❌ {}: {}", user.name, e);
                }
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fakes::{
        sample_user, InMemoryReadings, InMemoryUsers, RecordingRelay, StubSpeech,
    };
    use crate::application::DeliveryConfig;
    use lectio::User;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[allow(clippy::type_complexity)]
    fn scheduler(
        seed: Vec<User>,
    ) -> (
        Arc<InMemoryReadings>,
        Arc<RecordingRelay>,
        DeliveryScheduler<InMemoryUsers, InMemoryReadings>,
    ) {
        let users = Arc::new(InMemoryUsers::with(seed));
        let readings = Arc::new(InMemoryReadings::default());
        let relay = Arc::new(RecordingRelay::default());
        let delivery = Arc::new(DeliveryService::new(
            users.clone(),
            readings.clone(),
            Arc::new(StubSpeech::ok()),
            relay.clone(),
            DeliveryConfig::default(),
        ));
        (
            readings,
            relay,
            DeliveryScheduler::new(users, delivery, None),
        )
    }

    #[tokio::test]
    async fn test_sweep_delivers_at_the_preferred_minute() {
        // sample users prefer 08:00
        let user = sample_user("Maria", "+5511999990000");
        let (_, relay, scheduler) = scheduler(vec![user]);

        let summary = scheduler.sweep(at(8, 0, 30)).await;

        assert_eq!(
            summary,
            SweepSummary {
                due: 1,
                delivered: 1,
                failed: 0
            }
        );
        assert_eq!(relay.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_sweep_skips_other_minutes() {
        let user = sample_user("Maria", "+5511999990000");
        let (_, relay, scheduler) = scheduler(vec![user]);

        assert_eq!(scheduler.sweep(at(8, 1, 0)).await, SweepSummary::default());
        assert_eq!(
            scheduler.sweep(at(7, 59, 59)).await,
            SweepSummary::default()
        );
        assert!(relay.sent().is_empty());
    }

    #[tokio::test]
    async fn test_one_failing_user_does_not_stop_the_sweep() {
        let maria = sample_user("Maria", "+5511999990000");
        let joao = sample_user("João", "+5511888880000");
        let maria_id = maria.id;
        let (readings, relay, scheduler) = scheduler(vec![maria, joao]);
        readings.fail_for(maria_id);

        let summary = scheduler.sweep(at(8, 0, 0)).await;

        assert_eq!(
            summary,
            SweepSummary {
                due: 2,
                delivered: 1,
                failed: 1
            }
        );
        assert_eq!(relay.sent().len(), 1);
        assert_eq!(relay.sent()[0].phone, "+5511888880000");
    }

    #[tokio::test]
    async fn test_repeated_sweeps_reuse_the_pending_reading() {
        let user = sample_user("Maria", "+5511999990000");
        let (readings, relay, scheduler) = scheduler(vec![user]);

        scheduler.sweep(at(8, 0, 0)).await;
        scheduler.sweep(at(8, 0, 0)).await;

        assert_eq!(readings.len(), 1);
        assert_eq!(relay.sent().len(), 2);
    }
}
