use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveTime, Utc};
use tracing::{error, info, warn};

use crate::config::SchedulerConfig;
use crate::db::DatabaseBackend;
use crate::generator::{GenerationOutcome, GenerationPipeline};
use crate::models::BriefingStatus;

const DEFAULT_SCHEDULE: &str = "07:00";

/// Triggers briefing generation once per day at a fixed `HH:MM` time (UTC),
/// plus a one-shot startup catch-up when today's run was missed.
///
/// The scheduler never serializes anything itself: overlapping triggers,
/// scheduled or manual, are resolved by the pipeline's single-flight guard.
#[derive(Clone)]
pub struct Scheduler {
    db: Arc<dyn DatabaseBackend>,
    pipeline: Arc<GenerationPipeline>,
    schedule: NaiveTime,
    catchup_delay_secs: u64,
}

impl Scheduler {
    pub fn new(
        db: Arc<dyn DatabaseBackend>,
        pipeline: Arc<GenerationPipeline>,
        config: &SchedulerConfig,
    ) -> Self {
        let schedule = match parse_schedule(&config.schedule) {
            Some(time) => time,
            None => {
                warn!(
                    "Invalid schedule '{}', expected HH:MM. Using {}.",
                    config.schedule, DEFAULT_SCHEDULE
                );
                parse_schedule(DEFAULT_SCHEDULE).unwrap_or_default()
            }
        };

        Self {
            db,
            pipeline,
            schedule,
            catchup_delay_secs: config.catchup_delay_secs,
        }
    }

    /// The time of day scheduled runs fire at.
    pub fn schedule(&self) -> NaiveTime {
        self.schedule
    }

    /// Time remaining until the first scheduled run strictly after `now`.
    pub fn until_next_run(&self, now: DateTime<Utc>) -> Duration {
        let today_run = now.date_naive().and_time(self.schedule).and_utc();
        let next = if today_run > now {
            today_run
        } else {
            today_run + chrono::Duration::days(1)
        };

        (next - now).to_std().unwrap_or(Duration::ZERO)
    }

    /// One scheduled tick: generate today's briefing unless it is already
    /// completed. Returns `None` when the tick was skipped.
    pub async fn run_once(&self) -> Option<GenerationOutcome> {
        let today = Utc::now().date_naive();

        match self.db.get_briefing_by_date(today).await {
            Ok(Some(existing)) if existing.status == BriefingStatus::Completed => {
                info!("Briefing for {} already exists, skipping scheduled run", today);
                return None;
            }
            Ok(_) => {}
            Err(e) => {
                // The pipeline re-checks; a failed lookup only costs the skip.
                warn!("Could not check briefing for {}: {}", today, e);
            }
        }

        info!("Scheduled generation triggered for {}", today);
        Some(self.generate_and_log(today, "Scheduled").await)
    }

    /// Startup catch-up: when today's scheduled time has already passed and
    /// the briefing is neither completed nor being generated, run generation
    /// after a short delay so the rest of the process can finish starting.
    pub async fn catch_up(&self) -> Option<GenerationOutcome> {
        let now = Utc::now();
        let today = now.date_naive();

        let existing = match self.db.get_briefing_by_date(today).await {
            Ok(briefing) => briefing,
            Err(e) => {
                warn!("Could not check briefing for {} during catch-up: {}", today, e);
                None
            }
        };

        if !self.should_catch_up(existing.map(|b| b.status), now.time()) {
            return None;
        }

        info!("Catch-up: generating missed briefing for {}", today);
        tokio::time::sleep(Duration::from_secs(self.catchup_delay_secs)).await;

        Some(self.generate_and_log(today, "Catch-up").await)
    }

    async fn generate_and_log(
        &self,
        date: chrono::NaiveDate,
        trigger: &str,
    ) -> GenerationOutcome {
        let outcome = self.pipeline.generate(Some(date), false).await;
        if outcome.success {
            info!("{} generation for {} succeeded", trigger, date);
        } else {
            error!(
                "{} generation for {} failed: {}",
                trigger,
                date,
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
        outcome
    }

    fn should_catch_up(&self, existing: Option<BriefingStatus>, now: NaiveTime) -> bool {
        match existing {
            Some(BriefingStatus::Completed) | Some(BriefingStatus::Generating) => false,
            _ => now >= self.schedule,
        }
    }
}

fn parse_schedule(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}
