use std::sync::Arc;
use std::time::Instant;

use chrono::{NaiveDate, SecondsFormat, Utc};
use tokio::sync::Semaphore;
use tracing::{error, info};

use crate::ai::{prompts, AiGateway};
use crate::db::DatabaseBackend;
use crate::error::Result;
use crate::models::{BriefingStatus, BriefingUpdate};
use crate::search::SearchExecutor;

use super::parser::parse_briefing_content;

/// Outcome error when a second generation is attempted while one runs.
pub const ALREADY_IN_PROGRESS: &str = "Generation already in progress";

/// Outcome error when the profile has neither skills nor technologies.
pub const PROFILE_NOT_CONFIGURED: &str = "Profile not configured";

/// Error stored on the briefing record for the unconfigured-profile case.
const PROFILE_NOT_CONFIGURED_DETAIL: &str =
    "No skills or technologies configured. Please set up your profile first.";

/// What a generation attempt resolved to. The pipeline reports failures
/// through this instead of erroring.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub success: bool,
    pub date: NaiveDate,
    pub error: Option<String>,
}

enum RunResult {
    Generated,
    AlreadyCompleted,
    NotConfigured,
}

/// Orchestrates one briefing generation end to end: row bookkeeping,
/// profile check, search, prompting, AI fallback, parsing, persistence.
///
/// A single-permit semaphore makes generation single-flight per process;
/// competing callers are rejected immediately rather than queued.
pub struct GenerationPipeline {
    db: Arc<dyn DatabaseBackend>,
    search: SearchExecutor,
    ai: Arc<AiGateway>,
    language: String,
    guard: Arc<Semaphore>,
}

impl GenerationPipeline {
    pub fn new(
        db: Arc<dyn DatabaseBackend>,
        search: SearchExecutor,
        ai: Arc<AiGateway>,
        language: String,
    ) -> Self {
        Self {
            db,
            search,
            ai,
            language,
            guard: Arc::new(Semaphore::new(1)),
        }
    }

    /// Whether a generation is currently running in this process.
    pub fn is_generating(&self) -> bool {
        self.guard.available_permits() == 0
    }

    /// Generate the briefing for `date` (today when omitted). `force`
    /// bypasses the completed-record short-circuit; it never preempts a
    /// generation that is already running.
    ///
    /// Never returns an error: every failure is folded into the outcome,
    /// and the permit is released on all exit paths.
    pub async fn generate(&self, date: Option<NaiveDate>, force: bool) -> GenerationOutcome {
        let date = date.unwrap_or_else(|| Utc::now().date_naive());

        let _permit = match self.guard.clone().try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                info!(date = %date, "Rejecting generation, another one is in flight");
                return GenerationOutcome {
                    success: false,
                    date,
                    error: Some(ALREADY_IN_PROGRESS.to_string()),
                };
            }
        };

        match self.run(date, force).await {
            Ok(RunResult::Generated) | Ok(RunResult::AlreadyCompleted) => GenerationOutcome {
                success: true,
                date,
                error: None,
            },
            Ok(RunResult::NotConfigured) => GenerationOutcome {
                success: false,
                date,
                error: Some(PROFILE_NOT_CONFIGURED.to_string()),
            },
            Err(run_error) => {
                error!(date = %date, error = %run_error, "Briefing generation failed");
                let message = run_error.to_string();

                let update = BriefingUpdate {
                    error: Some(message.clone()),
                    ..Default::default()
                };
                if let Err(write_error) = self
                    .db
                    .update_briefing_status(date, BriefingStatus::Failed, Some(&update))
                    .await
                {
                    // Swallowed so the original failure stays the reported one.
                    error!(date = %date, error = %write_error, "Failed to record failure status");
                }

                GenerationOutcome {
                    success: false,
                    date,
                    error: Some(message),
                }
            }
        }
    }

    async fn run(&self, date: NaiveDate, force: bool) -> Result<RunResult> {
        if !force {
            if let Some(existing) = self.db.get_briefing_by_date(date).await? {
                if existing.status == BriefingStatus::Completed {
                    info!(date = %date, "Briefing already completed, skipping generation");
                    return Ok(RunResult::AlreadyCompleted);
                }
            }
        }

        info!(date = %date, force, "Starting briefing generation");
        let started = Instant::now();

        self.db.create_briefing(date).await?;
        self.db
            .update_briefing_status(date, BriefingStatus::Generating, None)
            .await?;

        let profile = self.db.get_profile().await?;
        if !profile.is_configured() {
            let update = BriefingUpdate {
                error: Some(PROFILE_NOT_CONFIGURED_DETAIL.to_string()),
                ..Default::default()
            };
            self.db
                .update_briefing_status(date, BriefingStatus::Failed, Some(&update))
                .await?;
            return Ok(RunResult::NotConfigured);
        }

        let results = self.search.execute(&profile, date).await?;
        info!(date = %date, results = results.len(), "Search phase complete");

        let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let system_prompt = prompts::system_prompt(&self.language);
        let user_prompt = prompts::user_prompt(&profile, &results, date, &generated_at);

        let generation = self
            .ai
            .generate_with_fallback(&system_prompt, &user_prompt)
            .await?;
        let content = parse_briefing_content(&generation.text)?;

        let update = BriefingUpdate {
            content: Some(content),
            raw_search_results: Some(serde_json::to_string(&results)?),
            ai_provider: Some(generation.provider.clone()),
            ai_model: Some(generation.model),
            token_usage: Some(generation.usage),
            generation_time_ms: Some(started.elapsed().as_millis() as i64),
            error: None,
        };
        self.db
            .update_briefing_status(date, BriefingStatus::Completed, Some(&update))
            .await?;

        info!(
            date = %date,
            provider = %generation.provider,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Briefing generation completed"
        );
        Ok(RunResult::Generated)
    }
}
