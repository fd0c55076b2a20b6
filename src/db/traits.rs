use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{Briefing, BriefingStatus, BriefingUpdate, ProfileUpdate, UserProfile};

// ---------------------------------------------------------------------------
// Individual store traits
// ---------------------------------------------------------------------------

/// Read and merge-update operations for the singleton user profile.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self) -> Result<UserProfile>;
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile>;
}

/// Lifecycle and query operations for date-keyed briefings.
#[async_trait]
pub trait BriefingStore: Send + Sync {
    /// Ensure a pending row exists for the date; no-op if one already does.
    async fn create_briefing(&self, date: NaiveDate) -> Result<()>;
    async fn get_briefing_by_date(&self, date: NaiveDate) -> Result<Option<Briefing>>;
    async fn get_latest_briefing(&self) -> Result<Option<Briefing>>;
    async fn list_briefings(&self, limit: u32, offset: u32) -> Result<Vec<Briefing>>;
    async fn count_briefings(&self) -> Result<u64>;
    async fn update_briefing_status(
        &self,
        date: NaiveDate,
        status: BriefingStatus,
        update: Option<&BriefingUpdate>,
    ) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Unified backend supertrait
// ---------------------------------------------------------------------------

/// A complete database backend that combines all store traits plus lifecycle
/// operations.
#[async_trait]
pub trait DatabaseBackend: ProfileStore + BriefingStore {
    /// Sync with remote (e.g. Turso replication). No-op for local-only backends.
    async fn sync(&self) -> Result<()>;
}
