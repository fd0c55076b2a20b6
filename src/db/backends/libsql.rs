use async_trait::async_trait;
use chrono::NaiveDate;

use crate::db::connection::Database;
use crate::db::repository::{BriefingRepository, ProfileRepository};
use crate::db::traits::{BriefingStore, DatabaseBackend, ProfileStore};
use crate::error::Result;
use crate::models::{Briefing, BriefingStatus, BriefingUpdate, ProfileUpdate, UserProfile};

pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for LibSqlBackend {
    async fn get_profile(&self) -> Result<UserProfile> {
        let conn = self.db.connect()?;
        ProfileRepository::get(&conn).await
    }
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        let conn = self.db.connect()?;
        ProfileRepository::update(&conn, update).await
    }
}

#[async_trait]
impl BriefingStore for LibSqlBackend {
    async fn create_briefing(&self, date: NaiveDate) -> Result<()> {
        let conn = self.db.connect()?;
        BriefingRepository::create(&conn, date).await
    }
    async fn get_briefing_by_date(&self, date: NaiveDate) -> Result<Option<Briefing>> {
        let conn = self.db.connect()?;
        BriefingRepository::get_by_date(&conn, date).await
    }
    async fn get_latest_briefing(&self) -> Result<Option<Briefing>> {
        let conn = self.db.connect()?;
        BriefingRepository::get_latest(&conn).await
    }
    async fn list_briefings(&self, limit: u32, offset: u32) -> Result<Vec<Briefing>> {
        let conn = self.db.connect()?;
        BriefingRepository::list(&conn, limit, offset).await
    }
    async fn count_briefings(&self) -> Result<u64> {
        let conn = self.db.connect()?;
        BriefingRepository::count(&conn).await
    }
    async fn update_briefing_status(
        &self,
        date: NaiveDate,
        status: BriefingStatus,
        update: Option<&BriefingUpdate>,
    ) -> Result<()> {
        let conn = self.db.connect()?;
        BriefingRepository::update_status(&conn, date, status, update).await
    }
}

#[async_trait]
impl DatabaseBackend for LibSqlBackend {
    async fn sync(&self) -> Result<()> {
        self.db.sync().await
    }
}
