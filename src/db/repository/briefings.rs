use chrono::{DateTime, NaiveDate, Utc};
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::{Briefing, BriefingStatus, BriefingUpdate};

pub struct BriefingRepository;

impl BriefingRepository {
    /// Ensure a row exists for the date. Re-running against an existing row
    /// is a no-op and never resets its status.
    pub async fn create(conn: &Connection, date: NaiveDate) -> Result<()> {
        conn.execute(
            "INSERT OR IGNORE INTO briefings (date, status) VALUES (?1, 'pending')",
            params![date.to_string()],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_date(conn: &Connection, date: NaiveDate) -> Result<Option<Briefing>> {
        let mut rows = conn
            .query(
                "SELECT * FROM briefings WHERE date = ?1",
                params![date.to_string()],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_briefing(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn get_latest(conn: &Connection) -> Result<Option<Briefing>> {
        let mut rows = conn
            .query("SELECT * FROM briefings ORDER BY date DESC LIMIT 1", ())
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_briefing(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn list(conn: &Connection, limit: u32, offset: u32) -> Result<Vec<Briefing>> {
        let mut rows = conn
            .query(
                "SELECT * FROM briefings ORDER BY date DESC LIMIT ?1 OFFSET ?2",
                params![limit, offset],
            )
            .await?;

        let mut briefings = Vec::new();
        while let Some(row) = rows.next().await? {
            briefings.push(Self::row_to_briefing(&row)?);
        }

        Ok(briefings)
    }

    pub async fn count(conn: &Connection) -> Result<u64> {
        let mut rows = conn.query("SELECT COUNT(*) FROM briefings", ()).await?;

        let total: i64 = if let Some(row) = rows.next().await? {
            row.get(0)?
        } else {
            0
        };

        Ok(total as u64)
    }

    /// Transition a briefing's status. With an update payload every result
    /// column is written; absent payload fields become NULL. Without one,
    /// only the status changes.
    pub async fn update_status(
        conn: &Connection,
        date: NaiveDate,
        status: BriefingStatus,
        update: Option<&BriefingUpdate>,
    ) -> Result<()> {
        match update {
            Some(data) => {
                let content = match &data.content {
                    Some(content) => Some(serde_json::to_string(content)?),
                    None => None,
                };
                let token_usage = match &data.token_usage {
                    Some(usage) => Some(serde_json::to_string(usage)?),
                    None => None,
                };

                conn.execute(
                    r#"
                    UPDATE briefings SET
                        status = ?2,
                        content = ?3,
                        raw_search_results = ?4,
                        ai_provider = ?5,
                        ai_model = ?6,
                        token_usage = ?7,
                        generation_time_ms = ?8,
                        error = ?9
                    WHERE date = ?1
                    "#,
                    params![
                        date.to_string(),
                        status.to_string(),
                        content,
                        data.raw_search_results.clone(),
                        data.ai_provider.clone(),
                        data.ai_model.clone(),
                        token_usage,
                        data.generation_time_ms,
                        data.error.clone(),
                    ],
                )
                .await?;
            }
            None => {
                conn.execute(
                    "UPDATE briefings SET status = ?2 WHERE date = ?1",
                    params![date.to_string(), status.to_string()],
                )
                .await?;
            }
        }

        Ok(())
    }

    fn row_to_briefing(row: &libsql::Row) -> Result<Briefing> {
        Ok(Briefing {
            id: row.get(0)?,
            date: row
                .get::<String>(1)?
                .parse()
                .unwrap_or_else(|_| Utc::now().date_naive()),
            status: row.get::<String>(2)?.parse().unwrap_or_default(),
            content: row
                .get::<Option<String>>(3)?
                .and_then(|raw| serde_json::from_str(&raw).ok()),
            raw_search_results: row.get(4)?,
            ai_provider: row.get(5)?,
            ai_model: row.get(6)?,
            token_usage: row
                .get::<Option<String>>(7)?
                .and_then(|raw| serde_json::from_str(&raw).ok()),
            generation_time_ms: row.get(8)?,
            error: row.get(9)?,
            created_at: DateTime::parse_from_rfc3339(&row.get::<String>(10)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}
