use chrono::{DateTime, Utc};
use libsql::{params, Connection};

use crate::error::{DaybriefError, Result};
use crate::models::{ProfileUpdate, UserProfile};

pub struct ProfileRepository;

impl ProfileRepository {
    pub async fn get(conn: &Connection) -> Result<UserProfile> {
        let mut rows = conn
            .query("SELECT * FROM user_profile WHERE id = 1", ())
            .await?;

        if let Some(row) = rows.next().await? {
            Self::row_to_profile(&row)
        } else {
            // Schema init seeds row 1, so a miss means the database was never
            // initialized through `Database::new`.
            Err(DaybriefError::NotFound("User profile not found".to_string()))
        }
    }

    /// Merge the update into the stored profile. Fields left out of the
    /// update keep their current values.
    pub async fn update(conn: &Connection, update: &ProfileUpdate) -> Result<UserProfile> {
        let current = Self::get(conn).await?;

        let name = update.name.clone().or(current.name);
        let skills = update.skills.clone().unwrap_or(current.skills);
        let technologies = update.technologies.clone().unwrap_or(current.technologies);
        let interests = update.interests.clone().unwrap_or(current.interests);
        let projects = update.projects.clone().unwrap_or(current.projects);

        conn.execute(
            r#"
            UPDATE user_profile SET
                name = ?1,
                skills = ?2,
                technologies = ?3,
                interests = ?4,
                projects = ?5,
                updated_at = ?6
            WHERE id = 1
            "#,
            params![
                name,
                serde_json::to_string(&skills)?,
                serde_json::to_string(&technologies)?,
                serde_json::to_string(&interests)?,
                serde_json::to_string(&projects)?,
                Utc::now().to_rfc3339(),
            ],
        )
        .await?;

        Self::get(conn).await
    }

    fn row_to_profile(row: &libsql::Row) -> Result<UserProfile> {
        Ok(UserProfile {
            id: row.get(0)?,
            name: row.get(1)?,
            skills: serde_json::from_str(&row.get::<String>(2)?).unwrap_or_default(),
            technologies: serde_json::from_str(&row.get::<String>(3)?).unwrap_or_default(),
            interests: serde_json::from_str(&row.get::<String>(4)?).unwrap_or_default(),
            projects: serde_json::from_str(&row.get::<String>(5)?).unwrap_or_default(),
            created_at: DateTime::parse_from_rfc3339(&row.get::<String>(6)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
            updated_at: DateTime::parse_from_rfc3339(&row.get::<String>(7)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}
