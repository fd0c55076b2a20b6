use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single local user profile. Seeds search planning and prompt
/// construction; the generation pipeline never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub name: Option<String>,
    pub skills: Vec<String>,
    pub technologies: Vec<String>,
    pub projects: Vec<Project>,
    pub interests: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// A profile with neither skills nor technologies cannot seed a
    /// meaningful briefing.
    pub fn is_configured(&self) -> bool {
        !self.skills.is_empty() || !self.technologies.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
}

/// Partial profile update. Absent fields keep their current values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub skills: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub projects: Option<Vec<Project>>,
    pub interests: Option<Vec<String>>,
}
