//! Profile request/response DTOs for the v1 API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{self, Project};

/// Request body for `PUT /v1/profile`. Every field is optional; absent
/// fields keep their stored values, present fields replace them wholesale.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// Display name used in prompts.
    pub name: Option<String>,
    /// Skills, e.g. `"Rust"` or `"distributed systems"`.
    pub skills: Option<Vec<String>>,
    /// Technologies to track for updates and releases.
    pub technologies: Option<Vec<String>>,
    /// Active projects, used to tailor improvement suggestions.
    pub projects: Option<Vec<Project>>,
    /// Broader interest areas, e.g. `"AI"` or `"databases"`.
    pub interests: Option<Vec<String>>,
}

impl From<UpdateProfileRequest> for models::ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name,
            skills: req.skills,
            technologies: req.technologies,
            projects: req.projects,
            interests: req.interests,
        }
    }
}

/// Profile payload for `GET /v1/profile` and `PUT /v1/profile`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub skills: Vec<String>,
    pub technologies: Vec<String>,
    pub projects: Vec<Project>,
    pub interests: Vec<String>,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String)]
    pub updated_at: DateTime<Utc>,
}

impl From<models::UserProfile> for ProfileResponse {
    fn from(profile: models::UserProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            skills: profile.skills,
            technologies: profile.technologies,
            projects: profile.projects,
            interests: profile.interests,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
