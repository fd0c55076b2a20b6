//! Briefing request/response DTOs for the v1 API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{self, BriefingContent, BriefingStatus, TokenUsage};

/// Query parameters for `GET /v1/briefings`.
///
/// `date` and `latest` are exclusive lookup modes returning a single
/// briefing; without either, the endpoint returns a paginated list.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
pub struct ListBriefingsQuery {
    /// Return only the briefing for this date (`YYYY-MM-DD`).
    #[schema(value_type = Option<String>)]
    #[param(value_type = Option<String>)]
    pub date: Option<NaiveDate>,
    /// Return only the most recent briefing.
    #[serde(default)]
    pub latest: bool,
    /// Page size for the list response (default 30).
    pub limit: Option<u32>,
    /// Number of briefings to skip (default 0).
    pub offset: Option<u32>,
}

/// A briefing as returned by the v1 API.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BriefingResponse {
    pub id: i64,
    /// Date this briefing covers (`YYYY-MM-DD`).
    #[schema(value_type = String)]
    pub date: NaiveDate,
    pub status: BriefingStatus,
    /// Parsed briefing content; present once generation completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<BriefingContent>,
    /// JSON-serialized search results the content was grounded on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_search_results: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_usage: Option<TokenUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_time_ms: Option<i64>,
    /// Failure reason recorded for failed generations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
}

impl From<models::Briefing> for BriefingResponse {
    fn from(briefing: models::Briefing) -> Self {
        Self {
            id: briefing.id,
            date: briefing.date,
            status: briefing.status,
            content: briefing.content,
            raw_search_results: briefing.raw_search_results,
            ai_provider: briefing.ai_provider,
            ai_model: briefing.ai_model,
            token_usage: briefing.token_usage,
            generation_time_ms: briefing.generation_time_ms,
            error: briefing.error,
            created_at: briefing.created_at,
        }
    }
}

/// Response body for the list form of `GET /v1/briefings`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ListBriefingsResponse {
    pub briefings: Vec<BriefingResponse>,
    /// The page size that was applied.
    pub limit: u32,
    /// The offset that was applied.
    pub offset: u32,
}
