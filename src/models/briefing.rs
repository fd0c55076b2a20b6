use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a date-keyed briefing: `pending -> generating ->
/// {completed | failed}`. Terminal states stay put unless a caller forces
/// regeneration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BriefingStatus {
    #[default]
    Pending,
    Generating,
    Completed,
    Failed,
}

impl std::fmt::Display for BriefingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Generating => write!(f, "generating"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for BriefingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "generating" => Ok(Self::Generating),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            _ => Err(format!("Unknown briefing status: {s}")),
        }
    }
}

/// One generated daily briefing plus its provenance metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Briefing {
    pub id: i64,
    pub date: NaiveDate,
    pub status: BriefingStatus,
    pub content: Option<BriefingContent>,
    /// Search results serialized as an opaque JSON blob at generation time.
    pub raw_search_results: Option<String>,
    pub ai_provider: Option<String>,
    pub ai_model: Option<String>,
    pub token_usage: Option<TokenUsage>,
    pub generation_time_ms: Option<i64>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, utoipa::ToSchema)]
pub struct TokenUsage {
    pub input: u32,
    pub output: u32,
}

/// The structured document the AI produces. All three sections must be
/// present and well-typed or the document is rejected as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BriefingContent {
    pub summary: String,
    pub sections: BriefingSections,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BriefingSections {
    pub new_technologies: TechSection,
    pub tech_news: NewsSection,
    pub project_ideas: IdeaSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct TechSection {
    pub title: String,
    pub items: Vec<TechItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct NewsSection {
    pub title: String,
    pub items: Vec<NewsItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct IdeaSection {
    pub title: String,
    pub items: Vec<IdeaItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct TechItem {
    pub name: String,
    pub description: String,
    pub relevance: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct NewsItem {
    pub headline: String,
    pub summary: String,
    pub source: String,
    pub url: String,
    pub relevance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct IdeaItem {
    pub project: String,
    pub suggestion: String,
    pub rationale: String,
    pub resources: Vec<String>,
}

/// Data written alongside a status transition. Absent fields persist as
/// NULL, mirroring the full-row update the store performs.
#[derive(Debug, Clone, Default)]
pub struct BriefingUpdate {
    pub content: Option<BriefingContent>,
    pub raw_search_results: Option<String>,
    pub ai_provider: Option<String>,
    pub ai_model: Option<String>,
    pub token_usage: Option<TokenUsage>,
    pub generation_time_ms: Option<i64>,
    pub error: Option<String>,
}
