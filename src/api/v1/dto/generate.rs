//! Generation trigger DTOs for the v1 API.

use serde::{Deserialize, Serialize};

use super::briefings::BriefingResponse;

/// Query parameters for `POST /v1/generate`.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
pub struct GenerateQuery {
    /// Regenerate even when today's briefing is already completed.
    #[serde(default)]
    pub force: bool,
}

/// Response body for a successful `POST /v1/generate`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct GenerateResponse {
    pub message: String,
    /// The briefing produced (or already present) for today.
    pub briefing: BriefingResponse,
}
