//! v1 Generation trigger handler.

use axum::extract::{Query, State};
use chrono::Utc;

use crate::api::v1::dto::generate::{GenerateQuery, GenerateResponse};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::generator::ALREADY_IN_PROGRESS;
use crate::models::BriefingStatus;

/// `POST /api/v1/generate`
///
/// Triggers briefing generation for today and waits for it to finish.
/// Responds 429 while another generation is running, and 409 when today's
/// briefing is already completed unless `force=true` is passed.
#[utoipa::path(
    post,
    path = "/api/v1/generate",
    tag = "generate",
    operation_id = "generate.trigger",
    params(GenerateQuery),
    responses(
        (status = 200, description = "Briefing generated", body = GenerateResponse),
        (status = 409, description = "Briefing for today already exists", body = ApiError),
        (status = 429, description = "Generation already in progress", body = ApiError),
        (status = 500, description = "Generation failed", body = ApiError),
    )
)]
pub async fn trigger_generation(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
) -> ApiResponse<GenerateResponse> {
    if state.pipeline.is_generating() {
        return ApiResponse::error(ErrorCode::TooManyRequests, ALREADY_IN_PROGRESS);
    }

    let today = Utc::now().date_naive();

    if !query.force {
        match state.db.get_briefing_by_date(today).await {
            Ok(Some(existing)) if existing.status == BriefingStatus::Completed => {
                return ApiResponse::error(
                    ErrorCode::Conflict,
                    "Briefing for today already exists",
                );
            }
            Ok(_) => {}
            Err(e) => return e.into(),
        }
    }

    let outcome = state.pipeline.generate(Some(today), query.force).await;

    if !outcome.success {
        let message = outcome
            .error
            .unwrap_or_else(|| "Generation failed".to_string());
        // Two triggers can race past the is_generating check; the loser of
        // the permit still maps to 429 rather than a generic failure.
        let code = if message == ALREADY_IN_PROGRESS {
            ErrorCode::TooManyRequests
        } else {
            ErrorCode::GenerationFailed
        };
        return ApiResponse::error(code, message);
    }

    match state.db.get_briefing_by_date(outcome.date).await {
        Ok(Some(briefing)) => ApiResponse::success(GenerateResponse {
            message: "Briefing generated successfully".to_string(),
            briefing: briefing.into(),
        }),
        Ok(None) => {
            ApiResponse::error(ErrorCode::InternalError, "An internal error occurred")
        }
        Err(e) => e.into(),
    }
}
