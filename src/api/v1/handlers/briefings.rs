//! v1 Briefing handlers.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};

use crate::api::v1::dto::briefings::{
    BriefingResponse, ListBriefingsQuery, ListBriefingsResponse,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode, ResponseMeta};
use crate::api::AppState;

const DEFAULT_LIMIT: u32 = 30;

/// `GET /api/v1/briefings`
///
/// Three lookup modes share this endpoint:
/// - `?date=YYYY-MM-DD` returns that day's briefing, or 404.
/// - `?latest=true` returns the most recent briefing, or 404.
/// - otherwise a date-descending page of briefings.
#[utoipa::path(
    get,
    path = "/api/v1/briefings",
    tag = "briefings",
    operation_id = "briefings.get",
    params(ListBriefingsQuery),
    responses(
        (status = 200, description = "A single briefing (date/latest mode) or a page of briefings", body = ListBriefingsResponse),
        (status = 404, description = "No matching briefing", body = ApiError),
    )
)]
pub async fn get_briefings(
    State(state): State<AppState>,
    Query(query): Query<ListBriefingsQuery>,
) -> Response {
    if let Some(date) = query.date {
        return match state.db.get_briefing_by_date(date).await {
            Ok(Some(briefing)) => {
                ApiResponse::success(BriefingResponse::from(briefing)).into_response()
            }
            Ok(None) => ApiResponse::<BriefingResponse>::error(
                ErrorCode::NotFound,
                "Briefing not found",
            )
            .into_response(),
            Err(e) => ApiResponse::<BriefingResponse>::from(e).into_response(),
        };
    }

    if query.latest {
        return match state.db.get_latest_briefing().await {
            Ok(Some(briefing)) => {
                ApiResponse::success(BriefingResponse::from(briefing)).into_response()
            }
            Ok(None) => ApiResponse::<BriefingResponse>::error(
                ErrorCode::NotFound,
                "No briefings found",
            )
            .into_response(),
            Err(e) => ApiResponse::<BriefingResponse>::from(e).into_response(),
        };
    }

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let offset = query.offset.unwrap_or(0);

    let briefings = match state.db.list_briefings(limit, offset).await {
        Ok(briefings) => briefings,
        Err(e) => return ApiResponse::<ListBriefingsResponse>::from(e).into_response(),
    };

    // Total is advisory; the page itself is already fetched.
    let total = match state.db.count_briefings().await {
        Ok(total) => Some(total),
        Err(e) => {
            tracing::warn!(error = %e, "Briefing count unavailable for list response");
            None
        }
    };

    let body = ListBriefingsResponse {
        briefings: briefings.into_iter().map(Into::into).collect(),
        limit,
        offset,
    };
    ApiResponse::success_with_meta(body, ResponseMeta { total }).into_response()
}
