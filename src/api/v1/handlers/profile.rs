//! v1 Profile handlers.

use axum::extract::State;

use crate::api::v1::dto::profile::{ProfileResponse, UpdateProfileRequest};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;

/// `GET /api/v1/profile`
///
/// Returns the singleton user profile. The profile row is seeded with the
/// schema, so this only fails when the database is unreachable.
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    tag = "profile",
    operation_id = "profile.get",
    responses(
        (status = 200, description = "The user profile", body = ProfileResponse),
    )
)]
pub async fn get_profile(State(state): State<AppState>) -> ApiResponse<ProfileResponse> {
    match state.db.get_profile().await {
        Ok(profile) => ApiResponse::success(ProfileResponse::from(profile)),
        Err(e) => e.into(),
    }
}

/// `PUT /api/v1/profile`
///
/// Merge-updates the profile and returns the stored result. Clearing both
/// skills and technologies in one request is rejected, since a briefing
/// cannot be planned from an empty profile.
#[utoipa::path(
    put,
    path = "/api/v1/profile",
    tag = "profile",
    operation_id = "profile.update",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "The updated profile", body = ProfileResponse),
        (status = 400, description = "Invalid request", body = ApiError),
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<UpdateProfileRequest>,
) -> ApiResponse<ProfileResponse> {
    if let (Some(skills), Some(technologies)) = (&req.skills, &req.technologies) {
        if skills.is_empty() && technologies.is_empty() {
            return ApiResponse::error(
                ErrorCode::InvalidRequest,
                "At least one skill or technology is required",
            );
        }
    }

    match state.db.update_profile(&req.into()).await {
        Ok(profile) => ApiResponse::success(ProfileResponse::from(profile)),
        Err(e) => e.into(),
    }
}
