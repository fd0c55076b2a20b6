use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::models;

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Daybrief API",
        version = "1.0.0",
        description = "Personalized daily tech briefing generator. REST API for profile management and briefing generation.",
    ),
    paths(
        handlers::health::health_check,
        handlers::generate::trigger_generation,
        handlers::briefings::get_briefings,
        handlers::profile::get_profile,
        handlers::profile::update_profile,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        response::ResponseMeta,
        // Briefings
        dto::briefings::ListBriefingsQuery,
        dto::briefings::BriefingResponse,
        dto::briefings::ListBriefingsResponse,
        // Generation
        dto::generate::GenerateQuery,
        dto::generate::GenerateResponse,
        // Profile
        dto::profile::UpdateProfileRequest,
        dto::profile::ProfileResponse,
        // Domain models embedded in DTOs
        models::BriefingStatus,
        models::BriefingContent,
        models::BriefingSections,
        models::TechSection,
        models::NewsSection,
        models::IdeaSection,
        models::TechItem,
        models::NewsItem,
        models::IdeaItem,
        models::TokenUsage,
        models::Project,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::DatabaseStatus,
        handlers::health::SearchStatus,
        handlers::health::AiStatus,
        handlers::health::SchedulerStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "generate", description = "Briefing generation trigger"),
        (name = "briefings", description = "Briefing lookup and listing"),
        (name = "profile", description = "User profile management"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
