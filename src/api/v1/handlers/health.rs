use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::v1::response::ApiResponse;

/// Health data returned inside the v1 envelope.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub database: DatabaseStatus,
    pub search: SearchStatus,
    pub ai: AiStatus,
    pub scheduler: SchedulerStatus,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct DatabaseStatus {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct SearchStatus {
    /// `"tavily"` when a search API key is configured, `"feeds"` when only
    /// the fallback feeds are available.
    pub provider: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct AiStatus {
    /// Configured providers in fallback order.
    pub providers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct SchedulerStatus {
    pub enabled: bool,
    /// Daily trigger time (`HH:MM`, UTC).
    pub schedule: String,
}

/// `GET /api/v1/health`
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthData> {
    let database = match state.db.sync().await {
        Ok(_) => DatabaseStatus {
            status: "ok".to_string(),
        },
        Err(_) => DatabaseStatus {
            status: "error".to_string(),
        },
    };

    let search = SearchStatus {
        provider: if state.search.has_primary_provider() {
            "tavily".to_string()
        } else {
            "feeds".to_string()
        },
    };

    let ai = AiStatus {
        providers: state
            .ai
            .provider_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };

    let scheduler = SchedulerStatus {
        enabled: state.config.scheduler.enabled,
        schedule: state.config.scheduler.schedule.clone(),
    };

    ApiResponse::success(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        search,
        ai,
        scheduler,
    })
}
