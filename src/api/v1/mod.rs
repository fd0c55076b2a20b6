pub mod dto;
pub mod handlers;
pub mod openapi;
pub mod response;
pub mod router;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use tower::ServiceExt;

    use crate::api::routes::create_router;
    use crate::api::state::AppState;
    use crate::config::{
        AiConfig, Config, DatabaseConfig, SchedulerConfig, SearchConfig, ServerConfig,
    };
    use crate::db::DatabaseBackend;
    use crate::models::BriefingStatus;

    async fn test_state() -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: ":memory:".to_string(),
                auth_token: None,
                local_path: None,
            },
            search: SearchConfig {
                tavily_api_key: None,
                tavily_base_url: "http://127.0.0.1:1".to_string(),
                hackernews_base_url: "http://127.0.0.1:1".to_string(),
                devto_base_url: "http://127.0.0.1:1".to_string(),
                max_results_per_query: 3,
                fallback_limit: 15,
                timeout_secs: 1,
            },
            ai: AiConfig {
                anthropic_api_key: Some("sk-ant-test".to_string()),
                anthropic_base_url: "http://127.0.0.1:1".to_string(),
                anthropic_model: "claude-sonnet-4-5".to_string(),
                gemini_api_key: None,
                gemini_base_url: "http://127.0.0.1:1".to_string(),
                gemini_model: "gemini-2.5-flash".to_string(),
                max_tokens: 4096,
                timeout_secs: 1,
                language: "English".to_string(),
            },
            scheduler: SchedulerConfig {
                enabled: false,
                schedule: "07:00".to_string(),
                catchup_delay_secs: 0,
            },
        };

        let raw_db = crate::db::Database::new(&config.database).await.unwrap();
        let db_backend = crate::db::LibSqlBackend::new(raw_db);
        let db: Arc<dyn DatabaseBackend> = Arc::new(db_backend);

        let search = crate::search::SearchExecutor::new(&config.search).unwrap();
        let ai = crate::ai::AiGateway::from_config(&config.ai).unwrap();

        AppState::new(config, db, search, ai)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_component_status() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json.get("data").is_some(), "success should have 'data' key");
        assert!(
            json.get("error").is_none(),
            "success should NOT have 'error' key"
        );
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["database"]["status"], "ok");
        assert_eq!(json["data"]["search"]["provider"], "feeds");
        assert_eq!(
            json["data"]["ai"]["providers"],
            serde_json::json!(["claude"])
        );
        assert_eq!(json["data"]["scheduler"]["enabled"], false);
        assert_eq!(json["data"]["scheduler"]["schedule"], "07:00");
    }

    #[tokio::test]
    async fn openapi_json_is_valid() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let version = json["openapi"]
            .as_str()
            .expect("openapi field should be a string");
        assert!(
            version.starts_with("3"),
            "OpenAPI version should start with 3, got: {version}"
        );
    }

    #[tokio::test]
    async fn profile_starts_empty() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/profile")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["skills"], serde_json::json!([]));
        assert_eq!(json["data"]["technologies"], serde_json::json!([]));
        assert!(
            json["data"].get("name").is_none(),
            "unset name should be omitted"
        );
    }

    #[tokio::test]
    async fn profile_update_roundtrips() {
        let app = create_router(test_state().await);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/profile")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"name":"Dana","skills":["Rust"],"technologies":["tokio"]}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["name"], "Dana");
        assert_eq!(json["data"]["skills"], serde_json::json!(["Rust"]));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/profile")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["data"]["technologies"], serde_json::json!(["tokio"]));
    }

    #[tokio::test]
    async fn profile_update_rejects_clearing_both_lists() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/profile")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"skills":[],"technologies":[]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(
            json.get("data").is_none(),
            "error response should NOT have 'data' key"
        );
        assert_eq!(json["error"]["code"], "invalid_request");
        assert_eq!(
            json["error"]["message"],
            "At least one skill or technology is required"
        );
    }

    #[tokio::test]
    async fn briefings_list_is_empty_initially() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/briefings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["briefings"], serde_json::json!([]));
        assert_eq!(json["data"]["limit"], 30);
        assert_eq!(json["data"]["offset"], 0);
        assert_eq!(json["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn briefings_by_date_misses_with_404() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/briefings?date=2025-01-01")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "not_found");
        assert_eq!(json["error"]["message"], "Briefing not found");
    }

    #[tokio::test]
    async fn briefings_latest_misses_with_404() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/briefings?latest=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "No briefings found");
    }

    #[tokio::test]
    async fn briefings_by_date_returns_seeded_row() {
        let state = test_state().await;
        state
            .db
            .create_briefing("2025-03-10".parse().unwrap())
            .await
            .unwrap();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/briefings?date=2025-03-10")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["date"], "2025-03-10");
        assert_eq!(json["data"]["status"], "pending");
        assert!(
            json["data"].get("content").is_none(),
            "empty content should be omitted"
        );
    }

    #[tokio::test]
    async fn generate_without_profile_reports_failure() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/generate")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "generation_failed");
        assert_eq!(json["error"]["message"], "Profile not configured");
    }

    #[tokio::test]
    async fn generate_conflicts_with_completed_briefing() {
        let state = test_state().await;
        let today = Utc::now().date_naive();
        state.db.create_briefing(today).await.unwrap();
        state
            .db
            .update_briefing_status(today, BriefingStatus::Completed, None)
            .await
            .unwrap();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/generate")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "conflict");
        assert_eq!(json["error"]["message"], "Briefing for today already exists");
    }

    #[tokio::test]
    async fn generate_with_unreachable_providers_records_failure() {
        let app = create_router(test_state().await);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/profile")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"skills":["Rust"],"technologies":["axum"]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/generate")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "generation_failed");
        let message = json["error"]["message"].as_str().unwrap();
        assert!(
            message.contains("All AI providers failed"),
            "unexpected failure message: {message}"
        );

        let today = Utc::now().date_naive();
        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/briefings?date={today}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "failed");
        assert!(json["data"]["error"].is_string());
    }
}
