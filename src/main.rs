mod ai;
mod api;
mod config;
mod db;
mod error;
mod generator;
mod models;
mod search;
mod services;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "daybrief")]
#[command(about = "Personalized daily tech briefing generator")]
struct Args {
    /// Generate a briefing immediately and exit instead of serving
    #[arg(long)]
    generate: bool,

    /// Date to generate for (YYYY-MM-DD, defaults to today)
    #[arg(long, requires = "generate")]
    date: Option<chrono::NaiveDate>,

    /// Regenerate even if a completed briefing already exists
    #[arg(long, requires = "generate")]
    force: bool,
}

use std::sync::Arc;

use chrono::Utc;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::db::{Database, DatabaseBackend, LibSqlBackend};
use crate::search::SearchExecutor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daybrief=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    tracing::info!("Initializing database...");
    let raw_db = Database::new(&config.database).await?;
    let db_backend = LibSqlBackend::new(raw_db);
    // Wrap in Arc<dyn DatabaseBackend> immediately so we can clone it
    let db: Arc<dyn DatabaseBackend> = Arc::new(db_backend);

    let search = SearchExecutor::new(&config.search)?;
    if !search.has_primary_provider() {
        tracing::warn!(
            "TAVILY_API_KEY is not set - searches will fall back to Hacker News and dev.to feeds"
        );
    }

    let ai = ai::AiGateway::from_config(&config.ai)?;
    tracing::info!("AI providers: {}", ai.provider_names().join(", "));

    let state = AppState::new(config.clone(), db, search, ai);

    if args.generate {
        let outcome = state.pipeline.generate(args.date, args.force).await;
        if outcome.success {
            tracing::info!("Briefing for {} generated", outcome.date);
            return Ok(());
        }
        let reason = outcome
            .error
            .unwrap_or_else(|| "unknown error".to_string());
        tracing::error!("Generation for {} failed: {}", outcome.date, reason);
        return Err(anyhow::anyhow!("generation failed: {reason}"));
    }

    let cancel_token = CancellationToken::new();

    if state.config.scheduler.enabled {
        let scheduler = services::Scheduler::new(
            state.db.clone(),
            state.pipeline.clone(),
            &state.config.scheduler,
        );
        tracing::info!(
            "Starting scheduler... (daily at {} UTC)",
            scheduler.schedule().format("%H:%M")
        );
        let token = cancel_token.child_token();
        tokio::spawn(async move {
            let _ = scheduler.catch_up().await;
            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        tracing::info!("Scheduler shutting down...");
                        break;
                    }
                    _ = tokio::time::sleep(scheduler.until_next_run(Utc::now())) => {
                        let _ = scheduler.run_once().await;
                    }
                }
            }
        });
    } else {
        tracing::info!("Scheduler disabled - briefings must be triggered via POST /api/v1/generate");
    }

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Daybrief starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token))
        .await?;

    Ok(())
}

async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, cancelling background tasks...");
    cancel_token.cancel();
}
