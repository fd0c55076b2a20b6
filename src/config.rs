use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub search: SearchConfig,
    pub ai: AiConfig,
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub auth_token: Option<String>,
    pub local_path: Option<String>,
}

/// Search layer configuration: the primary web-search provider plus the
/// two fallback content feeds.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub tavily_api_key: Option<String>,
    pub tavily_base_url: String,
    pub hackernews_base_url: String,
    pub devto_base_url: String,
    /// Results requested per planned query on the primary path.
    pub max_results_per_query: u32,
    /// Total item budget for the feed fallback, split across feeds.
    pub fallback_limit: u32,
    pub timeout_secs: u64,
}

/// AI gateway configuration for both generation providers.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    pub anthropic_api_key: Option<String>,
    pub anthropic_base_url: String,
    pub anthropic_model: String,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    /// Output language the system prompt mandates.
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    pub enabled: bool,
    /// Daily generation time as `HH:MM` (UTC).
    pub schedule: String,
    pub catchup_delay_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("DAYBRIEF_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("DAYBRIEF_PORT", 8080),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "file:daybrief.db".to_string()),
                auth_token: env::var("DATABASE_AUTH_TOKEN").ok(),
                local_path: env::var("DATABASE_LOCAL_PATH").ok(),
            },
            search: SearchConfig {
                tavily_api_key: env::var("TAVILY_API_KEY").ok(),
                tavily_base_url: env::var("TAVILY_BASE_URL")
                    .unwrap_or_else(|_| "https://api.tavily.com".to_string()),
                hackernews_base_url: env::var("HACKERNEWS_BASE_URL")
                    .unwrap_or_else(|_| "https://hn.algolia.com".to_string()),
                devto_base_url: env::var("DEVTO_BASE_URL")
                    .unwrap_or_else(|_| "https://dev.to".to_string()),
                max_results_per_query: parse_env_or("SEARCH_MAX_RESULTS_PER_QUERY", 3),
                fallback_limit: parse_env_or("SEARCH_FALLBACK_LIMIT", 15),
                timeout_secs: parse_env_or("SEARCH_TIMEOUT", 20),
            },
            ai: AiConfig {
                anthropic_api_key: env::var("ANTHROPIC_API_KEY").ok(),
                anthropic_base_url: env::var("ANTHROPIC_BASE_URL")
                    .unwrap_or_else(|_| "https://api.anthropic.com".to_string()),
                anthropic_model: env::var("ANTHROPIC_MODEL")
                    .unwrap_or_else(|_| "claude-sonnet-4-5-20250929".to_string()),
                gemini_api_key: env::var("GEMINI_API_KEY").ok(),
                gemini_base_url: env::var("GEMINI_BASE_URL")
                    .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
                gemini_model: env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| "gemini-3-flash-preview".to_string()),
                max_tokens: parse_env_or("AI_MAX_TOKENS", 4096),
                timeout_secs: parse_env_or("AI_TIMEOUT", 120),
                language: env::var("BRIEFING_LANGUAGE").unwrap_or_else(|_| "English".to_string()),
            },
            scheduler: SchedulerConfig {
                enabled: parse_env_or("SCHEDULER_ENABLED", true),
                schedule: env::var("GENERATION_SCHEDULE").unwrap_or_else(|_| "07:00".to_string()),
                catchup_delay_secs: parse_env_or("SCHEDULER_CATCHUP_DELAY", 5),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
