use std::collections::HashSet;

use chrono::NaiveDate;
use futures::future::join_all;
use tracing::{info, warn};

use crate::config::SearchConfig;
use crate::error::Result;
use crate::models::{SearchResult, UserProfile};

use super::feeds::{DevToClient, HackerNewsClient};
use super::planner::{build_search_plan, SearchPlan};
use super::tavily::TavilyClient;

/// Runs a generation run's searches: Tavily per planned query when
/// configured, with the content feeds as fallback.
#[derive(Clone)]
pub struct SearchExecutor {
    config: SearchConfig,
    tavily: Option<TavilyClient>,
    hackernews: HackerNewsClient,
    devto: DevToClient,
}

impl SearchExecutor {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let tavily = if config.tavily_api_key.is_some() {
            Some(TavilyClient::new(config)?)
        } else {
            None
        };

        Ok(Self {
            config: config.clone(),
            tavily,
            hackernews: HackerNewsClient::new(config)?,
            devto: DevToClient::new(config)?,
        })
    }

    pub fn has_primary_provider(&self) -> bool {
        self.tavily.is_some()
    }

    /// Execute the full search phase for a profile. Individual query and
    /// feed failures degrade to zero results; this only errors when the
    /// search phase cannot run at all.
    pub async fn execute(
        &self,
        profile: &UserProfile,
        date: NaiveDate,
    ) -> Result<Vec<SearchResult>> {
        let plan = build_search_plan(profile, date);
        info!(
            queries = plan.queries.len(),
            tags = plan.tags.len(),
            "Built search plan"
        );

        let mut results = Vec::new();

        if let Some(ref tavily) = self.tavily {
            let max_results = self.config.max_results_per_query;
            let searches = plan.queries.iter().map(|query| async move {
                match tavily.search(query, max_results).await {
                    Ok(hits) => hits,
                    Err(error) => {
                        warn!(query = %query, error = %error, "Search query failed");
                        Vec::new()
                    }
                }
            });

            for hits in join_all(searches).await {
                results.extend(hits);
            }
        }

        if results.is_empty() {
            info!("Primary search yielded nothing, falling back to content feeds");
            results.extend(self.feed_fallback(&plan).await);
        }

        Ok(dedup_by_url(results))
    }

    /// Query both feeds concurrently, splitting the fallback budget between
    /// them. A failing feed never takes the other one down with it.
    async fn feed_fallback(&self, plan: &SearchPlan) -> Vec<SearchResult> {
        let limit = self.config.fallback_limit;
        let (hn, devto) = tokio::join!(
            self.hackernews.search(&plan.tags, limit.div_ceil(2)),
            self.devto.search(&plan.tags, limit / 2),
        );

        let mut results = Vec::new();
        match hn {
            Ok(hits) => results.extend(hits),
            Err(error) => warn!(error = %error, "Hacker News feed failed"),
        }
        match devto {
            Ok(hits) => results.extend(hits),
            Err(error) => warn!(error = %error, "dev.to feed failed"),
        }

        results
    }
}

/// Drop repeated URLs, keeping each URL's first occurrence in order.
fn dedup_by_url(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|result| seen.insert(result.url.clone()))
        .collect()
}
