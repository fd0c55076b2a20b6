use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::{DaybriefError, Result};
use crate::models::{SearchResult, SearchSource};

/// Client for the Tavily web search API, the primary search provider.
#[derive(Clone, Debug)]
pub struct TavilyClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct TavilyRequest {
    query: String,
    api_key: String,
    search_depth: String,
    max_results: u32,
    include_answer: bool,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyHit>,
}

#[derive(Debug, Deserialize)]
struct TavilyHit {
    #[serde(default)]
    title: String,
    url: String,
    #[serde(default)]
    content: String,
    score: Option<f64>,
}

impl TavilyClient {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let api_key = config
            .tavily_api_key
            .clone()
            .ok_or_else(|| DaybriefError::Search("API key required for Tavily".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DaybriefError::Search(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.tavily_base_url.clone(),
        })
    }

    pub async fn search(&self, query: &str, max_results: u32) -> Result<Vec<SearchResult>> {
        let request = TavilyRequest {
            query: query.to_string(),
            api_key: self.api_key.clone(),
            search_depth: "basic".to_string(),
            max_results,
            include_answer: false,
        };

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DaybriefError::Search(format!(
                "Tavily search failed: {}",
                response.status()
            )));
        }

        let data: TavilyResponse = response.json().await?;

        Ok(data
            .results
            .into_iter()
            .map(|hit| SearchResult {
                title: hit.title,
                url: hit.url,
                content: hit.content,
                score: hit.score,
                source: SearchSource::Tavily,
            })
            .collect())
    }
}
