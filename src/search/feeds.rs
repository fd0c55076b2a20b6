use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::config::SearchConfig;
use crate::error::{DaybriefError, Result};
use crate::models::{SearchResult, SearchSource};

/// Tag used for the dev.to feed when the plan produced no tags at all.
const DEFAULT_DEVTO_TAG: &str = "programming";

/// How much of a story's body text is kept as the result snippet.
const STORY_TEXT_SNIPPET_CHARS: usize = 500;

/// Client for the Hacker News Algolia search API (first fallback feed).
#[derive(Clone, Debug)]
pub struct HackerNewsClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct HackerNewsResponse {
    #[serde(default)]
    hits: Vec<HackerNewsHit>,
}

#[derive(Debug, Deserialize)]
struct HackerNewsHit {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(rename = "objectID")]
    object_id: String,
    #[serde(default)]
    story_text: Option<String>,
}

impl HackerNewsClient {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DaybriefError::Search(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.hackernews_base_url.clone(),
        })
    }

    /// Search recent stories matching any of the first three tags.
    pub async fn search(&self, tags: &[String], limit: u32) -> Result<Vec<SearchResult>> {
        let query = tags
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" OR ");

        let mut url = Url::parse(&format!("{}/api/v1/search_by_date", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("query", &query)
            .append_pair("tags", "story")
            .append_pair("hitsPerPage", &limit.to_string());

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(DaybriefError::Search(format!(
                "Hacker News search failed: {}",
                response.status()
            )));
        }

        let data: HackerNewsResponse = response.json().await?;

        Ok(data
            .hits
            .into_iter()
            .map(|hit| {
                let title = hit.title.unwrap_or_default();
                let url = hit.url.filter(|u| !u.is_empty()).unwrap_or_else(|| {
                    format!("https://news.ycombinator.com/item?id={}", hit.object_id)
                });
                let snippet: String = hit
                    .story_text
                    .unwrap_or_default()
                    .chars()
                    .take(STORY_TEXT_SNIPPET_CHARS)
                    .collect();
                SearchResult {
                    content: format!("{title}. {snippet}"),
                    title,
                    url,
                    score: None,
                    source: SearchSource::Hackernews,
                }
            })
            .filter(|result| !result.title.is_empty() && !result.url.is_empty())
            .collect())
    }
}

/// Client for the dev.to articles API (second fallback feed).
#[derive(Clone, Debug)]
pub struct DevToClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct DevToArticle {
    title: String,
    url: String,
    #[serde(default)]
    description: Option<String>,
}

impl DevToClient {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DaybriefError::Search(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.devto_base_url.clone(),
        })
    }

    /// Fetch top articles for the first tag. The API filters by a single
    /// tag, so the rest of the plan's tags are ignored here.
    pub async fn search(&self, tags: &[String], limit: u32) -> Result<Vec<SearchResult>> {
        let tag = tags
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_DEVTO_TAG);

        let mut url = Url::parse(&format!("{}/api/articles", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("tag", tag)
            .append_pair("per_page", &limit.to_string())
            .append_pair("top", "1");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(DaybriefError::Search(format!(
                "dev.to search failed: {}",
                response.status()
            )));
        }

        let articles: Vec<DevToArticle> = response.json().await?;

        Ok(articles
            .into_iter()
            .map(|article| SearchResult {
                title: article.title,
                url: article.url,
                content: article.description.unwrap_or_default(),
                score: None,
                source: SearchSource::Devto,
            })
            .collect())
    }
}
