use serde::{Deserialize, Serialize};

/// A single search hit, normalized across providers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub source: SearchSource,
}

/// Which provider produced a result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    Tavily,
    Hackernews,
    Devto,
}

impl std::fmt::Display for SearchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tavily => write!(f, "tavily"),
            Self::Hackernews => write!(f, "hackernews"),
            Self::Devto => write!(f, "devto"),
        }
    }
}
