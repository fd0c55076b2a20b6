use chrono::{NaiveDate, Utc};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use daybrief::config::SearchConfig;
use daybrief::models::{SearchSource, UserProfile};
use daybrief::search::SearchExecutor;

// ── Test Helpers ──────────────────────────────────────────────────────────

fn search_config(server_uri: &str, tavily_key: Option<&str>) -> SearchConfig {
    SearchConfig {
        tavily_api_key: tavily_key.map(str::to_string),
        tavily_base_url: server_uri.to_string(),
        hackernews_base_url: server_uri.to_string(),
        devto_base_url: server_uri.to_string(),
        max_results_per_query: 3,
        fallback_limit: 15,
        timeout_secs: 5,
    }
}

fn profile_with_technologies(technologies: &[&str]) -> UserProfile {
    UserProfile {
        id: 1,
        name: None,
        skills: vec![],
        technologies: technologies.iter().map(|s| s.to_string()).collect(),
        interests: vec![],
        projects: vec![],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn test_date() -> NaiveDate {
    "2025-06-01".parse().unwrap()
}

fn tavily_body(urls: &[&str]) -> serde_json::Value {
    json!({
        "query": "ignored",
        "results": urls
            .iter()
            .map(|url| {
                json!({
                    "title": format!("Result at {url}"),
                    "url": url,
                    "content": "snippet",
                    "score": 0.91
                })
            })
            .collect::<Vec<_>>()
    })
}

fn hn_hit(title: &str, url: Option<&str>, object_id: &str) -> serde_json::Value {
    json!({
        "title": title,
        "url": url,
        "objectID": object_id,
        "story_text": "story body text"
    })
}

fn devto_article(title: &str, url: &str) -> serde_json::Value {
    json!({
        "title": title,
        "url": url,
        "description": "article description"
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn tavily_results_are_gathered_per_query() {
    let server = MockServer::start().await;

    // A profile with one technology plans two queries: the technology query
    // and the general daily query.
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(
            json!({"query": "Rust latest updates new features 2025", "max_results": 3}),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(tavily_body(&["https://blog.rust-lang.org/release"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(
            json!({"query": "developer technology news today 2025-06-01"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(tavily_body(&["https://news.example/today"])))
        .expect(1)
        .mount(&server)
        .await;

    let executor = SearchExecutor::new(&search_config(&server.uri(), Some("tvly-test"))).unwrap();
    let results = executor
        .execute(&profile_with_technologies(&["Rust"]), test_date())
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.source == SearchSource::Tavily));
    let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
    assert!(urls.contains(&"https://blog.rust-lang.org/release"));
    assert!(urls.contains(&"https://news.example/today"));
}

#[tokio::test]
async fn failed_query_still_yields_the_other_results() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(
            json!({"query": "Rust latest updates new features 2025"}),
        ))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(
            json!({"query": "developer technology news today 2025-06-01"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(tavily_body(&["https://still.example/here"])))
        .expect(1)
        .mount(&server)
        .await;

    let executor = SearchExecutor::new(&search_config(&server.uri(), Some("tvly-test"))).unwrap();
    let results = executor
        .execute(&profile_with_technologies(&["Rust"]), test_date())
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "https://still.example/here");
}

#[tokio::test]
async fn empty_primary_results_trigger_feed_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tavily_body(&[])))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search_by_date"))
        .and(query_param("query", "rust"))
        .and(query_param("tags", "story"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": [hn_hit("Show HN: Zed", Some("https://zed.dev"), "101")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("tag", "rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            devto_article("Rust tips", "https://dev.to/a/rust-tips")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let executor = SearchExecutor::new(&search_config(&server.uri(), Some("tvly-test"))).unwrap();
    let results = executor
        .execute(&profile_with_technologies(&["Rust"]), test_date())
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert!(results.iter().any(|r| r.source == SearchSource::Hackernews));
    assert!(results.iter().any(|r| r.source == SearchSource::Devto));
}

#[tokio::test]
async fn feeds_are_queried_directly_without_tavily_key() {
    let server = MockServer::start().await;

    // fallback_limit 15 splits into 8 for Hacker News and 7 for dev.to.
    Mock::given(method("GET"))
        .and(path("/api/v1/search_by_date"))
        .and(query_param("hitsPerPage", "8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": [
                hn_hit("Shared story", Some("https://shared.example/post"), "201"),
                hn_hit("HN only", Some("https://hn.example/only"), "202")
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("per_page", "7"))
        .and(query_param("top", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            devto_article("Same link again", "https://shared.example/post"),
            devto_article("dev.to only", "https://dev.to/b/only")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let executor = SearchExecutor::new(&search_config(&server.uri(), None)).unwrap();
    let results = executor
        .execute(&profile_with_technologies(&["Rust"]), test_date())
        .await
        .unwrap();

    // The shared URL is deduplicated; the Hacker News copy came first.
    assert_eq!(results.len(), 3);
    let shared = results
        .iter()
        .find(|r| r.url == "https://shared.example/post")
        .unwrap();
    assert_eq!(shared.source, SearchSource::Hackernews);
}

#[tokio::test]
async fn hackernews_failure_leaves_devto_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search_by_date"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            devto_article("Survivor", "https://dev.to/c/survivor")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let executor = SearchExecutor::new(&search_config(&server.uri(), None)).unwrap();
    let results = executor
        .execute(&profile_with_technologies(&["Rust"]), test_date())
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].source, SearchSource::Devto);
    assert_eq!(results[0].url, "https://dev.to/c/survivor");
}

#[tokio::test]
async fn hackernews_stories_without_url_link_to_comments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search_by_date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": [hn_hit("Ask HN: How do you test?", None, "424242")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let executor = SearchExecutor::new(&search_config(&server.uri(), None)).unwrap();
    let results = executor
        .execute(&profile_with_technologies(&["Rust"]), test_date())
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "https://news.ycombinator.com/item?id=424242");
    assert!(results[0].content.starts_with("Ask HN: How do you test?"));
}
