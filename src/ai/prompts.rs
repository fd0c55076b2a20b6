//! Prompt templates for briefing generation
//!
//! These templates use basic `format!()` interpolation for type safety.
//! Missing variables will cause compile-time errors.

use chrono::NaiveDate;

use crate::models::{SearchResult, UserProfile};

/// Build the fixed system prompt for briefing generation.
///
/// The prompt pins down the output contract: strict JSON matching the
/// briefing content schema, three named sections with 3-5 items each, no
/// URLs that do not appear in the supplied search results, and all prose
/// in the requested language.
///
/// # Arguments
/// * `language` - The natural language the briefing should be written in
///
/// # Example
/// ```
/// use daybrief::ai::prompts::system_prompt;
///
/// let prompt = system_prompt("English");
/// assert!(prompt.contains("Write all content in English"));
/// assert!(prompt.contains("newTechnologies"));
/// ```
pub fn system_prompt(language: &str) -> String {
    format!(
        r#"You are a personal tech briefing curator. Your job is to analyze search results and create a personalized daily tech briefing for a developer.

Write all content in {language}.

Output ONLY valid JSON matching this exact schema (no markdown, no code fences, no extra text):
{{
  "summary": "2-3 sentence overview of today's briefing",
  "sections": {{
    "newTechnologies": {{
      "title": "New Technologies & Updates",
      "items": [
        {{
          "name": "Technology name",
          "description": "Brief description of the technology or update",
          "relevance": "Why this matters for the user specifically",
          "url": "Source URL from the provided search results"
        }}
      ]
    }},
    "techNews": {{
      "title": "Tech News",
      "items": [
        {{
          "headline": "News headline",
          "summary": "2-3 sentence summary",
          "source": "Source name",
          "url": "Source URL from the provided search results",
          "relevance": "Why this matters for the user"
        }}
      ]
    }},
    "projectIdeas": {{
      "title": "Project Ideas & Improvements",
      "items": [
        {{
          "project": "Which user project this relates to",
          "suggestion": "Specific actionable suggestion",
          "rationale": "Why this would improve the project",
          "resources": ["URL1", "URL2"]
        }}
      ]
    }}
  }},
  "generatedAt": "ISO timestamp"
}}

Rules:
- Include 3-5 items per section
- ONLY cite URLs that appear in the provided search results - never make up URLs
- Focus on practical relevance to the user's specific skills and projects
- Keep each item concise (2-3 sentences max)
- If search results are limited, focus on quality over quantity
- Always return valid JSON
- Write all content in {language}"#
    )
}

/// Render the profile and the day's search results into the user prompt.
///
/// `generated_at` is the timestamp the model is told to echo back in the
/// content's `generatedAt` field.
pub fn user_prompt(
    profile: &UserProfile,
    results: &[SearchResult],
    date: NaiveDate,
    generated_at: &str,
) -> String {
    let skills = join_or_not_specified(&profile.skills);
    let technologies = join_or_not_specified(&profile.technologies);
    let interests = join_or_not_specified(&profile.interests);

    let projects = if profile.projects.is_empty() {
        "  None specified".to_string()
    } else {
        profile
            .projects
            .iter()
            .map(|p| {
                format!(
                    "  - {}: {} (Tech: {})",
                    p.name,
                    p.description,
                    p.tech_stack.join(", ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let search_results = results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "### Result {}: {}\nSource: {} | URL: {}\n{}\n",
                i + 1,
                r.title,
                r.source,
                r.url,
                r.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"## My Profile
- **Skills**: {skills}
- **Technologies**: {technologies}
- **Interests**: {interests}
- **Projects**:
{projects}

## Today's Search Results ({date})
{search_results}

Generate my personalized daily tech briefing for {date}. Focus on what's most relevant to my skills, technologies, and current projects. Set generatedAt to "{generated_at}"."#
    )
}

fn join_or_not_specified(values: &[String]) -> String {
    if values.is_empty() {
        "Not specified".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, SearchSource};
    use chrono::Utc;

    fn test_profile() -> UserProfile {
        UserProfile {
            id: 1,
            name: Some("Ada".to_string()),
            skills: vec!["backend".to_string()],
            technologies: vec!["Rust".to_string(), "Postgres".to_string()],
            interests: vec![],
            projects: vec![Project {
                name: "daybrief".to_string(),
                description: "daily briefings".to_string(),
                tech_stack: vec!["rust".to_string(), "axum".to_string()],
            }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_system_prompt_pins_schema_and_rules() {
        let prompt = system_prompt("English");

        assert!(prompt.contains("\"newTechnologies\""));
        assert!(prompt.contains("\"techNews\""));
        assert!(prompt.contains("\"projectIdeas\""));
        assert!(prompt.contains("\"generatedAt\""));
        assert!(prompt.contains("Include 3-5 items per section"));
        assert!(prompt.contains("never make up URLs"));
        assert!(prompt.contains("quality over quantity"));
    }

    #[test]
    fn test_system_prompt_mandates_language() {
        let prompt = system_prompt("Korean");
        assert_eq!(prompt.matches("Write all content in Korean").count(), 2);
    }

    #[test]
    fn test_user_prompt_renders_profile_and_results() {
        let results = vec![SearchResult {
            title: "Rust 1.80".to_string(),
            url: "https://blog.rust-lang.org/1.80".to_string(),
            content: "Release announcement".to_string(),
            score: Some(0.9),
            source: SearchSource::Tavily,
        }];
        let date: NaiveDate = "2025-06-01".parse().unwrap();

        let prompt = user_prompt(&test_profile(), &results, date, "2025-06-01T07:00:00.000Z");

        assert!(prompt.contains("- **Skills**: backend"));
        assert!(prompt.contains("- **Technologies**: Rust, Postgres"));
        assert!(prompt.contains("- **Interests**: Not specified"));
        assert!(prompt.contains("  - daybrief: daily briefings (Tech: rust, axum)"));
        assert!(prompt.contains("## Today's Search Results (2025-06-01)"));
        assert!(prompt.contains("### Result 1: Rust 1.80"));
        assert!(prompt.contains("Source: tavily | URL: https://blog.rust-lang.org/1.80"));
        assert!(prompt.contains("Set generatedAt to \"2025-06-01T07:00:00.000Z\""));
    }

    #[test]
    fn test_user_prompt_with_empty_profile_and_no_results() {
        let profile = UserProfile {
            id: 1,
            name: None,
            skills: vec![],
            technologies: vec![],
            interests: vec![],
            projects: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let date: NaiveDate = "2025-06-01".parse().unwrap();

        let prompt = user_prompt(&profile, &[], date, "2025-06-01T07:00:00.000Z");

        assert!(prompt.contains("- **Skills**: Not specified"));
        assert!(prompt.contains("  None specified"));
        assert!(!prompt.contains("### Result"));
    }
}
