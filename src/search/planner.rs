use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::models::UserProfile;

/// Hard cap on queries issued per generation run.
pub const MAX_QUERIES: usize = 8;
/// Hard cap on feed tags carried into the fallback path.
pub const MAX_TAGS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlan {
    pub queries: Vec<String>,
    /// Lower-cased, deduplicated tags for the feed fallback.
    pub tags: Vec<String>,
}

/// Derive the day's search queries and feed tags from the user profile.
///
/// Deterministic and order-preserving: technologies first, then projects,
/// interests, and one general query. Skills only contribute tags. An empty
/// profile still yields the general query.
pub fn build_search_plan(profile: &UserProfile, date: NaiveDate) -> SearchPlan {
    let mut queries = Vec::new();
    let mut tags = Vec::new();
    let year = date.year();

    for tech in profile.technologies.iter().take(3) {
        queries.push(format!("{tech} latest updates new features {year}"));
        tags.push(tech.to_lowercase());
    }

    for project in profile.projects.iter().take(2) {
        let stack = project.tech_stack.join(" ");
        queries.push(format!("{stack} best practices improvements {year}"));
    }

    for interest in profile.interests.iter().take(2) {
        queries.push(format!("{interest} latest news developments {year}"));
        tags.push(interest.to_lowercase());
    }

    queries.push(format!("developer technology news today {date}"));

    tags.extend(profile.skills.iter().map(|s| s.to_lowercase()));

    queries.truncate(MAX_QUERIES);

    let mut seen = HashSet::new();
    let tags = tags
        .into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .take(MAX_TAGS)
        .collect();

    SearchPlan { queries, tags }
}
