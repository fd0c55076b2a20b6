mod executor;
mod feeds;
mod planner;
mod tavily;

pub use executor::SearchExecutor;
pub use feeds::{DevToClient, HackerNewsClient};
pub use planner::{build_search_plan, SearchPlan, MAX_QUERIES, MAX_TAGS};
pub use tavily::TavilyClient;
