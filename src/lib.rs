//! Daybrief: self-hostable daily tech briefing generator.
//!
//! Plans web searches from a user profile, executes them against Tavily or
//! public feeds, and asks an AI provider to distill the results into a
//! structured daily briefing served over a REST API.

pub mod ai;
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod generator;
pub mod models;
pub mod search;
pub mod services;
