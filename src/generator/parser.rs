use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{DaybriefError, Result};
use crate::models::BriefingContent;

/// How much of the raw response survives into a parse error message.
const ERROR_EXCERPT_CHARS: usize = 500;

fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").expect("fence pattern is a valid regex")
    })
}

/// Parse a model response into validated briefing content.
///
/// Models do not reliably honor "JSON only" instructions, so candidates are
/// tried in order of decreasing trust: the raw text as-is, the text with
/// Markdown code fences stripped, then the outermost `{...}` span. The
/// first candidate that deserializes into the full content shape wins; if
/// none does, the error carries a truncated excerpt of the raw text.
pub fn parse_briefing_content(raw: &str) -> Result<BriefingContent> {
    let candidates = [
        Some(Cow::Borrowed(raw)),
        strip_code_fences(raw),
        brace_span(raw).map(Cow::Borrowed),
    ];

    for candidate in candidates.into_iter().flatten() {
        if let Ok(content) = serde_json::from_str::<BriefingContent>(&candidate) {
            return Ok(content);
        }
    }

    Err(DaybriefError::Parse(
        raw.chars().take(ERROR_EXCERPT_CHARS).collect(),
    ))
}

/// Replace every fenced block with its inner text, so ```json { ... } ```
/// becomes just the JSON. Returns None when the text has no fences.
fn strip_code_fences(raw: &str) -> Option<Cow<'_, str>> {
    if !raw.contains("```") {
        return None;
    }
    let stripped = fence_regex().replace_all(raw, "$1");
    Some(Cow::Owned(stripped.trim().to_string()))
}

/// The widest `{...}` span in the text: first opening brace to last
/// closing brace.
fn brace_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}
