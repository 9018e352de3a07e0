//! Recommendation list parsing.
//!
//! Model output is expected to be a numbered list: a line such as
//! `1. Plan rest breaks` starts a new recommendation, and the lines that
//! follow (until the next numbered line) form its description. Parsing is
//! best-effort; when nothing usable comes back the caller gets a fixed set
//! of general recommendations instead.

use std::sync::LazyLock;
use regex_lite::Regex;
use sandy_core::error::ParseError;
use sandy_core::recommendation::{Priority, Recommendation};
use tracing::warn;

/// At most this many recommendations are kept from one response.
pub const MAX_RECOMMENDATIONS: usize = 5;

static NUMBERED_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s*(.*)$").unwrap());

struct Draft {
    title: String,
    description: Vec<String>,
}

impl Draft {
    fn finish(self) -> Option<Recommendation> {
        if self.title.is_empty() {
            return None;
        }
        Some(
            Recommendation::new(self.title, self.description.join(" "))
                .with_priority(Priority::Medium),
        )
    }
}

/// Parse a numbered list into recommendations, keeping at most five.
pub fn parse_recommendations(text: &str) -> Result<Vec<Recommendation>, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut items = Vec::new();
    let mut current: Option<Draft> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(caps) = NUMBERED_LINE.captures(line) {
            if let Some(rec) = current.take().and_then(Draft::finish) {
                items.push(rec);
            }
            let title = caps.get(1).map_or("", |m| m.as_str()).trim();
            current = Some(Draft {
                title: title.to_string(),
                description: Vec::new(),
            });
        } else if let Some(draft) = current.as_mut() {
            draft.description.push(line.to_string());
        }
    }
    if let Some(rec) = current.and_then(Draft::finish) {
        items.push(rec);
    }

    if items.is_empty() {
        return Err(ParseError::NoNumberedItems);
    }
    items.truncate(MAX_RECOMMENDATIONS);
    Ok(items)
}

/// The three general recommendations used whenever parsing or the
/// completion call fails.
pub fn static_fallback_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation::new(
            "Establish a Daily Routine",
            "Set consistent times for meals, rest, and activities to make each day more predictable.",
        )
        .with_category("daily_living")
        .with_priority(Priority::High),
        Recommendation::new(
            "Practice Energy Pacing",
            "Break larger tasks into smaller steps and schedule rest between them to avoid burnout.",
        )
        .with_category("wellness"),
        Recommendation::new(
            "Connect with Support Resources",
            "Reach out to local support groups or community services that understand your needs.",
        )
        .with_category("support")
        .with_time_to_complete("30-60 minutes"),
    ]
}

/// Parse model output, substituting the static set when nothing parses.
pub fn parse_recommendations_or_fallback(text: &str) -> Vec<Recommendation> {
    match parse_recommendations(text) {
        Ok(items) => items,
        Err(e) => {
            warn!(error = %e, "Falling back to static recommendations");
            static_fallback_recommendations()
        }
    }
}
