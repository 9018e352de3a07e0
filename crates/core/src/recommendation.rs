//! Recommendation domain types.
//!
//! Recommendations are built either from parsed model output or from the
//! static fallback table, and are immutable once created.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_CATEGORY: &str = "general";
pub const DEFAULT_TIME_TO_COMPLETE: &str = "15-30 minutes";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// A structured, actionable suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub actionable: bool,
    pub difficulty: Difficulty,
    pub estimated_time_to_complete: String,
}

impl Recommendation {
    /// A recommendation with the default category, priority and effort.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            category: DEFAULT_CATEGORY.into(),
            priority: Priority::default(),
            actionable: true,
            difficulty: Difficulty::default(),
            estimated_time_to_complete: DEFAULT_TIME_TO_COMPLETE.into(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_time_to_complete(mut self, estimate: impl Into<String>) -> Self {
        self.estimated_time_to_complete = estimate.into();
        self
    }
}
