//! Keyword-based intent classification.

use serde::{Deserialize, Serialize};
use super::keywords::{self, contains_any};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    HelpRequest,
    RecommendationRequest,
    EnergyConcern,
    PainConcern,
    GoalDiscussion,
    #[default]
    GeneralConversation,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HelpRequest => "help_request",
            Self::RecommendationRequest => "recommendation_request",
            Self::EnergyConcern => "energy_concern",
            Self::PainConcern => "pain_concern",
            Self::GoalDiscussion => "goal_discussion",
            Self::GeneralConversation => "general_conversation",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checked in order; the first group with a matching keyword wins.
const INTENT_TABLE: &[(Intent, &[&str])] = &[
    (Intent::HelpRequest, keywords::HELP_REQUEST),
    (Intent::RecommendationRequest, keywords::RECOMMENDATION_REQUEST),
    (Intent::EnergyConcern, keywords::ENERGY_CONCERN),
    (Intent::PainConcern, keywords::PAIN_CONCERN),
    (Intent::GoalDiscussion, keywords::GOAL_DISCUSSION),
];

pub fn detect_intent(message: &str) -> Intent {
    let lower = message.to_lowercase();
    INTENT_TABLE
        .iter()
        .find(|(_, words)| contains_any(&lower, words))
        .map(|(intent, _)| *intent)
        .unwrap_or_default()
}
