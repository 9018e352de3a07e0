//! Keyword tables used for intent detection, confidence and follow-ups.
//!
//! All matching is case-insensitive substring matching against the
//! lower-cased message, so entries are stored lower-case.

pub const HELP_REQUEST: &[&str] = &["help", "assist", "support", "how do i", "how can i"];

pub const RECOMMENDATION_REQUEST: &[&str] = &["recommend", "suggest", "advice", "what should i"];

pub const ENERGY_CONCERN: &[&str] = &["tired", "energy", "exhausted", "fatigue"];

pub const PAIN_CONCERN: &[&str] = &["pain", "hurt", "ache", "sore"];

pub const GOAL_DISCUSSION: &[&str] = &["goal", "achieve", "plan", "target"];

/// Crisis or urgency markers; lower the confidence score.
pub const CRISIS: &[&str] = &[
    "emergency",
    "crisis",
    "urgent",
    "suicide",
    "hurt myself",
    "self-harm",
];

/// Words that trigger the help clarifier follow-up.
pub const HELP_FOLLOW_UP: &[&str] = &["help"];

/// Words that trigger the energy follow-up question.
pub const ENERGY_FOLLOW_UP: &[&str] = &["tired", "energy"];

/// Whether the already lower-cased `text` contains any keyword.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_lower_case_and_non_empty() {
        for table in [
            HELP_REQUEST,
            RECOMMENDATION_REQUEST,
            ENERGY_CONCERN,
            PAIN_CONCERN,
            GOAL_DISCUSSION,
            CRISIS,
            HELP_FOLLOW_UP,
            ENERGY_FOLLOW_UP,
        ] {
            assert!(!table.is_empty());
            for keyword in table {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn contains_any_matches_substrings() {
        assert!(contains_any("i feel exhausted today", ENERGY_CONCERN));
        assert!(contains_any("my back aches", PAIN_CONCERN));
        assert!(!contains_any("hello there", CRISIS));
    }
}
