//! Follow-up suggestions offered alongside a chat reply.

use sandy_core::profile::UserProfile;
use super::keywords::{contains_any, ENERGY_FOLLOW_UP, HELP_FOLLOW_UP};

/// Number of suggestions returned with every reply.
pub const FOLLOW_UP_COUNT: usize = 3;

pub const HELP_CLARIFIER: &str = "Could you tell me more about what kind of help you need?";
pub const ENERGY_QUESTION: &str =
    "Would you like some tips for managing your energy levels throughout the day?";

/// Generic prompts used to pad the list.
pub const GENERIC_FOLLOW_UPS: [&str; FOLLOW_UP_COUNT] = [
    "Is there anything else I can help you with today?",
    "Would you like some personalized recommendations?",
    "How are you feeling right now?",
];

/// Exactly three suggestions: targeted ones first, then generic padding.
pub fn generate_follow_ups(profile: &UserProfile, message: &str) -> Vec<String> {
    let lower = message.to_lowercase();
    let mut suggestions = Vec::with_capacity(FOLLOW_UP_COUNT);

    if let Some(goal) = profile.primary_goal() {
        suggestions.push(format!("How is your progress on {goal} going?"));
    }
    if contains_any(&lower, HELP_FOLLOW_UP) {
        suggestions.push(HELP_CLARIFIER.to_string());
    }
    if contains_any(&lower, ENERGY_FOLLOW_UP) {
        suggestions.push(ENERGY_QUESTION.to_string());
    }

    for generic in GENERIC_FOLLOW_UPS {
        if suggestions.len() >= FOLLOW_UP_COUNT {
            break;
        }
        suggestions.push(generic.to_string());
    }

    suggestions.truncate(FOLLOW_UP_COUNT);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandy_core::profile::Goals;

    #[test]
    fn plain_message_gets_generic_prompts() {
        let suggestions = generate_follow_ups(&UserProfile::new("u1"), "hello");
        assert_eq!(suggestions, GENERIC_FOLLOW_UPS.map(String::from).to_vec());
    }

    #[test]
    fn targeted_suggestions_come_first() {
        let mut profile = UserProfile::new("u1");
        profile.goals = Some(Goals {
            primary: Some("cooking dinner".into()),
            ..Goals::default()
        });
        let suggestions = generate_follow_ups(&profile, "Help, I'm tired");
        assert_eq!(suggestions.len(), FOLLOW_UP_COUNT);
        assert_eq!(suggestions[0], "How is your progress on cooking dinner going?");
        assert_eq!(suggestions[1], HELP_CLARIFIER);
        assert_eq!(suggestions[2], ENERGY_QUESTION);
    }

    #[test]
    fn help_clarifier_is_case_insensitive() {
        let suggestions = generate_follow_ups(&UserProfile::new("u1"), "I need HELP with stairs");
        assert_eq!(suggestions[0], HELP_CLARIFIER);
        assert_eq!(suggestions.len(), FOLLOW_UP_COUNT);
    }

    #[test]
    fn padding_fills_after_targeted() {
        let suggestions = generate_follow_ups(&UserProfile::new("u1"), "low energy today");
        assert_eq!(suggestions[0], ENERGY_QUESTION);
        assert_eq!(suggestions[1], GENERIC_FOLLOW_UPS[0]);
        assert_eq!(suggestions[2], GENERIC_FOLLOW_UPS[1]);
    }
}
