//! Heuristic confidence score for a chat reply.

use sandy_core::profile::UserProfile;
use super::keywords::{contains_any, CRISIS};

const BASE: f32 = 0.7;
const PERSONAL_INFO_BONUS: f32 = 0.1;
const PREFERENCES_BONUS: f32 = 0.1;
const GOALS_BONUS: f32 = 0.05;
const CONTEXT_BONUS: f32 = 0.05;
const CRISIS_PENALTY: f32 = 0.2;

pub const MIN_CONFIDENCE: f32 = 0.1;
pub const MAX_CONFIDENCE: f32 = 1.0;

/// Score how well the profile lets us personalize a reply to `message`.
///
/// Richer profiles score higher; crisis or urgency language lowers the score.
/// The result always lies in `[0.1, 1.0]`.
pub fn score_confidence(profile: &UserProfile, message: &str) -> f32 {
    let mut score = BASE;
    if profile.personal_info.is_some() {
        score += PERSONAL_INFO_BONUS;
    }
    if profile.preferences.is_some() {
        score += PREFERENCES_BONUS;
    }
    if profile.goals.is_some() {
        score += GOALS_BONUS;
    }
    if profile.context.is_some() {
        score += CONTEXT_BONUS;
    }
    if contains_any(&message.to_lowercase(), CRISIS) {
        score -= CRISIS_PENALTY;
    }
    score.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}
