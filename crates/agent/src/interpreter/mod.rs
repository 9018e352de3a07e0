//! Response interpreter: lightweight signals derived from an exchange.
//!
//! Everything here is pure text processing over the user's message, the
//! model's reply and the profile. No completion calls are made.

pub mod confidence;
pub mod followups;
pub mod intent;
pub mod keywords;
pub mod recommendations;

pub use confidence::score_confidence;
pub use followups::generate_follow_ups;
pub use intent::{detect_intent, Intent};
pub use recommendations::{
    parse_recommendations, parse_recommendations_or_fallback, static_fallback_recommendations,
};
