//! System message builder.
//!
//! Turns a base template, the user's profile and the request context into the
//! instruction text sent as the first message of every chat request. Pure:
//! identical inputs always produce identical output.

use sandy_core::profile::{CommunicationStyle, ResponseLength, UserProfile};
use serde::{Deserialize, Serialize};
use crate::prompts::PromptTemplate;

/// Value of `ChatContext::kind` that triggers the crisis clause.
pub const CRISIS_CONTEXT: &str = "crisis";

/// Request-scoped hints supplied by the caller alongside a chat message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatContext {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Anything else the caller attached; carried but not interpreted
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ChatContext {
    pub fn crisis() -> Self {
        Self {
            kind: Some(CRISIS_CONTEXT.into()),
            ..Self::default()
        }
    }

    pub fn is_crisis(&self) -> bool {
        self.kind.as_deref() == Some(CRISIS_CONTEXT)
    }
}

fn style_clause(style: Option<CommunicationStyle>) -> &'static str {
    match style {
        Some(CommunicationStyle::Professional) => {
            "Communicate in a professional, clear, and respectful tone."
        }
        Some(CommunicationStyle::Casual) => {
            "Communicate in a relaxed, casual, conversational tone."
        }
        Some(CommunicationStyle::Friendly) => {
            "Communicate in a warm, friendly, and encouraging tone."
        }
        None => "Communicate in a balanced tone that is both supportive and informative.",
    }
}

fn length_clause(length: ResponseLength) -> &'static str {
    match length {
        ResponseLength::Brief => "Keep responses brief and to the point.",
        ResponseLength::Detailed => "Provide detailed responses with helpful explanations.",
        ResponseLength::Comprehensive => {
            "Provide comprehensive responses that cover the topic thoroughly."
        }
    }
}

/// Build the system instruction for a request.
///
/// Clauses are appended to the template in a fixed order: communication
/// style, response length, interests, goal focus, then the crisis template
/// when the context is marked as a crisis. Missing profile fields skip their
/// clause.
pub fn build_system_message(
    template: PromptTemplate,
    profile: &UserProfile,
    context: &ChatContext,
) -> String {
    let mut clauses: Vec<String> = vec![template.text().to_string()];

    let prefs = profile.preferences.as_ref();
    clauses.push(style_clause(prefs.and_then(|p| p.communication_style)).to_string());

    if let Some(length) = prefs.and_then(|p| p.response_length) {
        clauses.push(length_clause(length).to_string());
    }

    if let Some(topics) = prefs.map(|p| &p.topics).filter(|t| !t.is_empty()) {
        clauses.push(format!(
            "The user is interested in: {}. Relate your answers to these interests when relevant.",
            topics.join(", ")
        ));
    }

    if let Some(goal) = profile.primary_goal() {
        clauses.push(format!(
            "The user's primary goal is: {goal}. Help them make progress toward it."
        ));
    }

    if context.is_crisis() {
        clauses.push(PromptTemplate::Crisis.text().to_string());
    }

    clauses.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandy_core::profile::{Goals, Preferences};

    fn profile_with(prefs: Preferences) -> UserProfile {
        UserProfile {
            preferences: Some(prefs),
            ..UserProfile::new("u1")
        }
    }

    #[test]
    fn empty_profile_gets_template_and_balanced_tone() {
        let msg = build_system_message(
            PromptTemplate::Main,
            &UserProfile::new("u1"),
            &ChatContext::default(),
        );
        assert!(msg.starts_with(PromptTemplate::Main.text()));
        assert!(msg.contains("balanced tone"));
        assert!(!msg.contains("interested in"));
        assert!(!msg.contains(PromptTemplate::Crisis.text()));
    }

    #[test]
    fn clauses_follow_fixed_order() {
        let mut profile = profile_with(Preferences {
            communication_style: Some(CommunicationStyle::Friendly),
            response_length: Some(ResponseLength::Brief),
            topics: vec!["cooking".into(), "gardening".into()],
        });
        profile.goals = Some(Goals {
            primary: Some("walk daily".into()),
            ..Goals::default()
        });

        let msg = build_system_message(PromptTemplate::Main, &profile, &ChatContext::crisis());

        let style = msg.find("friendly").unwrap();
        let length = msg.find("brief").unwrap();
        let topics = msg.find("cooking, gardening").unwrap();
        let goal = msg.find("walk daily").unwrap();
        let crisis = msg.find(PromptTemplate::Crisis.text()).unwrap();
        assert!(style < length && length < topics && topics < goal && goal < crisis);
    }

    #[test]
    fn no_length_clause_when_unset() {
        let msg = build_system_message(
            PromptTemplate::Main,
            &profile_with(Preferences::default()),
            &ChatContext::default(),
        );
        for length in [
            ResponseLength::Brief,
            ResponseLength::Detailed,
            ResponseLength::Comprehensive,
        ] {
            assert!(!msg.contains(length_clause(length)));
        }
    }

    #[test]
    fn unknown_style_from_json_uses_balanced_clause() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id": "u1", "preferences": {"communicationStyle": "sarcastic"}}"#,
        )
        .unwrap();
        let msg = build_system_message(PromptTemplate::Main, &profile, &ChatContext::default());
        assert!(msg.contains("balanced tone"));
    }

    #[test]
    fn crisis_clause_only_for_crisis_context() {
        let profile = UserProfile::new("u1");
        let other = ChatContext {
            kind: Some("intake".into()),
            ..ChatContext::default()
        };
        let crisis = PromptTemplate::Crisis.text();

        assert!(build_system_message(PromptTemplate::Main, &profile, &ChatContext::crisis())
            .contains(crisis));
        assert!(!build_system_message(PromptTemplate::Main, &profile, &other).contains(crisis));
    }

    #[test]
    fn builder_is_deterministic() {
        let profile = profile_with(Preferences {
            topics: vec!["music".into()],
            ..Preferences::default()
        });
        let a = build_system_message(PromptTemplate::Main, &profile, &ChatContext::default());
        let b = build_system_message(PromptTemplate::Main, &profile, &ChatContext::default());
        assert_eq!(a, b);
    }

    #[test]
    fn context_parses_type_field_and_keeps_extras() {
        let ctx: ChatContext =
            serde_json::from_str(r#"{"type": "crisis", "source": "hotline"}"#).unwrap();
        assert!(ctx.is_crisis());
        assert_eq!(ctx.extra["source"], "hotline");
    }
}
