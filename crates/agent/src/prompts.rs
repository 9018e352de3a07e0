//! Prompt templates and request prompt assembly.
//!
//! The template store is a fixed mapping from scenario to base instruction
//! text. The `*_prompt` functions turn a profile and request details into the
//! user-side prompt for the one-shot scenarios (recommendations, intake,
//! summary).

use std::fmt::Write as _;
use sandy_core::message::{ConversationMessage, ConversationRole};
use sandy_core::profile::UserProfile;

/// Focus area used when the caller does not name one.
pub const DEFAULT_RECOMMENDATION_AREA: &str = "overall wellness and daily living support";

/// The scenarios with a base instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptTemplate {
    Main,
    Recommendation,
    Intake,
    Crisis,
}

impl PromptTemplate {
    pub const ALL: [PromptTemplate; 4] = [
        PromptTemplate::Main,
        PromptTemplate::Recommendation,
        PromptTemplate::Intake,
        PromptTemplate::Crisis,
    ];

    /// Look a template up by its scenario name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "main" => Some(Self::Main),
            "recommendation" => Some(Self::Recommendation),
            "intake" => Some(Self::Intake),
            "crisis" => Some(Self::Crisis),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Recommendation => "recommendation",
            Self::Intake => "intake",
            Self::Crisis => "crisis",
        }
    }

    /// The base instruction text.
    pub fn text(&self) -> &'static str {
        match self {
            Self::Main => MAIN_TEMPLATE,
            Self::Recommendation => RECOMMENDATION_TEMPLATE,
            Self::Intake => INTAKE_TEMPLATE,
            Self::Crisis => CRISIS_TEMPLATE,
        }
    }
}

const MAIN_TEMPLATE: &str = concat!(
    "You are Sandy, a warm and knowledgeable support assistant for people living with ",
    "disabilities, chronic conditions, and everyday access needs. ",
    "Help users with daily living, energy management, assistive technology, and finding ",
    "practical resources. Be respectful, patient, and concrete. ",
    "Never diagnose medical conditions; encourage users to consult qualified professionals ",
    "for medical decisions.",
);

const RECOMMENDATION_TEMPLATE: &str = concat!(
    "You are Sandy, a support assistant that produces personalized, practical recommendations. ",
    "Respond with a numbered list of 3 to 5 recommendations. ",
    "Put each recommendation title on its own line starting with its number and a period ",
    "(for example \"1. Plan rest breaks\"), followed by one or two lines describing how to act on it.",
);

const INTAKE_TEMPLATE: &str = concat!(
    "You are Sandy, guiding a new user through an intake conversation. ",
    "Acknowledge what the user shared with empathy, reflect back the key points, ",
    "and ask at most one gentle follow-up question to learn more about their needs.",
);

const CRISIS_TEMPLATE: &str = concat!(
    "IMPORTANT: The user may be in crisis. Respond calmly and with compassion. ",
    "Prioritize their immediate safety, encourage them to contact local emergency services ",
    "or a crisis hotline right away, and do not attempt to handle the emergency alone.",
);

/// Prompt asking for recommendations tailored to the profile.
pub fn recommendation_prompt(profile: &UserProfile, area: Option<&str>) -> String {
    let area = area
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or(DEFAULT_RECOMMENDATION_AREA);

    let mut prompt = format!("Generate personalized recommendations focused on {area}.\n");

    if let Some(info) = &profile.personal_info {
        if let Some(condition) = &info.condition_name {
            let _ = writeln!(prompt, "Condition: {condition}");
        }
        if let Some(energy) = &info.energy_level {
            let _ = writeln!(prompt, "Energy level: {energy}");
        }
        if let Some(device) = &info.main_device {
            let _ = writeln!(prompt, "Main device: {device}");
        }
        if !info.physical_needs.is_empty() {
            let _ = writeln!(prompt, "Physical needs: {}", info.physical_needs.join(", "));
        }
        if !info.accessibility_adaptations.is_empty() {
            let _ = writeln!(
                prompt,
                "Accessibility adaptations: {}",
                info.accessibility_adaptations.join(", ")
            );
        }
        if !info.daily_task_challenges.is_empty() {
            let _ = writeln!(
                prompt,
                "Daily task challenges: {}",
                info.daily_task_challenges.join(", ")
            );
        }
        if let Some(help) = &info.help_needed {
            let _ = writeln!(prompt, "Help needed: {help}");
        }
        if let Some(upcoming) = &info.other_needs_soon {
            let _ = writeln!(prompt, "Upcoming needs: {upcoming}");
        }
    }

    if let Some(ctx) = &profile.context {
        if let Some(role) = &ctx.role {
            let _ = writeln!(prompt, "Role: {role}");
        }
        if let Some(industry) = &ctx.industry {
            let _ = writeln!(prompt, "Industry: {industry}");
        }
        if let Some(experience) = &ctx.experience {
            let _ = writeln!(prompt, "Experience: {experience}");
        }
        if !ctx.challenges.is_empty() {
            let _ = writeln!(prompt, "Challenges: {}", ctx.challenges.join(", "));
        }
    }

    if let Some(goals) = &profile.goals {
        if let Some(primary) = &goals.primary {
            let _ = writeln!(prompt, "Primary goal: {primary}");
        }
        if !goals.secondary.is_empty() {
            let _ = writeln!(prompt, "Other goals: {}", goals.secondary.join(", "));
        }
        if let Some(timeline) = &goals.timeline {
            let _ = writeln!(prompt, "Timeline: {timeline}");
        }
    }

    if let Some(prefs) = &profile.preferences {
        if !prefs.topics.is_empty() {
            let _ = writeln!(prompt, "Interests: {}", prefs.topics.join(", "));
        }
    }

    prompt.push_str("Format the answer as a numbered list.");
    prompt
}

/// Prompt for one answer in the intake questionnaire.
pub fn intake_prompt(section: &str, response_text: &str, profile: &UserProfile) -> String {
    format!(
        "Intake section: {section}\n\
         User response: {response_text}\n\
         Previous interactions: {}\n\
         Acknowledge this response and, if helpful, ask one follow-up question.",
        profile.interaction_count()
    )
}

/// Prompt asking for a summary of recent exchanges.
pub fn summary_prompt(messages: &[ConversationMessage]) -> String {
    let mut prompt = String::from(
        "Summarize the following conversation in a few sentences. \
         Highlight the user's main concerns and any next steps.\n\n",
    );
    for message in messages {
        let speaker = match message.role {
            ConversationRole::User => "User",
            ConversationRole::Assistant => "Assistant",
        };
        let _ = writeln!(prompt, "{speaker}: {}", message.content);
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandy_core::profile::{Goals, PersonalInfo, ProfileContext};

    #[test]
    fn every_template_round_trips_by_name() {
        for template in PromptTemplate::ALL {
            assert_eq!(PromptTemplate::from_name(template.name()), Some(template));
            assert!(!template.text().is_empty());
        }
        assert!(PromptTemplate::from_name("unknown").is_none());
    }

    #[test]
    fn recommendation_prompt_uses_default_area() {
        let prompt = recommendation_prompt(&UserProfile::new("u1"), None);
        assert!(prompt.contains(DEFAULT_RECOMMENDATION_AREA));

        let blank = recommendation_prompt(&UserProfile::new("u1"), Some("  "));
        assert!(blank.contains(DEFAULT_RECOMMENDATION_AREA));
    }

    #[test]
    fn recommendation_prompt_includes_profile_details() {
        let mut profile = UserProfile::new("u1");
        profile.personal_info = Some(PersonalInfo {
            energy_level: Some("low".into()),
            physical_needs: vec!["mobility".into(), "fine motor".into()],
            daily_task_challenges: vec!["laundry".into()],
            help_needed: Some("carrying groceries".into()),
            ..PersonalInfo::default()
        });
        profile.context = Some(ProfileContext {
            challenges: vec!["cooking".into()],
            ..ProfileContext::default()
        });
        profile.goals = Some(Goals {
            primary: Some("cook independently".into()),
            ..Goals::default()
        });

        let prompt = recommendation_prompt(&profile, Some("meal preparation"));
        assert!(prompt.contains("focused on meal preparation"));
        assert!(prompt.contains("Energy level: low"));
        assert!(prompt.contains("Physical needs: mobility, fine motor"));
        assert!(prompt.contains("Daily task challenges: laundry"));
        assert!(prompt.contains("Help needed: carrying groceries"));
        assert!(!prompt.contains("Upcoming needs"));
        assert!(prompt.contains("Challenges: cooking"));
        assert!(prompt.contains("Primary goal: cook independently"));
    }

    #[test]
    fn intake_prompt_embeds_section_response_and_count() {
        let mut profile = UserProfile::new("u1");
        profile.record_exchange([
            ConversationMessage::user("u1", "hi"),
            ConversationMessage::assistant("u1", "hello"),
        ]);
        let prompt = intake_prompt("daily_tasks", "Cooking is hard", &profile);
        assert!(prompt.contains("Intake section: daily_tasks"));
        assert!(prompt.contains("User response: Cooking is hard"));
        assert!(prompt.contains("Previous interactions: 2"));
    }

    #[test]
    fn summary_prompt_labels_speakers() {
        let messages = vec![
            ConversationMessage::user("u1", "I'm tired"),
            ConversationMessage::assistant("u1", "Let's plan rest breaks"),
        ];
        let prompt = summary_prompt(&messages);
        assert!(prompt.contains("User: I'm tired"));
        assert!(prompt.contains("Assistant: Let's plan rest breaks"));
    }
}
