//! User profile: the caller-owned record that personalizes every exchange.
//!
//! Every nested section is optional. The core only reads the profile, with two
//! exceptions: it appends to `conversation_history` (capped at
//! [`PROFILE_HISTORY_CAP`]) and stamps `updated_at` after a successful chat.

use std::path::Path;
use std::str::FromStr;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use crate::error::Error;
use crate::memory::trim_oldest;
use crate::message::ConversationMessage;

/// Maximum number of messages kept in `UserProfile::conversation_history`.
pub const PROFILE_HISTORY_CAP: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<Goals>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ProfileContext>,

    /// Chronological record of past exchanges
    #[serde(default)]
    pub conversation_history: Vec<ConversationMessage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Identity and intake-survey answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_device: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub physical_needs: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accessibility_adaptations: Vec<String>,

    /// Everyday tasks the user finds difficult
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub daily_task_challenges: Vec<String>,

    /// Free-text description of the help the user is looking for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_needed: Option<String>,

    /// Needs the user expects to have soon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_needs_soon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Unknown styles deserialize to `None`
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub communication_style: Option<CommunicationStyle>,

    /// Unknown lengths deserialize to `None`
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub response_length: Option<ResponseLength>,

    /// Topics of interest, in the user's order
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationStyle {
    Professional,
    Casual,
    Friendly,
}

impl FromStr for CommunicationStyle {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professional" => Ok(Self::Professional),
            "casual" => Ok(Self::Casual),
            "friendly" => Ok(Self::Friendly),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseLength {
    Brief,
    Detailed,
    Comprehensive,
}

impl FromStr for ResponseLength {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brief" => Ok(Self::Brief),
            "detailed" => Ok(Self::Detailed),
            "comprehensive" => Ok(Self::Comprehensive),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// A preference value outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preference value: {0}")]
pub struct UnknownVariant(pub String);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,

    #[serde(default)]
    pub secondary: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,

    #[serde(default)]
    pub challenges: Vec<String>,
}

impl UserProfile {
    /// An empty profile for the given user.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Read a profile stored as JSON.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// The primary goal, when one is set and non-empty.
    pub fn primary_goal(&self) -> Option<&str> {
        self.goals
            .as_ref()
            .and_then(|g| g.primary.as_deref())
            .filter(|g| !g.is_empty())
    }

    /// Number of past interactions recorded on the profile.
    pub fn interaction_count(&self) -> usize {
        self.conversation_history.len()
    }

    /// Append messages to the history, trim to [`PROFILE_HISTORY_CAP`] and
    /// stamp `updated_at`.
    pub fn record_exchange(&mut self, messages: impl IntoIterator<Item = ConversationMessage>) {
        self.conversation_history.extend(messages);
        trim_oldest(&mut self.conversation_history, PROFILE_HISTORY_CAP);
        self.updated_at = Some(Utc::now());
    }
}

/// Deserialize an optional enum, mapping unknown strings to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_empty_profile() {
        let profile: UserProfile = serde_json::from_str(r#"{"id": "u1"}"#).unwrap();
        assert_eq!(profile, UserProfile::new("u1"));
        assert!(profile.personal_info.is_none());
        assert!(profile.conversation_history.is_empty());
    }

    #[test]
    fn unknown_preferences_are_dropped() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id": "u1", "preferences": {"communicationStyle": "sarcastic", "responseLength": "epic", "topics": ["sleep"]}}"#,
        )
        .unwrap();
        let prefs = profile.preferences.unwrap();
        assert!(prefs.communication_style.is_none());
        assert!(prefs.response_length.is_none());
        assert_eq!(prefs.topics, vec!["sleep"]);
    }

    #[test]
    fn known_preferences_parse() {
        let prefs: Preferences = serde_json::from_str(
            r#"{"communicationStyle": "friendly", "responseLength": "brief"}"#,
        )
        .unwrap();
        assert_eq!(prefs.communication_style, Some(CommunicationStyle::Friendly));
        assert_eq!(prefs.response_length, Some(ResponseLength::Brief));
    }

    #[test]
    fn record_exchange_caps_history() {
        let mut profile = UserProfile::new("u1");
        for i in 0..30 {
            profile.record_exchange([
                ConversationMessage::user("u1", format!("q{i}")),
                ConversationMessage::assistant("u1", format!("a{i}")),
            ]);
        }
        assert_eq!(profile.conversation_history.len(), PROFILE_HISTORY_CAP);
        assert_eq!(profile.conversation_history[0].content, "q5");
        assert_eq!(profile.conversation_history.last().unwrap().content, "a29");
        assert!(profile.updated_at.is_some());
    }

    #[test]
    fn survey_fields_parse() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id": "u1", "personalInfo": {"dailyTaskChallenges": ["cooking"], "helpNeeded": "meal planning", "otherNeedsSoon": "a new wheelchair"}}"#,
        )
        .unwrap();
        let info = profile.personal_info.unwrap();
        assert_eq!(info.daily_task_challenges, vec!["cooking"]);
        assert_eq!(info.help_needed.as_deref(), Some("meal planning"));
        assert_eq!(info.other_needs_soon.as_deref(), Some("a new wheelchair"));
    }

    #[test]
    fn from_file_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, r#"{"id": "u7", "goals": {"primary": "cook dinner"}}"#).unwrap();
        let profile = UserProfile::from_file(&path).unwrap();
        assert_eq!(profile.id, "u7");
        assert_eq!(profile.primary_goal(), Some("cook dinner"));
    }

    #[test]
    fn from_file_reports_missing_and_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(UserProfile::from_file(&missing), Err(Error::Io { .. })));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "not json").unwrap();
        assert!(matches!(UserProfile::from_file(&bad), Err(Error::Serialization(_))));
    }

    #[test]
    fn empty_primary_goal_is_ignored() {
        let mut profile = UserProfile::new("u1");
        profile.goals = Some(Goals {
            primary: Some(String::new()),
            ..Goals::default()
        });
        assert!(profile.primary_goal().is_none());
    }
}
